//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, navigation) and
//! delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod registro;
