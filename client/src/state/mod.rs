//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `records`, `table`, `wizard`, `toast`)
//! so components depend on small focused models. Everything here is plain
//! data and pure functions; the Leptos layer wraps it in `RwSignal`s.

pub mod auth;
pub mod records;
pub mod table;
pub mod toast;
pub mod wizard;
