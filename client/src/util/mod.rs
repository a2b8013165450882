//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and cell formatting live here so pages and components stay
//! focused on rendering.

pub mod auth;
pub mod format;
