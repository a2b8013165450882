//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the inventory screens while reading/writing shared
//! state from Leptos context providers.

pub mod item_table;
pub mod navbar;
pub mod telefono_form;
pub mod toast_stack;
