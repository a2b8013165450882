//! Networking modules for the remote inventory API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves where the API lives, `api` performs the REST calls, and
//! `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod types;
