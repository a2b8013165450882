//! # client
//!
//! Leptos + WASM frontend for the telefono inventory: login, a dashboard
//! table with sort/search/filter, and a two-step registration form, all over
//! the remote REST API.
//!
//! Built with `hydrate` for the browser and with `ssr` for the host binary
//! that renders the shell.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
