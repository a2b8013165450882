//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It renders the Leptos shell for every app
//! route, serves the compiled WASM/CSS bundle under `/pkg`, and answers
//! `/healthz`. The browser talks to the remote inventory API directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{HostConfig, HostError};

/// Routes that do not depend on the Leptos site configuration.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend plus static assets and health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` variables and no `[workspace.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let api = config.api.clone();
            move || client::app::shell(opts.clone(), api.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
