//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated routes (dashboard, registration) apply identical redirect
//! behavior when no session is present.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const REGISTRO_ROUTE: &str = "/registro";

/// True once no login is in flight and there is no session.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.pending && !state.is_authenticated()
}

/// Redirect to `/login` whenever the session is missing.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
