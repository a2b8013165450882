//! Login page: username + password against the remote auth endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single attempt per submission. A response with a token starts the
//! session, fetches the profile, and navigates to the dashboard; anything
//! else shows the invalid-credentials toast and stays here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
use crate::net::config::ApiConfig;
use crate::net::types::{Credentials, LoginResponse};
use crate::state::auth::{AuthState, INVALID_CREDENTIALS, token_from_login};
use crate::state::toast::ToastState;

pub const MISSING_CREDENTIALS: &str = "Ingresa usuario y contraseña";

/// Trim the username and require both fields. The password is sent as typed.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS`] when either field is empty.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Decide the outcome of a login request: the token to start a session with
/// (and then go to the dashboard), or the toast message to show in place.
///
/// # Errors
///
/// Returns [`INVALID_CREDENTIALS`] for a failed request or a response without
/// a usable token.
pub fn login_outcome(result: Result<LoginResponse, ApiError>) -> Result<String, &'static str> {
    match result {
        Ok(response) => token_from_login(&response),
        Err(e) => {
            log::warn!("login request failed: {e}");
            Err(INVALID_CREDENTIALS)
        }
    }
}

/// Log in, then attach the profile. A failed profile lookup keeps the session.
#[cfg(feature = "hydrate")]
async fn perform_login(
    api: &ApiConfig,
    credentials: &Credentials,
    auth: RwSignal<AuthState>,
) -> Result<(), &'static str> {
    let token = login_outcome(crate::net::api::login(api, credentials).await)?;
    auth.update(|a| a.sign_in(token.clone()));

    match crate::net::api::fetch_profile(api, &token).await {
        Ok(profile) => auth.update(|a| a.set_profile(profile)),
        Err(e) => log::warn!("profile lookup failed: {e}"),
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let pending = move || auth.with(|a| a.pending);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.pending) {
            return;
        }
        let credentials = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                toasts.update(|t| {
                    t.error(message, None);
                });
                return;
            }
        };
        auth.update(|a| a.pending = true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = perform_login(&api, &credentials, auth).await;
                auth.update(|a| a.pending = false);
                match result {
                    Ok(()) => navigate(crate::util::auth::DASHBOARD_ROUTE, NavigateOptions::default()),
                    Err(message) => toasts.update(|t| {
                        t.error(message, None);
                    }),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &api, &navigate);
            auth.update(|a| a.pending = false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h1>"Inicia sesión"</h1>
                    <p class="login-card__subtitle">"Ingresa tus credenciales para acceder"</p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="username">"Usuario"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Ingresa tu usuario"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Contraseña"</label>
                    <div class="login-password">
                        <input
                            id="password"
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Ingresa tu contraseña"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="login-password__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=pending>
                        {move || if pending() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
