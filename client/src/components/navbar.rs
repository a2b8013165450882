//! Top navigation bar: registration link, greeting, and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::records::RecordsState;
use crate::util::auth::{LOGIN_ROUTE, REGISTRO_ROUTE};

/// "Bienvenido {username}" once the profile is loaded.
#[must_use]
pub fn greeting(auth: &AuthState) -> Option<String> {
    auth.username().map(|name| format!("Bienvenido {name}"))
}

/// Drop the session and the records fetched under it.
pub fn end_session(auth: &mut AuthState, records: &mut RecordsState) {
    auth.sign_out();
    records.invalidate();
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let records = expect_context::<RwSignal<RecordsState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.update(|a| records.update(|r| end_session(a, r)));
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a href=REGISTRO_ROUTE class="navbar__item" title="Registrar teléfono">
                "+ Nuevo"
            </a>
            <p class="navbar__greeting">{move || auth.with(greeting)}</p>
            <button class="navbar__item" type="button" title="Cerrar sesión" on:click=on_logout>
                "Salir"
            </button>
        </nav>
    }
}
