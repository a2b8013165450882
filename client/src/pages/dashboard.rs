//! Dashboard page: signed-in user, link to registration, and the record table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It redirects to `/login` without
//! a session; the table component owns fetching.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::item_table::ItemTable;
use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;
use crate::util::auth::{REGISTRO_ROUTE, install_unauth_redirect};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let username = move || auth.with(|a| a.username().unwrap_or_default().to_owned());

    view! {
        <div class="dashboard-page">
            <Navbar/>
            <header class="dashboard-page__header">
                <p class="dashboard-page__user">"Usuario logeado: " {username}</p>
                <a href=REGISTRO_ROUTE class="btn dashboard-page__registro">
                    "Registro"
                </a>
            </header>
            <ItemTable/>
        </div>
    }
}
