//! Registration page hosting the two-step telefono form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::telefono_form::TelefonoForm;
use crate::state::auth::AuthState;
use crate::util::auth::{DASHBOARD_ROUTE, install_unauth_redirect};

#[component]
pub fn RegistroPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="registro-page">
            <a href=DASHBOARD_ROUTE class="btn registro-page__back">
                "Volver"
            </a>
            <article class="registro-page__body">
                <TelefonoForm/>
            </article>
        </div>
    }
}
