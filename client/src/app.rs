//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::net::config::{API_BASE_META, ApiConfig};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, registro::RegistroPage};
use crate::state::{auth::AuthState, records::RecordsState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API base URL is published as a `<meta>` tag so the hydrated app can
/// read it back with [`ApiConfig::from_document`].
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let api_base = api.base_url().to_owned();
    provide_context(api);
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, record cache, notification queue, and API config
/// contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(api);

    let auth = RwSignal::new(AuthState::default());
    let records = RwSignal::new(RecordsState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(records);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/telefonos.css"/>
        <Title text="Teléfonos"/>

        <Router>
            <main class="layout-home">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("registro") view=RegistroPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
