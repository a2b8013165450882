//! Two-step telefono registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `state::wizard` in signals. A successful create invalidates the
//! record cache, shows a toast, and returns to the dashboard; a failure shows
//! a destructive toast with the server message when there is one.

#[cfg(test)]
#[path = "telefono_form_test.rs"]
mod telefono_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::config::ApiConfig;
use crate::net::types::{CreateResponse, Estado, NewTelefono};
use crate::state::auth::AuthState;
use crate::state::records::RecordsState;
use crate::state::toast::ToastState;
use crate::state::wizard::{Field, Step, WizardState};

pub const CREATED_DESCRIPTION: &str = "Teléfono creado correctamente";
pub const CREATE_FAILED: &str = "Hubo un error al crear el teléfono";
const CREATED_FALLBACK_TITLE: &str = "Éxito";

/// Toast title for a successful create: the server's `success` text if any.
#[must_use]
pub fn success_title(response: &CreateResponse) -> String {
    response
        .success
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(CREATED_FALLBACK_TITLE)
        .to_owned()
}

/// Send the payload and settle the wizard, cache, and toasts.
fn spawn_create<F>(
    api: ApiConfig,
    auth: RwSignal<AuthState>,
    records: RwSignal<RecordsState>,
    toasts: RwSignal<ToastState>,
    wizard: RwSignal<WizardState>,
    navigate: F,
    payload: NewTelefono,
) where
    F: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.with_untracked(|a| a.token().map(str::to_owned));
        let result = crate::net::api::create_telefono(&api, token.as_deref(), &payload).await;
        wizard.update(WizardState::finish);
        match result {
            Ok(response) => {
                records.update(RecordsState::invalidate);
                toasts.update(|t| {
                    t.success(success_title(&response), CREATED_DESCRIPTION);
                });
                navigate(crate::util::auth::DASHBOARD_ROUTE, NavigateOptions::default());
            }
            Err(e) => {
                log::warn!("create telefono failed: {e}");
                toasts.update(|t| {
                    t.error("Error", Some(e.user_message(CREATE_FAILED)));
                });
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, auth, records, toasts, navigate, payload);
        wizard.update(WizardState::finish);
    }
}

#[component]
pub fn TelefonoForm() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let records = expect_context::<RwSignal<RecordsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let wizard = RwSignal::new(WizardState::default());
    // Memoized so typing does not rebuild the active step.
    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let submitting = move || wizard.with(|w| w.submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        wizard.update(|w| payload = w.submit());
        if let Some(payload) = payload {
            spawn_create(api.clone(), auth, records, toasts, wizard, navigate.clone(), payload);
        }
    };

    view! {
        <div class="card telefono-form">
            <h2 class="card__title">"Formulario de Registro de Teléfono"</h2>
            <form on:submit=on_submit>
                {move || match step.get() {
                    Step::One => view! {
                        <div class="card__content telefono-form__step telefono-form__step--one">
                            {Field::STEP_ONE
                                .into_iter()
                                .map(|field| view! { <FieldInput field=field wizard=wizard/> })
                                .collect_view()}
                            <div class="card__footer">
                                <button
                                    class="btn btn--primary btn--wide"
                                    type="button"
                                    on:click=move |_| wizard.update(WizardState::next)
                                >
                                    "Siguiente"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                    Step::Two => view! {
                        <div class="card__content telefono-form__step telefono-form__step--two">
                            <FieldInput field=Field::Anterior wizard=wizard/>
                            <EstadoSelect wizard=wizard/>
                            {[Field::Piso, Field::Area, Field::Lugar, Field::Ter, Field::Ue]
                                .into_iter()
                                .map(|field| view! { <FieldInput field=field wizard=wizard/> })
                                .collect_view()}
                            <div class="card__footer card__footer--split">
                                <button
                                    class="btn btn--outline"
                                    type="button"
                                    on:click=move |_| wizard.update(WizardState::back)
                                >
                                    "Anterior"
                                </button>
                                <button class="btn btn--primary" type="submit" disabled=submitting>
                                    {move || if submitting() { "Enviando..." } else { "Enviar" }}
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </form>
        </div>
    }
}

/// Field-local error line.
#[component]
fn FieldError(field: Field, wizard: RwSignal<WizardState>) -> impl IntoView {
    move || {
        wizard
            .with(|w| w.error(field))
            .map(|message| view! { <p class="form-field__error">{message}</p> })
    }
}

#[component]
fn FieldInput(field: Field, wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=field.id()>{field.label()}</label>
            <input
                id=field.id()
                class="form-field__input"
                type=if field.is_numeric() { "number" } else { "text" }
                prop:value=move || wizard.with(|w| w.draft.get(field).to_owned())
                on:input=move |ev| wizard.update(|w| w.set(field, event_target_value(&ev)))
            />
            <FieldError field=field wizard=wizard/>
        </div>
    }
}

#[component]
fn EstadoSelect(wizard: RwSignal<WizardState>) -> impl IntoView {
    let field = Field::Estado;
    view! {
        <div class="form-field">
            <label for=field.id()>{field.label()}</label>
            <select
                id=field.id()
                class="form-field__input"
                prop:value=move || wizard.with(|w| w.draft.get(field).to_owned())
                on:change=move |ev| {
                    let estado = Estado::from_wire(&event_target_value(&ev));
                    wizard.update(|w| w.set_estado(estado));
                }
            >
                <option value="" disabled=true>"Seleccione un estado"</option>
                {Estado::ALL
                    .into_iter()
                    .map(|estado| view! { <option value=estado.as_str()>{estado.label()}</option> })
                    .collect_view()}
            </select>
            <FieldError field=field wizard=wizard/>
        </div>
    }
}
