//! Toast notifications pinned to the bottom-right corner.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, ToastVariant};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.items.clone())
                key=|toast| toast.id
                let:toast
            >
                <ToastItem toast=toast toasts=toasts/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let duration = std::time::Duration::from_millis(u64::from(toast.duration_ms));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            toasts.update(|t| {
                t.dismiss(id);
            });
        });
    }

    let class = match toast.variant {
        ToastVariant::Info => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    };

    view! {
        <div class=class>
            <div class="toast__body">
                <p class="toast__title">{toast.title}</p>
                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
            </div>
            <button
                class="toast__close"
                type="button"
                title="Cerrar"
                on:click=move |_| {
                    toasts.update(|t| {
                        t.dismiss(id);
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}
