//! Record table with header sort, free-text search, and click-to-filter cells.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `RecordsState` cache and fetches it while it is in the
//! loading state. View parameters are local to the component and reset when
//! it unmounts.

#[cfg(test)]
#[path = "item_table_test.rs"]
mod item_table_test;

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::net::types::Telefono;
use crate::state::auth::AuthState;
use crate::state::records::{RecordsLoad, RecordsState, TableView, table_view};
use crate::state::table::{Column, SortDirection, ViewParams};
use crate::util::format::format_created_at;

/// Coarse load phase; the table chrome is only rendered once data is here.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Loading,
    Failed(String),
    Ready,
}

/// Arrow shown next to the active sort column.
#[must_use]
pub fn sort_indicator(params: &ViewParams, column: Column) -> &'static str {
    if params.sort_column != column {
        return "";
    }
    match params.sort_direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    }
}

/// Text shown in a cell.
#[must_use]
pub fn cell_text(record: &Telefono, column: Column) -> String {
    match column {
        Column::CreatedAt => format_created_at(&record.created_at),
        _ => record.field(column).to_string(),
    }
}

/// Fetch the collection for `generation` and store the result.
fn spawn_fetch(api: ApiConfig, auth: RwSignal<AuthState>, records: RwSignal<RecordsState>, generation: u64) {
    #[cfg(feature = "hydrate")]
    {
        let token = auth.with_untracked(|a| a.token().map(str::to_owned));
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_telefonos(&api, token.as_deref())
                .await
                .map_err(|e| {
                    log::warn!("fetch telefonos failed: {e}");
                    e.to_string()
                });
            if records.with_untracked(|r| r.generation) == generation {
                records.update(|r| r.resolve(generation, result));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, auth, records, generation);
    }
}

#[component]
pub fn ItemTable() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let records = expect_context::<RwSignal<RecordsState>>();
    let params = RwSignal::new(ViewParams::default());

    // A previous failure is retried when the table mounts again.
    if records.with_untracked(|r| matches!(r.load, RecordsLoad::Failed(_))) {
        records.update(RecordsState::invalidate);
    }

    Effect::new(move || {
        let generation = records.with(|r| matches!(r.load, RecordsLoad::Loading).then_some(r.generation));
        let Some(generation) = generation else {
            return;
        };
        if !auth.with_untracked(AuthState::is_authenticated) {
            return;
        }
        spawn_fetch(api.clone(), auth, records, generation);
    });

    let phase = Memo::new(move |_| {
        records.with(|r| match &r.load {
            RecordsLoad::Loading => Phase::Loading,
            RecordsLoad::Failed(message) => Phase::Failed(message.clone()),
            RecordsLoad::Loaded(_) => Phase::Ready,
        })
    });
    let view_state = Memo::new(move |_| records.with(|r| params.with(|p| table_view(&r.load, p))));

    move || match phase.get() {
        Phase::Loading => view! {
            <div class="item-table__loading">
                <span class="spinner" aria-label="Cargando"></span>
            </div>
        }
        .into_any(),
        Phase::Failed(message) => view! {
            <div class="item-table__error">"Error: " {message}</div>
        }
        .into_any(),
        Phase::Ready => view! {
            <div class="item-table">
                <TableToolbar params=params/>
                <table class="item-table__table">
                    <thead>
                        <tr>
                            {Column::ALL
                                .into_iter()
                                .map(|column| {
                                    view! {
                                        <th>
                                            <button
                                                class="item-table__sort"
                                                type="button"
                                                on:click=move |_| params.update(|p| p.toggle_sort(column))
                                            >
                                                {column.label()}
                                                <span class="item-table__arrow">
                                                    {move || params.with(|p| sort_indicator(p, column))}
                                                </span>
                                            </button>
                                        </th>
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || match view_state.get() {
                            TableView::Rows(rows) => rows
                                .into_iter()
                                .map(|record| view! { <RecordRow record=record params=params/> })
                                .collect_view()
                                .into_any(),
                            TableView::NoMatches => view! { <EmptyRow/> }.into_any(),
                            TableView::Loading | TableView::Failed(_) => ().into_any(),
                        }}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
    }
}

/// Search box and active-filter badge.
#[component]
fn TableToolbar(params: RwSignal<ViewParams>) -> impl IntoView {
    let filter_label = move || params.with(ViewParams::filter_label);

    view! {
        <div class="item-table__toolbar">
            <input
                class="item-table__search"
                type="text"
                placeholder="Buscar..."
                prop:value=move || params.with(|p| p.search.clone())
                on:input=move |ev| params.update(|p| p.search = event_target_value(&ev))
            />
            {move || {
                filter_label()
                    .map(|label| {
                        view! {
                            <span class="badge item-table__filter">
                                {label}
                                <button
                                    class="badge__clear"
                                    type="button"
                                    title="Quitar filtro"
                                    on:click=move |_| params.update(ViewParams::clear_filter)
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn RecordRow(record: Telefono, params: RwSignal<ViewParams>) -> impl IntoView {
    view! {
        <tr>
            {Column::ALL
                .into_iter()
                .map(|column| {
                    let text = cell_text(&record, column);
                    if column.is_filterable() {
                        let value = record.field(column);
                        view! {
                            <td>
                                <button
                                    class="item-table__cell-link"
                                    type="button"
                                    on:click=move |_| params.update(|p| p.set_filter(column, value.clone()))
                                >
                                    {text}
                                </button>
                            </td>
                        }
                            .into_any()
                    } else {
                        view! { <td>{text}</td> }.into_any()
                    }
                })
                .collect_view()}
        </tr>
    }
}

#[component]
fn EmptyRow() -> impl IntoView {
    view! {
        <tr>
            <td colspan=Column::ALL.len().to_string() class="item-table__empty">
                <p class="item-table__empty-title">"No se encontraron resultados"</p>
                <p class="item-table__empty-hint">
                    "Intenta ajustar tus filtros o realiza una nueva búsqueda"
                </p>
            </td>
        </tr>
    }
}
