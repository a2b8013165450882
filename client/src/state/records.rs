//! Cached record collection and its load state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard fetch resource tracks `generation`; bumping it through
//! [`RecordsState::invalidate`] after a successful create forces a refetch.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::Telefono;
use crate::state::table::{self, ViewParams};

/// Load state of the record collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RecordsLoad {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<Telefono>),
}

/// Process-wide record cache, provided via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordsState {
    pub load: RecordsLoad,
    pub generation: u64,
}

impl RecordsState {
    /// Drop the cached collection so the next render refetches it.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.load = RecordsLoad::Loading;
    }

    /// Store a fetch result, ignoring results from an older generation.
    pub fn resolve(&mut self, generation: u64, result: Result<Vec<Telefono>, String>) {
        if generation != self.generation {
            return;
        }
        self.load = match result {
            Ok(records) => RecordsLoad::Loaded(records),
            Err(message) => RecordsLoad::Failed(message),
        };
    }
}

/// What the table renders. The three non-row states never overlap.
#[derive(Clone, Debug, PartialEq)]
pub enum TableView {
    Loading,
    Failed(String),
    NoMatches,
    Rows(Vec<Telefono>),
}

/// Resolve the table's presentational state for `load` under `params`.
#[must_use]
pub fn table_view(load: &RecordsLoad, params: &ViewParams) -> TableView {
    match load {
        RecordsLoad::Loading => TableView::Loading,
        RecordsLoad::Failed(message) => TableView::Failed(message.clone()),
        RecordsLoad::Loaded(records) => {
            let rows = table::apply(records, params);
            if rows.is_empty() { TableView::NoMatches } else { TableView::Rows(rows) }
        }
    }
}
