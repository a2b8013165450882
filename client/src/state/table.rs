//! Record table view-model: sort, search, and equality filter.
//!
//! DESIGN
//! ======
//! The visible rows are a pure function of the fetched records and
//! [`ViewParams`]. Column access goes through [`Telefono::field`], an explicit
//! per-column accessor, so every sortable or filterable column is known at
//! compile time.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;
use std::fmt;

use crate::net::types::Telefono;

/// Scalar columns of a [`Telefono`], in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Column {
    #[default]
    Id,
    Unidad,
    Ip,
    Rack,
    Boca,
    Anterior,
    Estado,
    Piso,
    Area,
    Usuario,
    CreatedAt,
}

impl Column {
    pub const ALL: [Column; 11] = [
        Column::Id,
        Column::Unidad,
        Column::Ip,
        Column::Rack,
        Column::Boca,
        Column::Anterior,
        Column::Estado,
        Column::Piso,
        Column::Area,
        Column::Usuario,
        Column::CreatedAt,
    ];

    /// JSON field name on the wire.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Unidad => "unidad",
            Self::Ip => "ip",
            Self::Rack => "rack",
            Self::Boca => "boca",
            Self::Anterior => "anterior",
            Self::Estado => "estado",
            Self::Piso => "piso",
            Self::Area => "area",
            Self::Usuario => "usuario",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Header label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Unidad => "Unidad",
            Self::Ip => "IP",
            Self::Rack => "Rack",
            Self::Boca => "Boca",
            Self::Anterior => "Anterior",
            Self::Estado => "Estado",
            Self::Piso => "Piso",
            Self::Area => "Área",
            Self::Usuario => "Usuario",
            Self::CreatedAt => "Fecha de Creación",
        }
    }

    /// Whether clicking a cell of this column applies an equality filter.
    #[must_use]
    pub fn is_filterable(self) -> bool {
        !matches!(self, Self::Id | Self::CreatedAt)
    }
}

/// A single cell value, comparable across records of the same column.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Telefono {
    /// Value of `column` for this record.
    #[must_use]
    pub fn field(&self, column: Column) -> FieldValue {
        match column {
            Column::Id => FieldValue::Int(self.id),
            Column::Unidad => FieldValue::Text(self.unidad.clone()),
            Column::Ip => FieldValue::Text(self.ip.clone()),
            Column::Rack => FieldValue::Text(self.rack.clone()),
            Column::Boca => FieldValue::Text(self.boca.clone()),
            Column::Anterior => FieldValue::Text(self.anterior.clone()),
            Column::Estado => FieldValue::Text(self.estado.as_str().to_owned()),
            Column::Piso => FieldValue::Int(self.piso),
            Column::Area => FieldValue::Text(self.area.clone()),
            Column::Usuario => FieldValue::Text(self.usuario.clone()),
            Column::CreatedAt => FieldValue::Text(self.created_at.clone()),
        }
    }

    fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        Column::ALL
            .into_iter()
            .any(|c| self.field(c).to_string().to_lowercase().contains(needle_lower))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Equality filter applied by clicking a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: Column,
    pub value: FieldValue,
}

/// Client-local table settings. Reset on reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub sort_column: Column,
    pub sort_direction: SortDirection,
    pub search: String,
    pub filter: Option<ColumnFilter>,
}

impl ViewParams {
    /// Header click: same column flips direction, another column sorts it ascending.
    pub fn toggle_sort(&mut self, column: Column) {
        if column == self.sort_column {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Filter on `column == value`. Ignored for non-filterable columns and
    /// empty text values.
    pub fn set_filter(&mut self, column: Column, value: FieldValue) {
        if !column.is_filterable() {
            return;
        }
        if matches!(&value, FieldValue::Text(s) if s.is_empty()) {
            return;
        }
        self.filter = Some(ColumnFilter { column, value });
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Badge text for the active filter.
    #[must_use]
    pub fn filter_label(&self) -> Option<String> {
        self.filter
            .as_ref()
            .map(|f| format!("Filtrado por {}: {}", f.column.key(), f.value))
    }

    fn compare(&self, a: &Telefono, b: &Telefono) -> Ordering {
        let ord = a.field(self.sort_column).cmp(&b.field(self.sort_column));
        match self.sort_direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }

    fn keeps(&self, record: &Telefono, needle_lower: &str) -> bool {
        let filter_ok = self
            .filter
            .as_ref()
            .map_or(true, |f| record.field(f.column) == f.value);
        filter_ok && record.matches_search(needle_lower)
    }
}

/// Visible rows for `records` under `params`. Stable: equal sort keys keep
/// their input order in either direction.
#[must_use]
pub fn apply(records: &[Telefono], params: &ViewParams) -> Vec<Telefono> {
    let needle = params.search.to_lowercase();
    let mut rows: Vec<Telefono> = records
        .iter()
        .filter(|r| params.keeps(r, &needle))
        .cloned()
        .collect();
    rows.sort_by(|a, b| params.compare(a, b));
    rows
}
