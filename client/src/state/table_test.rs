use super::*;
use crate::net::types::Estado;

fn telefono(id: i64, estado: Estado, piso: i64, usuario: &str) -> Telefono {
    Telefono {
        id,
        unidad: format!("Unidad {id}"),
        ip: format!("10.0.0.{id}"),
        rack: "R1".to_owned(),
        boca: format!("{}", id + 20),
        anterior: "Mesa".to_owned(),
        estado,
        piso,
        area: "Sistemas".to_owned(),
        usuario: usuario.to_owned(),
        created_at: format!("2024-01-{id:02}T10:00:00Z"),
        internos: None,
    }
}

fn ids(rows: &[Telefono]) -> Vec<i64> {
    rows.iter().map(|r| r.id).collect()
}

fn sample() -> Vec<Telefono> {
    vec![
        telefono(3, Estado::Activo, 2, "carla"),
        telefono(1, Estado::Inactivo, 5, "Beto"),
        telefono(2, Estado::Activo, 2, "ana"),
    ]
}

// =============================================================
// Column metadata
// =============================================================

#[test]
fn id_and_created_at_are_not_filterable() {
    assert!(!Column::Id.is_filterable());
    assert!(!Column::CreatedAt.is_filterable());
    assert!(Column::Estado.is_filterable());
    assert!(Column::Piso.is_filterable());
}

#[test]
fn field_reads_estado_as_wire_text() {
    let t = telefono(1, Estado::Inactivo, 1, "x");
    assert_eq!(t.field(Column::Estado), FieldValue::Text("INACTIVO".to_owned()));
    assert_eq!(t.field(Column::Piso), FieldValue::Int(1));
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn default_params_sort_by_id_ascending() {
    let rows = apply(&sample(), &ViewParams::default());
    assert_eq!(ids(&rows), vec![1, 2, 3]);
}

#[test]
fn integer_columns_sort_numerically() {
    let records = vec![telefono(10, Estado::Activo, 10, "a"), telefono(9, Estado::Activo, 9, "a")];
    let params = ViewParams { sort_column: Column::Piso, ..ViewParams::default() };
    assert_eq!(ids(&apply(&records, &params)), vec![9, 10]);
}

#[test]
fn toggle_same_column_flips_direction() {
    let mut params = ViewParams::default();
    params.toggle_sort(Column::Id);
    assert_eq!(params.sort_direction, SortDirection::Desc);
    assert_eq!(ids(&apply(&sample(), &params)), vec![3, 2, 1]);
}

#[test]
fn toggle_other_column_resets_to_ascending() {
    let mut params = ViewParams::default();
    params.toggle_sort(Column::Id);
    params.toggle_sort(Column::Usuario);
    assert_eq!(params.sort_column, Column::Usuario);
    assert_eq!(params.sort_direction, SortDirection::Asc);
}

#[test]
fn reversing_twice_restores_order() {
    let records = sample();
    let mut params = ViewParams { sort_column: Column::Ip, ..ViewParams::default() };
    let before = apply(&records, &params);
    params.toggle_sort(Column::Ip);
    params.toggle_sort(Column::Ip);
    assert_eq!(apply(&records, &params), before);
}

#[test]
fn equal_keys_keep_input_order_in_both_directions() {
    let records = sample();
    let mut params = ViewParams { sort_column: Column::Piso, ..ViewParams::default() };
    assert_eq!(ids(&apply(&records, &params)), vec![3, 2, 1]);
    params.toggle_sort(Column::Piso);
    assert_eq!(ids(&apply(&records, &params)), vec![1, 3, 2]);
}

#[test]
fn apply_is_idempotent_and_leaves_input_untouched() {
    let records = sample();
    let snapshot = records.clone();
    let params = ViewParams {
        sort_column: Column::Usuario,
        sort_direction: SortDirection::Desc,
        search: "a".to_owned(),
        filter: None,
    };
    let first = apply(&records, &params);
    assert_eq!(apply(&records, &params), first);
    assert_eq!(records, snapshot);
}

// =============================================================
// Search
// =============================================================

#[test]
fn empty_search_returns_everything() {
    assert_eq!(apply(&sample(), &ViewParams::default()).len(), 3);
}

#[test]
fn search_is_case_insensitive_substring() {
    let params = ViewParams { search: "BETO".to_owned(), ..ViewParams::default() };
    assert_eq!(ids(&apply(&sample(), &params)), vec![1]);
}

#[test]
fn search_matches_numeric_fields_as_text() {
    let params = ViewParams { search: "23".to_owned(), ..ViewParams::default() };
    assert_eq!(ids(&apply(&sample(), &params)), vec![3]);
}

#[test]
fn search_for_absent_term_returns_nothing() {
    let params = ViewParams { search: "zzz-no-existe".to_owned(), ..ViewParams::default() };
    assert!(apply(&sample(), &params).is_empty());
}

// =============================================================
// Equality filter
// =============================================================

#[test]
fn estado_filter_keeps_exact_matches() {
    let records = vec![telefono(1, Estado::Activo, 1, "a"), telefono(2, Estado::Inactivo, 1, "b")];
    let mut params = ViewParams::default();
    params.set_filter(Column::Estado, FieldValue::Text("ACTIVO".to_owned()));
    assert_eq!(ids(&apply(&records, &params)), vec![1]);
}

#[test]
fn filter_is_exact_not_substring() {
    let mut params = ViewParams::default();
    params.set_filter(Column::Usuario, FieldValue::Text("an".to_owned()));
    assert!(apply(&sample(), &params).is_empty());
}

#[test]
fn filter_and_search_compose_with_and() {
    let mut params = ViewParams { search: "carla".to_owned(), ..ViewParams::default() };
    params.set_filter(Column::Piso, FieldValue::Int(2));
    assert_eq!(ids(&apply(&sample(), &params)), vec![3]);

    params.search = "beto".to_owned();
    assert!(apply(&sample(), &params).is_empty());
}

#[test]
fn empty_search_with_filter_returns_filtered_set() {
    let mut params = ViewParams::default();
    params.set_filter(Column::Estado, FieldValue::Text("ACTIVO".to_owned()));
    let rows = apply(&sample(), &params);
    assert_eq!(ids(&rows), vec![2, 3]);
    assert!(rows.iter().all(|r| r.estado == Estado::Activo));
}

#[test]
fn set_filter_ignores_non_filterable_columns_and_blank_values() {
    let mut params = ViewParams::default();
    params.set_filter(Column::Id, FieldValue::Int(1));
    assert!(params.filter.is_none());
    params.set_filter(Column::Area, FieldValue::Text(String::new()));
    assert!(params.filter.is_none());
}

#[test]
fn clear_filter_removes_badge() {
    let mut params = ViewParams::default();
    params.set_filter(Column::Area, FieldValue::Text("Sistemas".to_owned()));
    assert_eq!(params.filter_label().as_deref(), Some("Filtrado por area: Sistemas"));
    params.clear_filter();
    assert_eq!(params.filter_label(), None);
}
