use super::*;
use crate::net::types::Estado;

fn telefono(id: i64) -> Telefono {
    Telefono {
        id,
        unidad: "Compras".to_owned(),
        ip: format!("192.168.1.{id}"),
        rack: "A".to_owned(),
        boca: "1".to_owned(),
        anterior: String::new(),
        estado: Estado::Activo,
        piso: 1,
        area: "Planta".to_owned(),
        usuario: "op".to_owned(),
        created_at: String::new(),
        internos: None,
    }
}

#[test]
fn default_is_loading_generation_zero() {
    let state = RecordsState::default();
    assert_eq!(state.load, RecordsLoad::Loading);
    assert_eq!(state.generation, 0);
}

#[test]
fn resolve_stores_rows_or_error() {
    let mut state = RecordsState::default();
    state.resolve(0, Ok(vec![telefono(1)]));
    assert_eq!(state.load, RecordsLoad::Loaded(vec![telefono(1)]));

    state.resolve(0, Err("network error: offline".to_owned()));
    assert_eq!(state.load, RecordsLoad::Failed("network error: offline".to_owned()));
}

#[test]
fn invalidate_bumps_generation_and_returns_to_loading() {
    let mut state = RecordsState::default();
    state.resolve(0, Ok(vec![telefono(1)]));
    state.invalidate();
    assert_eq!(state.generation, 1);
    assert_eq!(state.load, RecordsLoad::Loading);
}

#[test]
fn stale_generation_results_are_dropped() {
    let mut state = RecordsState::default();
    state.invalidate();
    state.resolve(0, Ok(vec![telefono(1)]));
    assert_eq!(state.load, RecordsLoad::Loading);
    state.resolve(1, Ok(vec![telefono(2)]));
    assert_eq!(state.load, RecordsLoad::Loaded(vec![telefono(2)]));
}

#[test]
fn table_view_distinguishes_loading_failed_and_empty() {
    let params = ViewParams::default();
    assert_eq!(table_view(&RecordsLoad::Loading, &params), TableView::Loading);
    assert_eq!(
        table_view(&RecordsLoad::Failed("boom".to_owned()), &params),
        TableView::Failed("boom".to_owned())
    );
    assert_eq!(table_view(&RecordsLoad::Loaded(Vec::new()), &params), TableView::NoMatches);
}

#[test]
fn table_view_no_matches_when_search_excludes_all() {
    let params = ViewParams { search: "inexistente".to_owned(), ..ViewParams::default() };
    let load = RecordsLoad::Loaded(vec![telefono(1), telefono(2)]);
    assert_eq!(table_view(&load, &params), TableView::NoMatches);
}

#[test]
fn table_view_rows_are_engine_output() {
    let load = RecordsLoad::Loaded(vec![telefono(2), telefono(1)]);
    match table_view(&load, &ViewParams::default()) {
        TableView::Rows(rows) => assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]),
        other => panic!("expected rows, got {other:?}"),
    }
}
