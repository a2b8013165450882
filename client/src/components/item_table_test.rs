use super::*;
use crate::net::types::Estado;

fn record() -> Telefono {
    Telefono {
        id: 5,
        unidad: "Tesorería".to_owned(),
        ip: "10.9.8.7".to_owned(),
        rack: "R4".to_owned(),
        boca: "17".to_owned(),
        anterior: "Caja".to_owned(),
        estado: Estado::Inactivo,
        piso: 4,
        area: "Finanzas".to_owned(),
        usuario: "rperez".to_owned(),
        created_at: "2024-03-15T09:30:00Z".to_owned(),
        internos: None,
    }
}

#[test]
fn sort_indicator_only_on_active_column() {
    let mut params = ViewParams::default();
    assert_eq!(sort_indicator(&params, Column::Id), "▲");
    assert_eq!(sort_indicator(&params, Column::Area), "");
    params.toggle_sort(Column::Id);
    assert_eq!(sort_indicator(&params, Column::Id), "▼");
}

#[test]
fn cell_text_formats_created_at() {
    assert_eq!(cell_text(&record(), Column::CreatedAt), "15 de marzo de 2024, 09:30");
}

#[test]
fn cell_text_renders_scalars() {
    let r = record();
    assert_eq!(cell_text(&r, Column::Id), "5");
    assert_eq!(cell_text(&r, Column::Piso), "4");
    assert_eq!(cell_text(&r, Column::Estado), "INACTIVO");
    assert_eq!(cell_text(&r, Column::Usuario), "rperez");
}
