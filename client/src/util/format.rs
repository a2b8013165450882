//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Long Spanish date, e.g. `2 de mayo de 2024, 13:45`, in the timestamp's
/// own offset. Unparseable input is returned unchanged.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    let Some(dt) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let mes = MESES[dt.month0() as usize];
    format!(
        "{} de {} de {}, {:02}:{:02}",
        dt.day(),
        mes,
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}
