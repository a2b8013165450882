#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn default_base_is_relative_api() {
    assert_eq!(ApiConfig::default().base_url(), "/api");
}

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    assert_eq!(ApiConfig::new(" http://10.1.1.5:4000/api// ").base_url(), "http://10.1.1.5:4000/api");
}

#[test]
fn new_empty_falls_back_to_default() {
    assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(ApiConfig::new("/").base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ApiConfig::new("https://inventario.local/api/");
    assert_eq!(config.endpoint("/telefonos"), "https://inventario.local/api/telefonos");
    assert_eq!(config.endpoint("create"), "https://inventario.local/api/create");
}

#[test]
fn from_document_outside_browser_is_default() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}
