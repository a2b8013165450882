use super::*;
use crate::net::api::ApiError;

#[test]
fn success_title_uses_server_text() {
    let response = CreateResponse { success: Some("Teléfono registrado".to_owned()) };
    assert_eq!(success_title(&response), "Teléfono registrado");
}

#[test]
fn success_title_falls_back_when_missing_or_blank() {
    assert_eq!(success_title(&CreateResponse::default()), "Éxito");
    assert_eq!(success_title(&CreateResponse { success: Some(" ".to_owned()) }), "Éxito");
}

#[test]
fn create_failure_message_prefers_server_error() {
    let err = ApiError::Status { status: 400, message: Some("IP duplicada".to_owned()) };
    assert_eq!(err.user_message(CREATE_FAILED), "IP duplicada");
    let err = ApiError::Transport("timeout".to_owned());
    assert_eq!(err.user_message(CREATE_FAILED), "Hubo un error al crear el teléfono");
}
