use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn status_error_keeps_server_error_text() {
    let err = status_error(409, r#"{"error":"La IP ya existe"}"#);
    assert_eq!(err, ApiError::Status { status: 409, message: Some("La IP ya existe".to_owned()) });
}

#[test]
fn status_error_without_json_body_has_no_message() {
    assert_eq!(status_error(502, "Bad Gateway"), ApiError::Status { status: 502, message: None });
    assert_eq!(status_error(500, ""), ApiError::Status { status: 500, message: None });
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status { status: 400, message: Some("Rack inválido".to_owned()) };
    assert_eq!(err.user_message("genérico"), "Rack inválido");
}

#[test]
fn user_message_falls_back_for_blank_or_transport_errors() {
    let blank = ApiError::Status { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(blank.user_message("genérico"), "genérico");
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("genérico"), "genérico");
}

#[test]
fn endpoints_are_joined_onto_base() {
    let config = ApiConfig::new("http://api.local");
    assert_eq!(config.endpoint(TELEFONOS_PATH), "http://api.local/telefonos");
    assert_eq!(config.endpoint(CREATE_PATH), "http://api.local/create");
    assert_eq!(config.endpoint(LOGIN_PATH), "http://api.local/auth/login");
    assert_eq!(config.endpoint(PROFILE_PATH), "http://api.local/auth/me");
}

#[test]
fn require_token_rejects_missing_or_blank() {
    assert_eq!(require_token(None), Err(ApiError::Unauthenticated));
    assert_eq!(require_token(Some("  ")), Err(ApiError::Unauthenticated));
    assert_eq!(require_token(Some("tok")), Ok("tok"));
}

#[test]
fn create_response_reads_success_text() {
    let response = create_response_from_body(r#"{"success":"Teléfono guardado"}"#);
    assert_eq!(response.success.as_deref(), Some("Teléfono guardado"));
}

#[test]
fn empty_or_plain_create_body_is_still_success() {
    assert_eq!(create_response_from_body(""), CreateResponse::default());
    assert_eq!(create_response_from_body("Created"), CreateResponse::default());
}
