use super::*;

#[test]
fn validate_credentials_trims_username_only() {
    assert_eq!(
        validate_credentials("  admin ", " secreto "),
        Ok(Credentials { username: "admin".to_owned(), password: " secreto ".to_owned() })
    );
}

#[test]
fn validate_credentials_requires_username() {
    assert_eq!(validate_credentials("   ", "x"), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(validate_credentials("admin", ""), Err("Ingresa usuario y contraseña"));
}

#[test]
fn login_outcome_with_token_signs_in() {
    let response = LoginResponse { token: Some("abc".to_owned()) };
    assert_eq!(login_outcome(Ok(response)), Ok("abc".to_owned()));
}

#[test]
fn login_outcome_without_token_stays_with_invalid_credentials() {
    assert_eq!(login_outcome(Ok(LoginResponse { token: None })), Err("Credenciales incorrectas"));
    assert_eq!(login_outcome(Ok(LoginResponse { token: Some(" ".to_owned()) })), Err(INVALID_CREDENTIALS));
}

#[test]
fn login_outcome_on_request_failure_is_invalid_credentials() {
    let rejected = ApiError::Status { status: 401, message: Some("Unauthorized".to_owned()) };
    assert_eq!(login_outcome(Err(rejected)), Err(INVALID_CREDENTIALS));
    assert_eq!(login_outcome(Err(ApiError::Transport("offline".to_owned()))), Err(INVALID_CREDENTIALS));
}
