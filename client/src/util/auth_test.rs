use super::*;

#[test]
fn should_redirect_unauth_when_signed_out() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_while_login_pending() {
    let state = AuthState { session: None, pending: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_with_session() {
    let mut state = AuthState::default();
    state.sign_in("tok".to_owned());
    assert!(!should_redirect_unauth(&state));
}
