//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<AuthState>` by the root component. Login creates
//! the session, logout tears it down; route guards and the navigation bar only
//! read it. Nothing is persisted across reloads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{LoginResponse, Profile};

/// Notification text for any rejected login.
pub const INVALID_CREDENTIALS: &str = "Credenciales incorrectas";

/// An authenticated session: bearer token plus the profile, once fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub profile: Option<Profile>,
}

/// Authentication state tracking the session and an in-flight login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub pending: bool,
}

impl AuthState {
    /// Start a session for `token`. Any previous session is replaced.
    pub fn sign_in(&mut self, token: String) {
        self.session = Some(Session { token, profile: None });
    }

    /// Attach the profile to the current session. No-op when signed out.
    pub fn set_profile(&mut self, profile: Profile) {
        if let Some(session) = self.session.as_mut() {
            session.profile = Some(profile);
        }
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.pending = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.profile.as_ref())
            .map(|p| p.username.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Extract the session token from a login response. A missing or blank token
/// is a rejection.
///
/// # Errors
///
/// Returns [`INVALID_CREDENTIALS`] when the response carries no usable token.
pub fn token_from_login(response: &LoginResponse) -> Result<String, &'static str> {
    match response.token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_owned()),
        _ => Err(INVALID_CREDENTIALS),
    }
}
