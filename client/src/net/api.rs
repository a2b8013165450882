//! REST API helpers for the remote inventory service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers decide how to surface
//! the failure: reads become the table's error state, writes become a
//! destructive toast using [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{CreateResponse, Credentials, LoginResponse, NewTelefono, Profile, Telefono};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

pub const TELEFONOS_PATH: &str = "/telefonos";
pub const CREATE_PATH: &str = "/create";
pub const LOGIN_PATH: &str = "/auth/login";
pub const PROFILE_PATH: &str = "/auth/me";

/// Failure of a remote API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not authenticated")]
    Unauthenticated,
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-supplied message when there is one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Token for a call that needs a session; blank counts as missing.
fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    token.filter(|t| !t.trim().is_empty()).ok_or(ApiError::Unauthenticated)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-success response to [`ApiError::Status`], keeping the `error`
/// field of a JSON body when present.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.error);
    ApiError::Status { status, message }
}

/// Success body of a create. The record exists once the status is 2xx, so an
/// empty or non-JSON body still counts as success.
#[cfg(any(test, feature = "hydrate"))]
fn create_response_from_body(body: &str) -> CreateResponse {
    serde_json::from_str(body).unwrap_or_default()
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the whole record collection from `GET /telefonos`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status, or an
/// undecodable body.
pub async fn fetch_telefonos(config: &ApiConfig, token: Option<&str>) -> Result<Vec<Telefono>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(&config.endpoint(TELEFONOS_PATH));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Create a record via `POST /create`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthenticated`] without a session token, otherwise
/// an error on transport failure or non-success status; the server's `error`
/// text is carried in [`ApiError::Status`]. A 2xx body that is not JSON is
/// not an error.
pub async fn create_telefono(
    config: &ApiConfig,
    token: Option<&str>,
    payload: &NewTelefono,
) -> Result<CreateResponse, ApiError> {
    let token = require_token(token)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(CREATE_PATH))
            .header("Authorization", &bearer(token))
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(status_error(status, &body));
        }
        Ok(create_response_from_body(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, payload);
        Err(ApiError::Unavailable)
    }
}

/// Submit credentials to `POST /auth/login`.
///
/// # Errors
///
/// Returns an error on transport failure or non-success status. A success
/// response without a token is returned as-is; callers treat it as rejection.
pub async fn login(config: &ApiConfig, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(LOGIN_PATH))
            .json(credentials)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Look up the signed-in user via `GET /auth/me`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthenticated`] for a blank token, otherwise an
/// error on transport failure, non-success status, or an undecodable body.
pub async fn fetch_profile(config: &ApiConfig, token: &str) -> Result<Profile, ApiError> {
    let token = require_token(Some(token))?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint(PROFILE_PATH))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}
