//! Host configuration parsed from environment variables.
//!
//! Recognized variables:
//! - `PORT`: listen port, default 3000
//! - `API_BASE_URL`: remote inventory API, default `/api`
//!
//! Leptos site settings (`LEPTOS_*`) are read separately by
//! `leptos::config::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::config::ApiConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Startup failures of the host binary.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, HostError> {
        let port = std::env::var("PORT").ok();
        let api_base = std::env::var("API_BASE_URL").ok();
        Self::from_vars(port.as_deref(), api_base.as_deref())
    }

    /// Build typed config from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `port` is present but unparseable.
    pub fn from_vars(port: Option<&str>, api_base: Option<&str>) -> Result<Self, HostError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| HostError::InvalidPort(raw.to_owned()))?,
        };
        let api = api_base.map_or_else(ApiConfig::default, ApiConfig::new);
        Ok(Self { port, api })
    }
}
