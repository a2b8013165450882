mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "telefonos host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, api_base = config.api.base_url(), "telefonos listening");
    axum::serve(listener, app).await?;
    Ok(())
}
