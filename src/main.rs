//! DataHex host: serves the server-rendered Leptos app and forwards `/api`
//! to the media backend.

#![recursion_limit = "256"]
mod config;
mod error;
mod proxy;
mod routes;
mod state;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "datahex host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let config = HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(backend = %config.backend_url, timeout_secs = config.proxy_timeout.as_secs(), "proxy configured");

    let state = state::AppState::new(config)?;
    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "datahex listening");
    axum::serve(listener, app).await?;
    Ok(())
}
