//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-request state: just the resolved config and one pooled
//! `reqwest::Client` for talking to the backend.

use std::sync::Arc;

use crate::config::HostConfig;
use crate::error::HostError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<HostConfig>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns `HostError::HttpClient` if the TLS backend cannot initialise.
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .connect_timeout(config.proxy_connect_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HostError::HttpClient(e.to_string()))?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
