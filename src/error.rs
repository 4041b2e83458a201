//! Host error type.
//!
//! ERROR HANDLING
//! ==============
//! Startup errors (`Config`, `Leptos`, `Io`, `HttpClient`) abort `main`. Per-request
//! errors turn into a JSON `{ "message": ... }` body, the same shape the
//! backend uses, so the client's message extraction treats a failed hop like
//! any other backend error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable held an unusable value.
    #[error("invalid {var}: {reason}")]
    Config { var: &'static str, reason: String },

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not be bound or failed while serving.
    #[error("listener I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The shared HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClient(String),

    /// The incoming request body could not be read (too large or aborted).
    #[error("request body rejected: {0}")]
    RequestBody(String),

    /// The backend could not be reached or its response could not be read.
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl HostError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RequestBody(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Config { .. } | Self::Leptos(_) | Self::Io(_) | Self::HttpClient(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text exposed to the browser. Upstream details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::RequestBody(_) => "Request body too large",
            Self::Upstream(e) if e.is_timeout() => "Backend timed out",
            Self::Upstream(_) => "Backend unavailable",
            _ => "Internal server error",
        }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "request failed at host");
        (status, Json(serde_json::json!({ "message": self.public_message() }))).into_response()
    }
}
