//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages never inspect HTTP details directly. They match on `ApiError`:
//! `Unauthorized` on an authenticated call triggers the forced-logout flow,
//! everything else becomes banner text via `message_or`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A failed call to the media backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 401: the bearer token was rejected, or (on login) the
    /// credentials were.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// Non-success status with a message extracted from the body, if any.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Classify a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = message_from_body(body);
        if status == 401 {
            return Self::Unauthorized { message };
        }
        Self::Status { status, message }
    }

    /// User-facing text: the backend's message when it sent one, else `fallback`.
    /// Transport detail never reaches the page; callers log it.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } | Self::Unauthorized { message: Some(message) } => {
                message.clone()
            }
            _ => fallback.to_owned(),
        }
    }
}

/// Pull `message`, then `error`, out of a JSON error body.
pub fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_owned)
}
