//! Display-only inspection of the session token's payload.
//!
//! TRADE-OFFS
//! ==========
//! The payload is decoded without verifying the signature. The result is only
//! used to greet the user and to decide whether to *show* edit/delete
//! affordances; the backend enforces ownership on every write.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::net::types::MediaPost;

const FALLBACK_DISPLAY_NAME: &str = "User";

/// Claims the UI cares about. Unknown claims are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default, deserialize_with = "string_or_number")]
    pub sub: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl TokenClaims {
    /// `username`, then `name`, then a generic label.
    pub fn display_name(&self) -> &str {
        [self.username.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }

    /// Whether the token's subject matches the post's owner.
    pub fn owns(&self, post: &MediaPost) -> bool {
        match (self.sub.as_deref(), post.owner_id()) {
            (Some(sub), Some(owner)) => !sub.is_empty() && sub == owner,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not JSON claims: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the payload of a JWT-shaped token. Failures are logged and yield `None`.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    match try_decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            leptos::logging::warn!("could not decode session token: {e}");
            None
        }
    }
}

/// Strict variant of [`decode_claims`].
///
/// # Errors
///
/// Returns an error if the token has fewer than two segments or the payload
/// is not base64-encoded JSON.
pub fn try_decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(ClaimsError::MissingPayload)?;
    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
