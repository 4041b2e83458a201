//! Same-origin pass-through to the media backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to `/api/...` on this host; every method and path under
//! it is forwarded verbatim to `DATAHEX_BACKEND_URL`. Headers (including
//! `Authorization`) and bodies (JSON or multipart) pass through untouched;
//! the host never inspects or validates tokens.
//!
//! TRADE-OFFS
//! ==========
//! Bodies are buffered in both directions rather than streamed. Uploads are
//! capped at `MAX_BODY_BYTES`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, HeaderName, header};
use axum::response::{IntoResponse, Response};

use crate::error::HostError;
use crate::state::AppState;

/// Largest request body forwarded upstream (media uploads included).
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Headers that describe a single hop and must not be forwarded.
const HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    header::HOST,
    header::CONTENT_LENGTH,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Backend URL for a forwarded `path` and optional raw query string.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", backend_url.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

pub fn forwardable(name: &HeaderName) -> bool {
    !HOP_BY_HOP.contains(name) && name.as_str() != "keep-alive"
}

fn filtered(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| forwardable(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}`.
///
/// # Errors
///
/// `HostError::RequestBody` when the upload exceeds the cap, and
/// `HostError::Upstream` when the backend cannot be reached or read.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> Result<Response, HostError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(&state.config.backend_url, &path, parts.uri.query());
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| HostError::RequestBody(e.to_string()))?;

    tracing::debug!(method = %parts.method, %url, bytes = body.len(), "forwarding");
    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(filtered(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = filtered(upstream.headers());
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(method = %parts.method, %url, status = status.as_u16(), "backend error");
    }

    let mut response = (status, Body::from(bytes)).into_response();
    response.headers_mut().extend(headers);
    Ok(response)
}
