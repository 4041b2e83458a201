//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read the host environment at runtime, so the API
//! base URL is captured when the crate is compiled. The default points at the
//! host's same-origin `/api` pass-through.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Settings shared by every network call the client makes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build config from `DATAHEX_API_URL` as seen by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("DATAHEX_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/');
        Self { api_base_url: base.to_owned() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}
