//! Host configuration parsed from environment variables.

use std::time::Duration;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend base URL, no trailing slash. `/api/<path>` maps to `<backend_url>/<path>`.
    pub backend_url: String,
    pub proxy_timeout: Duration,
    pub proxy_connect_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATAHEX_BACKEND_URL`: default `http://localhost:5000`
    /// - `DATAHEX_PROXY_TIMEOUT_SECS`: default 30
    /// - `DATAHEX_PROXY_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns `HostError::Config` for an unparsable port or timeout, or a
    /// backend URL that is not `http(s)://`.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let backend_url = lookup("DATAHEX_BACKEND_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(HostError::Config {
                var: "DATAHEX_BACKEND_URL",
                reason: format!("expected an http(s) URL, got '{backend_url}'"),
            });
        }

        let timeout = parse_or("DATAHEX_PROXY_TIMEOUT_SECS", lookup("DATAHEX_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        let connect = parse_or(
            "DATAHEX_PROXY_CONNECT_TIMEOUT_SECS",
            lookup("DATAHEX_PROXY_CONNECT_TIMEOUT_SECS"),
            DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            port,
            backend_url,
            proxy_timeout: Duration::from_secs(timeout),
            proxy_connect_timeout: Duration::from_secs(connect),
        })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, HostError>
where
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|e| HostError::Config { var, reason: format!("'{value}': {e}") }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
