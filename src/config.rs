//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `BIND_ADDR`: listen address, default `0.0.0.0`
//! - `API_UPSTREAM`: backend base URL for `/api/*`, default `http://127.0.0.1:8000`
//! - `PROXY_TIMEOUT_SECS`: upstream request timeout, default 30

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub bind_addr: IpAddr,
    /// Backend base URL without a trailing slash.
    pub api_upstream: String,
    pub proxy_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let parse = |key: &str, default| lookup(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default);

        let api_upstream = lookup("API_UPSTREAM")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_owned());
        let api_upstream = normalize_upstream(&api_upstream)?;

        let bind_addr = lookup("BIND_ADDR")
            .and_then(|v| v.trim().parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_BIND_ADDR);

        Ok(Self {
            port: parse("PORT", u64::from(DEFAULT_PORT)).try_into().unwrap_or(DEFAULT_PORT),
            bind_addr,
            api_upstream,
            proxy_timeout: Duration::from_secs(parse("PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Require an absolute http(s) URL and drop any trailing slash.
fn normalize_upstream(raw: &str) -> Result<String, AppError> {
    let url = reqwest::Url::parse(raw).map_err(|e| AppError::Config(format!("API_UPSTREAM '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!("API_UPSTREAM '{raw}': unsupported scheme")));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
