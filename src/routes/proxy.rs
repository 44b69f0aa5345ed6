//! `/api/*` reverse proxy to the TradeVision backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Every `/api/{path}` request is
//! replayed against `API_UPSTREAM/{path}` with its method, query string, body,
//! and end-to-end headers (including `Authorization`). The upstream status,
//! headers, and body are relayed back unchanged, so backend error payloads
//! reach the client as-is.
//!
//! TRADE-OFFS
//! ==========
//! Bodies are buffered rather than streamed. Every backend payload is a small
//! JSON document, and buffering keeps the request/response mapping simple.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Mount point of the proxy on this host.
pub const API_PREFIX: &str = "/api";

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Connection-scoped headers that must not cross the proxy.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Shared HTTP client and backend base URL.
#[derive(Clone)]
pub struct Upstream {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl Upstream {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;
        Ok(Self { http, base_url: Arc::from(base_url.trim_end_matches('/')) })
    }

    /// Upstream URL for a proxied `path` and optional raw query.
    pub fn target_url(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    async fn send(&self, req: Request) -> Result<Response, AppError> {
        let (parts, body) = req.into_parts();
        let url = self.target_url(upstream_path(parts.uri.path()), parts.uri.query());
        let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::Upstream(format!("request body: {e}")))?;

        let upstream = self
            .http
            .request(parts.method.clone(), &url)
            .headers(forwarded_headers(&parts.headers))
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let status = upstream.status();
        let headers = forwarded_headers(upstream.headers());
        let bytes = upstream.bytes().await.map_err(|e| AppError::Upstream(e.to_string()))?;
        tracing::debug!(method = %parts.method, %url, %status, "proxied");

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Backend path for a raw request path, still percent-encoded.
///
/// The raw form is used so encoded `?`, `#` and `/` inside a segment stay
/// inside that segment upstream.
pub fn upstream_path(raw: &str) -> &str {
    raw.strip_prefix(API_PREFIX).unwrap_or(raw)
}

/// Whether `name` is copied across the proxy in either direction.
///
/// `Host` and `Content-Length` are recomputed by the outgoing side.
pub fn is_forwarded_header(name: &HeaderName) -> bool {
    *name != HOST && *name != CONTENT_LENGTH && !HOP_BY_HOP.contains(&name.as_str())
}

pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| is_forwarded_header(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}`: replay the request against the backend.
pub async fn forward(State(upstream): State<Upstream>, req: Request) -> Response {
    let path = req.uri().path().to_owned();
    match upstream.send(req).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, %path, "api proxy failed");
            e.into_response()
        }
    }
}
