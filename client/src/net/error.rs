//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages only need three decisions from a failure: stop polling (401), show
//! the backend's `detail` text, or fall back to a page-specific message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (or the credentials on login).
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },
    /// Any other non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build an error from a non-2xx status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = parse_detail(body);
        if status == 401 {
            Self::Unauthorized { detail }
        } else {
            Self::Status { status, detail }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Backend-provided `detail` text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for an error banner: the backend detail when present, otherwise
    /// the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }
}

/// Extract `detail` from a FastAPI-style error body.
///
/// `detail` is usually a string; validation failures send a list of objects,
/// in which case the `msg` fields are joined.
pub(crate) fn parse_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        serde_json::Value::Null | serde_json::Value::String(_) => None,
        other => Some(other.to_string()),
    }
}
