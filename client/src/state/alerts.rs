//! Price-alert list and form handling.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::net::error::ApiError;
use crate::net::types::{Alert, AlertDirection, AlertDraft};

pub const LOAD_FAILED: &str = "Could not load alerts";
pub const DELETE_FAILED: &str = "Unable to delete alert";
pub const CREATE_FAILED: &str = "Unable to create alert";
pub const EMPTY_LIST: &str = "No alerts configured.";
pub const SESSION_EXPIRED: &str = "Session expired. Sign in again to manage alerts.";

/// Banner for a create or delete attempted after the page gate tripped.
pub fn blocked_action(gate_open: bool) -> Option<&'static str> {
    (!gate_open).then_some(SESSION_EXPIRED)
}

/// Banner for a failed create or delete; a 401 reads as an expired session.
pub fn action_error(err: &ApiError, fallback: &'static str) -> &'static str {
    if err.is_unauthorized() { SESSION_EXPIRED } else { fallback }
}

/// Raw "New Alert" modal input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertForm {
    pub symbol: String,
    pub threshold: String,
    pub direction: AlertDirection,
}

impl AlertForm {
    /// Request body, or `None` when symbol or threshold is missing or the
    /// threshold is not a number.
    pub fn to_draft(&self) -> Option<AlertDraft> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return None;
        }
        let threshold = self.threshold.trim().parse::<f64>().ok().filter(|t| t.is_finite())?;
        Some(AlertDraft { symbol: symbol.to_uppercase(), threshold, direction: self.direction })
    }
}

/// "RELIANCE above 2900".
pub fn alert_label(alert: &Alert) -> String {
    format!("{} {} {}", alert.symbol, alert.direction, alert.threshold)
}

pub fn remove_alert(alerts: &mut Vec<Alert>, id: i64) {
    alerts.retain(|a| a.id != id);
}
