//! Wire DTOs for the TradeVision REST API.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: prediction fields come and go between
//! engine versions, prices arrive as numbers or preformatted strings, and some
//! create endpoints wrap their payload. These types accept every observed
//! variant so page code never has to inspect raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Signed-in user as persisted under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
}

/// A single portfolio position as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub symbol: String,
    pub quantity: f64,
    pub buy_price: f64,
}

/// Portfolio risk metrics, each on a 0..1 scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    #[serde(default)]
    pub diversification_score: f64,
    #[serde(default)]
    pub volatility_risk: f64,
    #[serde(default)]
    pub allocation_imbalance: f64,
}

/// A price that may be sent as a JSON number or a preformatted string
/// such as `"2,847.50"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    /// Whether the value would be treated as missing (`0`, `""`).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0.0,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Explanation text, either a list of sentences or a single paragraph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Explanation {
    Lines(Vec<String>),
    Text(String),
}

/// One weighted component of the hybrid decision score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub score: f64,
    #[serde(default)]
    pub weight: f64,
}

/// Body of `POST /predictions/predict`.
///
/// Both the current engine fields (`score`, `technical_score`, ...) and the
/// legacy display fields (`confidence`, `technical`, ...) are accepted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionResponse {
    pub symbol: Option<String>,
    pub decision: Option<String>,
    pub score: Option<f64>,
    pub confidence: Option<f64>,
    pub final_score: Option<f64>,
    pub technical_score: Option<f64>,
    pub lstm_probability: Option<f64>,
    pub sentiment_score: Option<f64>,
    pub risk_score: Option<f64>,
    pub trend: Option<f64>,
    pub technical: Option<f64>,
    pub sentiment: Option<f64>,
    pub risk: Option<f64>,
    pub latest_price: Option<PriceField>,
    pub price: Option<PriceField>,
    pub target_price: Option<PriceField>,
    pub target: Option<PriceField>,
    pub stop_loss: Option<PriceField>,
    pub stop: Option<PriceField>,
    pub explanation: Option<Explanation>,
    pub components: Option<BTreeMap<String, ComponentScore>>,
}

/// Body of `GET /predictions/history/{symbol}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionHistory {
    pub symbol: String,
    #[serde(default)]
    pub predictions: Vec<serde_json::Value>,
}

/// A news article from `/news/market` or `/news/stock/{symbol}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsArticle {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source: Option<String>,
    pub published_at: Option<String>,
}

/// Body of `POST /news/sentiment`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SentimentResponse {
    #[serde(default)]
    pub sentiments: Vec<serde_json::Value>,
}

/// Body of `POST /advisor/chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AdvisorReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// Trigger side of a price alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    #[default]
    Above,
    Below,
}

impl AlertDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }

    /// Parse a `<select>` value; anything unrecognised is `Above`.
    pub fn from_form_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("below") { Self::Below } else { Self::Above }
    }
}

impl fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored price alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub symbol: String,
    pub threshold: f64,
    pub direction: AlertDirection,
}

/// Payload for creating or updating an alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertDraft {
    pub symbol: String,
    pub threshold: f64,
    pub direction: AlertDirection,
}

/// `POST /alerts/` answers with either the alert or `{status, alert}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AlertEnvelope {
    Wrapped { alert: Alert },
    Bare(Alert),
}

impl AlertEnvelope {
    pub fn into_alert(self) -> Alert {
        match self {
            Self::Wrapped { alert } | Self::Bare(alert) => alert,
        }
    }
}

/// Body of `GET /education/content`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EducationContent {
    #[serde(default)]
    pub modules: Vec<EducationModule>,
}

/// One learning module; older content uses `topic` instead of `title`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EducationModule {
    pub title: Option<String>,
    pub topic: Option<String>,
}

impl EducationModule {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.topic.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or("Untitled module")
    }
}
