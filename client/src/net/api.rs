//! REST API helpers for the TradeVision backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request.
//! Server-side (SSR) and native tests: every call returns
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 always surfaces as `ApiError::Unauthorized` so polling pages can
//! stop; any other failure carries the backend `detail` when one was sent.
//! Paths keep their trailing slashes so the backend never answers with a
//! redirect that would drop the `Authorization` header.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AdvisorReply, Alert, AlertDraft, AlertEnvelope, EducationContent, LoginResponse, NewsArticle,
    PortfolioItem, PredictionHistory, PredictionResponse, RegisteredUser, RiskAnalysis,
    SentimentResponse,
};
#[cfg(any(test, feature = "hydrate"))]
use crate::config::API_PREFIX;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const PORTFOLIO_PATH: &str = "/portfolio/";
const PORTFOLIO_ADD_PATH: &str = "/portfolio/add";
const PORTFOLIO_RISK_PATH: &str = "/portfolio/risk";
const PREDICT_PATH: &str = "/predictions/predict";
const MARKET_NEWS_PATH: &str = "/news/market";
const SENTIMENT_PATH: &str = "/news/sentiment";
const ADVISOR_CHAT_PATH: &str = "/advisor/chat";
const ADVISOR_STRATEGY_PATH: &str = "/advisor/strategy";
const ALERTS_PATH: &str = "/alerts/";
const EDUCATION_PATH: &str = "/education/content";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[cfg(feature = "hydrate")]
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Characters escaped inside a path segment; matches `encodeURIComponent`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode user text for use as a single path segment.
fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

fn portfolio_item_path(symbol: &str) -> String {
    format!("/portfolio/{}", encode_segment(symbol))
}

fn prediction_history_path(symbol: &str) -> String {
    format!("/predictions/history/{}", encode_segment(symbol))
}

fn stock_news_path(symbol: &str) -> String {
    format!("/news/stock/{}", encode_segment(symbol))
}

fn alert_item_path(id: i64) -> String {
    format!("/alerts/{id}/")
}

/// Field order of the form-encoded login body.
fn login_form_fields<'a>(username: &'a str, password: &'a str) -> [(&'static str, &'a str); 2] {
    [("username", username), ("password", password)]
}

/// Decode a success body. An empty body decodes as JSON `null` so
/// acknowledgement endpoints can return `serde_json::Value`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `/news/market` may answer with a non-array body when the feed is down;
/// that is treated as "no news" rather than an error.
fn news_from_value(value: serde_json::Value) -> Vec<NewsArticle> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(feature = "hydrate")]
fn with_auth(
    builder: gloo_net::http::RequestBuilder,
    method: Method,
    path: &str,
) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::load_token() {
        Some(token) => builder.header("Authorization", &bearer_header(&token)),
        None => {
            log::warn!("no token stored for request: {} {path}", method.as_str());
            builder
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !(200..300).contains(&status) {
        let err = ApiError::from_status(status, &body);
        if err.is_unauthorized() {
            log::warn!("401 unauthorized: token may be invalid or expired");
        }
        return Err(err);
    }
    decode_body(&body)
}

async fn request_json<T: DeserializeOwned>(
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = api_url(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let mut builder = with_auth(builder, method, path);
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        let resp = match body {
            Some(payload) => builder
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, query, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// The backend uses an OAuth2 password form, so the body is
/// `application/x-www-form-urlencoded` rather than JSON.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` with the backend detail on bad
/// credentials, or a network/decode error.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::Network("form encoding unavailable".to_owned()))?;
        for (key, value) in login_form_fields(username, password) {
            params.append(key, value);
        }
        let resp = gloo_net::http::Request::post(&api_url(LOGIN_PATH))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(params)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = login_form_fields(username, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the backend validation detail (duplicate user, short password) or
/// a network error.
pub async fn register(username: &str, password: &str) -> Result<RegisteredUser, ApiError> {
    let payload = serde_json::json!({ "username": username, "password": password });
    request_json(Method::Post, REGISTER_PATH, &[], Some(payload)).await
}

// =============================================================================
// PORTFOLIO
// =============================================================================

/// Fetch the signed-in user's holdings.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the token is missing or expired.
pub async fn get_portfolio() -> Result<Vec<PortfolioItem>, ApiError> {
    request_json(Method::Get, PORTFOLIO_PATH, &[], None).await
}

/// Add a position via `POST /portfolio/add`.
///
/// # Errors
///
/// Returns any request failure.
pub async fn add_stock(item: &PortfolioItem) -> Result<serde_json::Value, ApiError> {
    let payload = serde_json::to_value(item).map_err(|e| ApiError::Decode(e.to_string()))?;
    request_json(Method::Post, PORTFOLIO_ADD_PATH, &[], Some(payload)).await
}

/// Remove every position for `symbol`.
///
/// # Errors
///
/// Returns any request failure.
pub async fn remove_stock(symbol: &str) -> Result<serde_json::Value, ApiError> {
    request_json(Method::Delete, &portfolio_item_path(symbol), &[], None).await
}

/// Fetch diversification/volatility/imbalance metrics.
///
/// # Errors
///
/// Returns any request failure.
pub async fn get_risk_analysis() -> Result<RiskAnalysis, ApiError> {
    request_json(Method::Get, PORTFOLIO_RISK_PATH, &[], None).await
}

// =============================================================================
// PREDICTIONS
// =============================================================================

/// Run the hybrid prediction engine for `symbol`.
///
/// # Errors
///
/// `ApiError::Status` with 404 when the backend has no data for the symbol.
pub async fn get_prediction(symbol: &str) -> Result<PredictionResponse, ApiError> {
    let payload = serde_json::json!({ "symbol": symbol });
    request_json(Method::Post, PREDICT_PATH, &[], Some(payload)).await
}

/// Fetch stored predictions for `symbol`.
///
/// # Errors
///
/// Returns any request failure.
pub async fn get_prediction_history(symbol: &str) -> Result<PredictionHistory, ApiError> {
    request_json(Method::Get, &prediction_history_path(symbol), &[], None).await
}

// =============================================================================
// NEWS
// =============================================================================

/// Fetch up to `limit` articles about `symbol`.
///
/// # Errors
///
/// Returns any request failure.
pub async fn get_stock_news(symbol: &str, limit: u32) -> Result<Vec<NewsArticle>, ApiError> {
    let value: serde_json::Value =
        request_json(Method::Get, &stock_news_path(symbol), &[("limit", limit.to_string())], None).await?;
    Ok(news_from_value(value))
}

/// Fetch up to `limit` general market articles.
///
/// # Errors
///
/// Returns any request failure.
pub async fn get_market_news(limit: u32) -> Result<Vec<NewsArticle>, ApiError> {
    let value: serde_json::Value =
        request_json(Method::Get, MARKET_NEWS_PATH, &[("limit", limit.to_string())], None).await?;
    Ok(news_from_value(value))
}

/// Score the sentiment of `articles`.
///
/// # Errors
///
/// Returns any request failure.
pub async fn analyze_sentiment(articles: &[NewsArticle]) -> Result<SentimentResponse, ApiError> {
    let payload = serde_json::to_value(articles).map_err(|e| ApiError::Decode(e.to_string()))?;
    request_json(Method::Post, SENTIMENT_PATH, &[], Some(payload)).await
}

// =============================================================================
// ADVISOR
// =============================================================================

/// Send a chat message to the strategy advisor.
///
/// # Errors
///
/// Returns any request failure.
pub async fn advisor_chat(message: &str) -> Result<AdvisorReply, ApiError> {
    let payload = serde_json::json!({ "query": message });
    request_json(Method::Post, ADVISOR_CHAT_PATH, &[], Some(payload)).await
}

/// Fetch the advisor's current portfolio strategy summary.
///
/// # Errors
///
/// Returns any request failure.
pub async fn advisor_strategy() -> Result<serde_json::Value, ApiError> {
    request_json(Method::Get, ADVISOR_STRATEGY_PATH, &[], None).await
}

// =============================================================================
// ALERTS
// =============================================================================

/// List configured price alerts.
///
/// # Errors
///
/// Returns any request failure.
pub async fn get_alerts() -> Result<Vec<Alert>, ApiError> {
    let alerts: Option<Vec<Alert>> = request_json(Method::Get, ALERTS_PATH, &[], None).await?;
    Ok(alerts.unwrap_or_default())
}

/// Create a price alert.
///
/// # Errors
///
/// Returns any request failure.
pub async fn create_alert(draft: &AlertDraft) -> Result<Alert, ApiError> {
    let payload = serde_json::to_value(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
    let envelope: AlertEnvelope = request_json(Method::Post, ALERTS_PATH, &[], Some(payload)).await?;
    Ok(envelope.into_alert())
}

/// Replace an existing alert.
///
/// # Errors
///
/// Returns any request failure.
pub async fn update_alert(id: i64, draft: &AlertDraft) -> Result<Alert, ApiError> {
    let payload = serde_json::to_value(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
    let envelope: AlertEnvelope = request_json(Method::Put, &alert_item_path(id), &[], Some(payload)).await?;
    Ok(envelope.into_alert())
}

/// Delete an alert.
///
/// # Errors
///
/// Returns any request failure.
pub async fn delete_alert(id: i64) -> Result<serde_json::Value, ApiError> {
    request_json(Method::Delete, &alert_item_path(id), &[], None).await
}

// =============================================================================
// EDUCATION
// =============================================================================

/// Fetch the education module list.
///
/// # Errors
///
/// Returns any request failure.
pub async fn fetch_education_content() -> Result<EducationContent, ApiError> {
    request_json(Method::Get, EDUCATION_PATH, &[], None).await
}
