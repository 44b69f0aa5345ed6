use super::*;
use crate::net::types::AlertDirection;

#[test]
fn api_url_prefixes_api_root() {
    assert_eq!(api_url(PORTFOLIO_PATH), "/api/portfolio/");
    assert_eq!(api_url(LOGIN_PATH), "/api/auth/login");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn collection_paths_keep_trailing_slash() {
    assert!(PORTFOLIO_PATH.ends_with('/'));
    assert!(ALERTS_PATH.ends_with('/'));
    assert_eq!(alert_item_path(12), "/alerts/12/");
}

#[test]
fn item_paths_embed_identifiers() {
    assert_eq!(portfolio_item_path("TCS"), "/portfolio/TCS");
    assert_eq!(prediction_history_path("INFY"), "/predictions/history/INFY");
    assert_eq!(stock_news_path("ITC"), "/news/stock/ITC");
}

#[test]
fn symbols_are_encoded_as_single_segments() {
    assert_eq!(portfolio_item_path("A#B"), "/portfolio/A%23B");
    assert_eq!(portfolio_item_path("M&M?x"), "/portfolio/M%26M%3Fx");
    assert_eq!(stock_news_path("A/B"), "/news/stock/A%2FB");
    assert_eq!(prediction_history_path("BAJAJ-AUTO.NS"), "/predictions/history/BAJAJ-AUTO.NS");
    assert_eq!(encode_segment("ICICI BANK"), "ICICI%20BANK");
}

#[test]
fn login_form_fields_are_username_then_password() {
    assert_eq!(
        login_form_fields("demo@demo.com", "demo123"),
        [("username", "demo@demo.com"), ("password", "demo123")]
    );
}

#[test]
fn decode_body_treats_empty_body_as_null() {
    let value: serde_json::Value = decode_body("").unwrap();
    assert!(value.is_null());
    let alerts: Option<Vec<Alert>> = decode_body("  ").unwrap();
    assert!(alerts.is_none());
}

#[test]
fn decode_body_reports_shape_mismatch() {
    let err = decode_body::<Vec<PortfolioItem>>(r#"{"symbol": "TCS"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_body_parses_portfolio_rows() {
    let items: Vec<PortfolioItem> =
        decode_body(r#"[{"symbol": "TCS", "quantity": 2, "buy_price": 3900.5}]"#).unwrap();
    assert_eq!(items[0].symbol, "TCS");
    assert_eq!(items[0].quantity, 2.0);
}

#[test]
fn news_from_value_ignores_non_array_bodies() {
    assert!(news_from_value(serde_json::json!({"error": "feed down"})).is_empty());
    assert!(news_from_value(serde_json::Value::Null).is_empty());
}

#[test]
fn news_from_value_skips_malformed_entries() {
    let value = serde_json::json!([
        { "title": "Nifty closes higher", "url": "https://example.com/a" },
        "not an article",
        { "title": "Rupee steady" }
    ]);
    let news = news_from_value(value);
    assert_eq!(news.len(), 2);
    assert_eq!(news[1].title, "Rupee steady");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let draft = AlertDraft { symbol: "TCS".to_owned(), threshold: 1.0, direction: AlertDirection::Above };
    let result = block_on_ready(create_alert(&draft));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that complete without ever pending.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
