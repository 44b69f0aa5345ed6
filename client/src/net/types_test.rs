use super::*;

// =============================================================
// PriceField / Explanation
// =============================================================

#[test]
fn price_field_accepts_number_and_text() {
    let n: PriceField = serde_json::from_str("2847.5").unwrap();
    let t: PriceField = serde_json::from_str("\"2,847.50\"").unwrap();
    assert_eq!(n.to_string(), "2847.5");
    assert_eq!(t.to_string(), "2,847.50");
}

#[test]
fn price_field_blank_detection_matches_falsy_values() {
    assert!(PriceField::Number(0.0).is_blank());
    assert!(PriceField::Text(String::new()).is_blank());
    assert!(!PriceField::Text("0".to_owned()).is_blank());
}

#[test]
fn explanation_accepts_list_or_text() {
    let lines: Explanation = serde_json::from_str(r#"["RSI high", "MACD bullish"]"#).unwrap();
    let text: Explanation = serde_json::from_str(r#""Strong uptrend""#).unwrap();
    assert_eq!(lines, Explanation::Lines(vec!["RSI high".to_owned(), "MACD bullish".to_owned()]));
    assert_eq!(text, Explanation::Text("Strong uptrend".to_owned()));
}

// =============================================================
// PredictionResponse
// =============================================================

#[test]
fn prediction_response_parses_engine_payload() {
    let raw = serde_json::json!({
        "symbol": "INFY",
        "decision": "Buy",
        "score": 64.2,
        "technical_score": 70.0,
        "lstm_probability": 0.61,
        "latest_price": 1720.8,
        "explanation": ["Uptrend intact"],
        "components": {
            "technical": { "score": 70.0, "weight": 0.35 },
            "risk": { "score": 55.0, "weight": 0.0 }
        }
    });
    let resp: PredictionResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.decision.as_deref(), Some("Buy"));
    assert_eq!(resp.latest_price, Some(PriceField::Number(1720.8)));
    let components = resp.components.unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components["technical"].weight, 0.35);
}

#[test]
fn prediction_response_tolerates_empty_object() {
    let resp: PredictionResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, PredictionResponse::default());
}

// =============================================================
// Alerts
// =============================================================

#[test]
fn alert_direction_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&AlertDirection::Above).unwrap(), "\"above\"");
    assert_eq!(serde_json::to_string(&AlertDirection::Below).unwrap(), "\"below\"");
}

#[test]
fn alert_direction_form_value_defaults_to_above() {
    assert_eq!(AlertDirection::from_form_value("below"), AlertDirection::Below);
    assert_eq!(AlertDirection::from_form_value("BELOW"), AlertDirection::Below);
    assert_eq!(AlertDirection::from_form_value("sideways"), AlertDirection::Above);
}

#[test]
fn alert_envelope_unwraps_created_payload() {
    let wrapped = serde_json::json!({
        "status": "created",
        "alert": { "id": 7, "symbol": "TCS", "threshold": 4000.0, "direction": "above" }
    });
    let bare = serde_json::json!({ "id": 8, "symbol": "ITC", "threshold": 410.5, "direction": "below" });

    let a = serde_json::from_value::<AlertEnvelope>(wrapped).unwrap().into_alert();
    let b = serde_json::from_value::<AlertEnvelope>(bare).unwrap().into_alert();
    assert_eq!(a.id, 7);
    assert_eq!(a.symbol, "TCS");
    assert_eq!(b.direction, AlertDirection::Below);
}

// =============================================================
// Misc
// =============================================================

#[test]
fn risk_analysis_missing_fields_default_to_zero() {
    let risk: RiskAnalysis = serde_json::from_str(r#"{"volatility_risk": 0.4}"#).unwrap();
    assert_eq!(risk.volatility_risk, 0.4);
    assert_eq!(risk.diversification_score, 0.0);
    assert_eq!(risk.allocation_imbalance, 0.0);
}

#[test]
fn education_module_title_falls_back_to_topic_then_placeholder() {
    let titled = EducationModule { title: Some("Candles".to_owned()), topic: Some("x".to_owned()) };
    let topical = EducationModule { title: None, topic: Some("Risk 101".to_owned()) };
    let empty = EducationModule::default();
    assert_eq!(titled.display_title(), "Candles");
    assert_eq!(topical.display_title(), "Risk 101");
    assert_eq!(empty.display_title(), "Untitled module");
}

#[test]
fn news_article_missing_fields_default_empty() {
    let a: NewsArticle = serde_json::from_str(r#"{"title": "Markets rally"}"#).unwrap();
    assert_eq!(a.title, "Markets rally");
    assert!(a.url.is_empty());
    assert!(a.source.is_none());
}
