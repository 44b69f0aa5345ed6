use super::*;
use crate::net::types::PriceField;

fn response(json: &str) -> PredictionResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn engine_response_maps_to_view() {
    let data = response(
        r#"{
            "symbol": "TCS", "decision": "BUY", "score": 71.6,
            "technical_score": 64.2, "lstm_probability": 0.734,
            "sentiment_score": 58.9, "risk_score": 33.3,
            "latest_price": 3920.5,
            "explanation": ["RSI rising.", "Volume surge."]
        }"#,
    );
    let view = PredictionView::from_response(&data);
    assert_eq!(view.decision, "BUY");
    assert_eq!(view.confidence, 72.0);
    assert_eq!(view.trend, 73.0);
    assert_eq!(view.technical, 64.0);
    assert_eq!(view.sentiment, 59.0);
    assert_eq!(view.risk, 33.0);
    assert_eq!(view.price, "3920.5");
    assert_eq!(view.target, "0");
    assert_eq!(view.explanation, "RSI rising. Volume surge.");
}

#[test]
fn legacy_fields_fill_in_when_engine_fields_missing() {
    let data = response(
        r#"{"confidence": 62, "trend": 55, "technical": 60, "sentiment": 58, "risk": 72,
            "price": "1,640.25", "target": "1,720.00", "stop": "1,580.00",
            "explanation": "Mixed signals."}"#,
    );
    let view = PredictionView::from_response(&data);
    assert_eq!(view.decision, "HOLD");
    assert_eq!(view.confidence, 62.0);
    assert_eq!(view.trend, 55.0);
    assert_eq!(view.price, "1,640.25");
    assert_eq!(view.stop, "1,580.00");
    assert_eq!(view.explanation, "Mixed signals.");
}

#[test]
fn zero_values_read_as_missing() {
    let data = PredictionResponse {
        score: Some(0.0),
        lstm_probability: Some(0.0),
        latest_price: Some(PriceField::Number(0.0)),
        price: Some(PriceField::Text("512.60".to_owned())),
        ..PredictionResponse::default()
    };
    let view = PredictionView::from_response(&data);
    assert_eq!(view.confidence, 50.0);
    assert_eq!(view.trend, 50.0);
    assert_eq!(view.price, "512.60");
}

#[test]
fn empty_response_uses_defaults() {
    let view = PredictionView::from_response(&PredictionResponse::default());
    assert_eq!(view.decision, "HOLD");
    assert_eq!(view.explanation, "Analysis complete.");
    assert_eq!(view.risk, 50.0);
    assert!(view.components.is_empty());
    assert_eq!(view.hybrid_score, None);
}

#[test]
fn hybrid_score_is_weighted_mean() {
    let data = response(
        r#"{"components": {
            "technical": {"score": 80, "weight": 0.35},
            "trend": {"score": 60, "weight": 0.25},
            "lstm": {"score": 70, "weight": 0.15},
            "pattern": {"score": 50, "weight": 0.15},
            "sentiment": {"score": 40, "weight": 0.10},
            "risk": {"score": 90, "weight": 0}
        }}"#,
    );
    let components = data.components.clone().unwrap();
    let expected = (80.0 * 0.35 + 60.0 * 0.25 + 70.0 * 0.15 + 50.0 * 0.15 + 40.0 * 0.10) / 1.0;
    assert!((hybrid_score(&components) - expected).abs() < 1e-9);

    let view = PredictionView::from_response(&data);
    assert_eq!(view.components.len(), 5);
    assert!(view.components.iter().all(|c| c.name != "Risk"));
    let technical = view.components.iter().find(|c| c.name == "Technical").unwrap();
    assert_eq!(technical.weight_pct, 35.0);
    assert_eq!(technical.tone, Tone::Green);
}

#[test]
fn hybrid_score_is_neutral_without_weight() {
    let mut components = BTreeMap::new();
    components.insert("risk".to_owned(), ComponentScore { score: 90.0, weight: 0.0 });
    assert_eq!(hybrid_score(&components), 50.0);
    assert_eq!(hybrid_score(&BTreeMap::new()), 50.0);
}

#[test]
fn component_bar_width_is_clamped() {
    let mut components = BTreeMap::new();
    components.insert("trend".to_owned(), ComponentScore { score: 130.0, weight: 0.5 });
    components.insert("lstm".to_owned(), ComponentScore { score: 30.0, weight: 0.5 });
    let bars = component_bars(&components);
    assert_eq!(bars[0].name, "Lstm");
    assert_eq!(bars[0].tone, Tone::Red);
    assert_eq!(bars[1].width, 100.0);
}

#[test]
fn cached_lookup_handles_spaces() {
    assert_eq!(cached_prediction("HDFC BANK").map(|v| v.decision), Some("HOLD".to_owned()));
    assert_eq!(cached_prediction("WIPRO").map(|v| v.confidence), Some(73.0));
    assert!(cached_prediction("ZOMATO").is_none());
    assert_eq!(initial_view().map(|v| v.price), Some("2,847.50".to_owned()));
}

#[test]
fn upside_uses_parsed_prices() {
    let view = cached_prediction("RELIANCE").unwrap();
    assert_eq!(view.upside_pct(), Some(9.6));
    assert_eq!(view.upside_label(), "+9.6%");
    let wipro = cached_prediction("WIPRO").unwrap();
    assert_eq!(wipro.upside_label(), "-10.3%");
}

#[test]
fn upside_is_dash_for_zero_price() {
    let view = PredictionView::from_response(&PredictionResponse::default());
    assert_eq!(view.upside_pct(), None);
    assert_eq!(view.upside_label(), "—");
}

#[test]
fn risk_row_inverts_risk() {
    let view = cached_prediction("TCS").unwrap();
    let rows = view.score_rows();
    assert_eq!(rows[3].label, "Risk Score (Lower = Better)");
    assert_eq!(rows[3].value, 42.0);
    assert_eq!(rows[0].value, 74.0);
}

#[test]
fn decision_tones_and_arrows() {
    assert_eq!(decision_tone("STRONG BUY"), Tone::Green);
    assert_eq!(decision_tone("AVOID"), Tone::Red);
    assert_eq!(decision_tone("HOLD"), Tone::Amber);
    assert_eq!(decision_arrow("BUY"), "↑");
    assert_eq!(decision_arrow("SELL"), "↓");
    assert_eq!(decision_arrow("HOLD"), "—");
}

#[test]
fn custom_symbol_overrides_selection() {
    assert_eq!(resolve_symbol("TCS", "  zomato "), "ZOMATO");
    assert_eq!(resolve_symbol("TCS", "   "), "TCS");
}

#[test]
fn symbol_forms() {
    assert_eq!(display_symbol("HDFC_BANK"), "HDFC BANK");
    assert_eq!(order_symbol("HDFC_BANK"), "HDFCBANK");
    assert_eq!(NIFTY_SYMBOLS.len(), 45);
}

#[test]
fn trade_draft_validation() {
    let mut draft = TradeDraft { side: TradeSide::Buy, quantity: String::new(), price: "2847.50".into() };
    assert_eq!(draft.validate("RELIANCE"), Err(DraftError::InvalidQuantity));
    draft.quantity = "10".into();
    let item = draft.validate("HDFC_BANK").unwrap();
    assert_eq!(item.symbol, "HDFCBANK");
    assert_eq!(item.quantity, 10.0);
    draft.price = "-1".into();
    assert_eq!(draft.validate("TCS"), Err(DraftError::InvalidPrice));
}

#[test]
fn order_price_strips_separators() {
    assert_eq!(cached_prediction("RELIANCE").unwrap().order_price(), "2847.50");
}

#[test]
fn order_messages() {
    assert_eq!(
        order_placed_message(TradeSide::Sell, 5.0, "TCS"),
        "SELL order placed for 5 shares of TCS!"
    );
    assert_eq!(order_failed_message(TradeSide::Buy), "Failed to place BUY order. Please try again.");
}
