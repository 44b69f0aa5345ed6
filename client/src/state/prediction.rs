//! Prediction viewer model: symbol universe, fallbacks, and score shaping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The prediction engine has gone through two response shapes. Current
//! responses carry `score`, `technical_score`, `lstm_probability` and a
//! weighted `components` map; older ones carry display-ready `confidence`,
//! `technical`, `trend`. [`PredictionView::from_response`] folds either into
//! one view, treating zero and empty values as missing.
//!
//! DESIGN
//! ======
//! A small table of cached predictions backs the page when the engine is
//! unreachable. Symbols outside the table get an error toast instead.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use std::collections::BTreeMap;

use crate::net::types::{ComponentScore, Explanation, PortfolioItem, PredictionResponse, PriceField};
use crate::state::portfolio::{DraftError, parse_positive};
use crate::util::format::{parse_price, round_to};
use crate::util::rings::{Tone, bar_percent, component_tone};

pub const DEFAULT_SYMBOL: &str = "RELIANCE";
pub const DEFAULT_DECISION: &str = "HOLD";
pub const DEFAULT_EXPLANATION: &str = "Analysis complete.";
pub const NEUTRAL_SCORE: f64 = 50.0;

pub const CACHED_TOAST: &str = "Using cached prediction data";
pub const FAILED_TOAST: &str = "Failed to get prediction. Try again later.";

pub const EXCHANGES: [&str; 2] = ["NSE", "BSE"];
pub const HORIZONS: [&str; 3] = ["1 Day", "1 Week", "1 Month"];

pub const LOADING_STEPS: [&str; 5] = [
    "Fetching historical data",
    "Running LSTM model",
    "Computing indicators",
    "Scoring sentiment",
    "Generating decision",
];

pub const NIFTY_SYMBOLS: [&str; 45] = [
    "RELIANCE", "HDFCBANK", "TCS", "INFY", "ICICIBANK", "HINDUNILVR", "LT", "SBIN", "ITC",
    "AXISBANK", "BHARTIARTL", "BAJFINANCE", "NTPC", "KOTAKBANK", "ASIANPAINT", "MARUTI",
    "SUNPHARMA", "TITAN", "NESTLEIND", "ONGC", "HCLTECH", "CIPLA", "COALINDIA", "DLF",
    "DIVISLAB", "GAIL", "GODREJCP", "GRASIM", "HDFCLIFE", "HAVELLS", "IOC", "IRFC", "NAUKRI",
    "INDIGO", "JSWENERGY", "JSWSTEEL", "MAXHEALTH", "MAZDOCK", "PIDILITIND", "PFC", "POWERGRID",
    "PNB", "SHRIRAMFIN", "SOLARINDS", "TVSMOTOR",
];

struct CachedPrediction {
    symbol: &'static str,
    decision: &'static str,
    confidence: f64,
    trend: f64,
    technical: f64,
    sentiment: f64,
    risk: f64,
    price: &'static str,
    target: &'static str,
    stop: &'static str,
    explanation: &'static str,
}

const CACHED: [CachedPrediction; 5] = [
    CachedPrediction {
        symbol: "RELIANCE",
        decision: "BUY",
        confidence: 87.0,
        trend: 82.0,
        technical: 78.0,
        sentiment: 91.0,
        risk: 65.0,
        price: "2,847.50",
        target: "3,120.00",
        stop: "2,650.00",
        explanation: "Strong uptrend backed by institutional buying and positive crude oil correlation. RSI at 62 with MACD bullish crossover. News sentiment highly positive on Jio expansion.",
    },
    CachedPrediction {
        symbol: "TCS",
        decision: "BUY",
        confidence: 79.0,
        trend: 74.0,
        technical: 81.0,
        sentiment: 76.0,
        risk: 58.0,
        price: "3,920.00",
        target: "4,250.00",
        stop: "3,700.00",
        explanation: "IT sector recovery momentum with strong Q3 guidance. EMA alignment bullish, volume surge detected. Analyst upgrades boost sentiment score.",
    },
    CachedPrediction {
        symbol: "HDFC_BANK",
        decision: "HOLD",
        confidence: 62.0,
        trend: 55.0,
        technical: 60.0,
        sentiment: 58.0,
        risk: 72.0,
        price: "1,640.25",
        target: "1,720.00",
        stop: "1,580.00",
        explanation: "Mixed signals across timeframes. Pending RBI policy outcome creates uncertainty. Risk-adjusted return not compelling for fresh entry.",
    },
    CachedPrediction {
        symbol: "WIPRO",
        decision: "SELL",
        confidence: 73.0,
        trend: 68.0,
        technical: 70.0,
        sentiment: 45.0,
        risk: 80.0,
        price: "512.60",
        target: "460.00",
        stop: "540.00",
        explanation: "Bearish divergence on weekly chart. Deal pipeline concerns reflected in negative earnings revision. High risk score warrants position reduction.",
    },
    CachedPrediction {
        symbol: "INFY",
        decision: "BUY",
        confidence: 84.0,
        trend: 88.0,
        technical: 79.0,
        sentiment: 83.0,
        risk: 52.0,
        price: "1,720.80",
        target: "1,950.00",
        stop: "1,620.00",
        explanation: "Outperforming sector peers with strong deal wins. Digital transformation demand accelerating. Fundamentally strong with low debt and high ROE.",
    },
];

/// One weighted component of the hybrid score, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentBar {
    pub name: String,
    pub weight_pct: f64,
    pub score: f64,
    pub width: f64,
    pub tone: Tone,
}

/// Display form of a prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    pub decision: String,
    pub confidence: f64,
    pub trend: f64,
    pub technical: f64,
    pub sentiment: f64,
    pub risk: f64,
    pub price: String,
    pub target: String,
    pub stop: String,
    pub explanation: String,
    pub components: Vec<ComponentBar>,
    pub hybrid_score: Option<f64>,
}

/// `Some` only for a present, non-zero, finite number.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

fn first_price(candidates: [&Option<PriceField>; 2]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|p| !p.is_blank())
        .map_or_else(|| "0".to_owned(), ToString::to_string)
}

impl PredictionView {
    pub fn from_response(data: &PredictionResponse) -> Self {
        let or_neutral = |primary: Option<f64>, legacy: Option<f64>| {
            present(primary).or(present(legacy)).unwrap_or(NEUTRAL_SCORE).round()
        };
        let trend = present(data.lstm_probability.map(|p| p * 100.0))
            .or(present(data.trend))
            .unwrap_or(NEUTRAL_SCORE)
            .round();
        let explanation = match &data.explanation {
            Some(Explanation::Lines(lines)) => lines.join(" "),
            Some(Explanation::Text(text)) => text.clone(),
            None => String::new(),
        };
        let (components, hybrid_score) = match &data.components {
            Some(map) => (component_bars(map), Some(hybrid_score(map))),
            None => (Vec::new(), None),
        };
        Self {
            decision: data
                .decision
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DECISION.to_owned()),
            confidence: or_neutral(data.score, data.confidence),
            trend,
            technical: or_neutral(data.technical_score, data.technical),
            sentiment: or_neutral(data.sentiment_score, data.sentiment),
            risk: or_neutral(data.risk_score, data.risk),
            price: first_price([&data.latest_price, &data.price]),
            target: first_price([&data.target_price, &data.target]),
            stop: first_price([&data.stop_loss, &data.stop]),
            explanation: if explanation.is_empty() {
                DEFAULT_EXPLANATION.to_owned()
            } else {
                explanation
            },
            components,
            hybrid_score,
        }
    }

    fn from_cached(cached: &CachedPrediction) -> Self {
        Self {
            decision: cached.decision.to_owned(),
            confidence: cached.confidence,
            trend: cached.trend,
            technical: cached.technical,
            sentiment: cached.sentiment,
            risk: cached.risk,
            price: cached.price.to_owned(),
            target: cached.target.to_owned(),
            stop: cached.stop.to_owned(),
            explanation: cached.explanation.to_owned(),
            components: Vec::new(),
            hybrid_score: None,
        }
    }

    /// Percent gain from current price to target, one decimal.
    pub fn upside_pct(&self) -> Option<f64> {
        let price = parse_price(&self.price).filter(|p| *p != 0.0)?;
        let target = parse_price(&self.target)?;
        Some(round_to((target - price) / price * 100.0, 1))
    }

    pub fn upside_label(&self) -> String {
        self.upside_pct()
            .map_or_else(|| "—".to_owned(), |pct| format!("{}{pct:.1}%", if pct > 0.0 { "+" } else { "" }))
    }

    pub fn decision_tone(&self) -> Tone {
        decision_tone(&self.decision)
    }

    pub fn score_rows(&self) -> [ScoreRow; 4] {
        [
            ScoreRow {
                icon: "📈",
                label: "Trend Score",
                value: self.trend,
                color: "var(--cyan)",
                note: "LSTM model · 30-day window",
            },
            ScoreRow {
                icon: "📊",
                label: "Technical Score",
                value: self.technical,
                color: "var(--purple)",
                note: "RSI · MACD · Bollinger",
            },
            ScoreRow {
                icon: "📰",
                label: "Sentiment Score",
                value: self.sentiment,
                color: "var(--amber)",
                note: "NLP · News & Social Analysis",
            },
            ScoreRow {
                icon: "⚠️",
                label: "Risk Score (Lower = Better)",
                value: 100.0 - self.risk,
                color: "var(--green)",
                note: "Volatility · Beta · Drawdown",
            },
        ]
    }

    /// Price prefilled into the order modal, separators removed.
    pub fn order_price(&self) -> String {
        self.price.replace(',', "")
    }
}

/// Cached prediction for `symbol`, also trying `_` in place of spaces.
pub fn cached_prediction(symbol: &str) -> Option<PredictionView> {
    let underscored = symbol.replace(' ', "_");
    CACHED
        .iter()
        .find(|c| c.symbol == symbol || c.symbol == underscored)
        .map(PredictionView::from_cached)
}

/// Initial view before any request.
pub fn initial_view() -> Option<PredictionView> {
    cached_prediction(DEFAULT_SYMBOL)
}

/// Weighted mean of component scores, neutral when no weight is set.
pub fn hybrid_score(components: &BTreeMap<String, ComponentScore>) -> f64 {
    let (weighted, total) = components
        .values()
        .fold((0.0, 0.0), |(sum, weight), c| (sum + c.score * c.weight, weight + c.weight));
    if total == 0.0 { NEUTRAL_SCORE } else { weighted / total }
}

/// Bars for every component with a non-zero weight.
pub fn component_bars(components: &BTreeMap<String, ComponentScore>) -> Vec<ComponentBar> {
    components
        .iter()
        .filter(|(_, c)| c.weight != 0.0)
        .map(|(name, c)| ComponentBar {
            name: capitalize(name),
            weight_pct: (c.weight * 100.0).round(),
            score: c.score,
            width: bar_percent(c.score),
            tone: component_tone(c.score),
        })
        .collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

pub fn decision_tone(decision: &str) -> Tone {
    match decision {
        "BUY" | "ADD" | "STRONG BUY" => Tone::Green,
        "SELL" | "REMOVE" | "AVOID" => Tone::Red,
        _ => Tone::Amber,
    }
}

pub fn decision_arrow(decision: &str) -> &'static str {
    match decision_tone(decision) {
        Tone::Green => "↑",
        Tone::Red => "↓",
        _ => "—",
    }
}

/// One row of the score breakdown card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
    pub note: &'static str,
}

/// Symbol to request: a non-empty custom entry wins over the grid.
pub fn resolve_symbol(selected: &str, custom: &str) -> String {
    let custom = custom.trim();
    if custom.is_empty() { selected.to_owned() } else { custom.to_uppercase() }
}

/// Label used on grid buttons and the decision banner.
pub fn display_symbol(symbol: &str) -> String {
    symbol.replace('_', " ")
}

/// Symbol sent with orders: underscores removed.
pub fn order_symbol(symbol: &str) -> String {
    symbol.replace('_', "")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TradeSide {
    #[default]
    Buy,
    Sell,
}

impl TradeSide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

/// Raw order-modal input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TradeDraft {
    pub side: TradeSide,
    pub quantity: String,
    pub price: String,
}

impl TradeDraft {
    pub fn validate(&self, symbol: &str) -> Result<PortfolioItem, DraftError> {
        let quantity = parse_positive(&self.quantity).ok_or(DraftError::InvalidQuantity)?;
        let buy_price = parse_positive(&self.price).ok_or(DraftError::InvalidPrice)?;
        Ok(PortfolioItem { symbol: order_symbol(symbol), quantity, buy_price })
    }
}

pub fn order_placed_message(side: TradeSide, quantity: f64, symbol: &str) -> String {
    format!("{} order placed for {quantity} shares of {symbol}!", side.label())
}

pub fn order_failed_message(side: TradeSide) -> String {
    format!("Failed to place {} order. Please try again.", side.label())
}
