//! Holdings arithmetic for the portfolio tracker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend stores only symbol, quantity, and buy price. Everything the
//! tracker displays (last traded price, value, P&L, weight) is derived here.
//!
//! TRADE-OFFS
//! ==========
//! There is no quote feed, so LTP is a fixed 5% markup over the buy price.
//! P&L figures are therefore illustrative.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use crate::net::types::{PortfolioItem, RiskAnalysis};
use crate::util::format::round_to;
use crate::util::rings::bar_percent;

pub const LTP_MARKUP: f64 = 1.05;
pub const UNKNOWN_SECTOR: &str = "Unknown";

#[derive(Clone, Debug, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub qty: f64,
    pub avg: f64,
    pub ltp: f64,
    pub sector: &'static str,
    /// Share of total value in percent, one decimal.
    pub weight: f64,
}

impl Holding {
    pub fn value(&self) -> f64 {
        self.qty * self.ltp
    }

    pub fn pnl(&self) -> f64 {
        (self.ltp - self.avg) * self.qty
    }

    /// Percent change over the buy price, two decimals; 0 for a zero buy price.
    pub fn pnl_pct(&self) -> f64 {
        if self.avg == 0.0 {
            return 0.0;
        }
        round_to((self.ltp - self.avg) / self.avg * 100.0, 2)
    }

    pub fn is_up(&self) -> bool {
        self.pnl() >= 0.0
    }
}

/// Turn backend rows into display holdings with weights.
pub fn build_holdings(items: &[PortfolioItem]) -> Vec<Holding> {
    let mut holdings: Vec<Holding> = items
        .iter()
        .map(|item| Holding {
            symbol: item.symbol.clone(),
            qty: item.quantity,
            avg: item.buy_price,
            ltp: item.buy_price * LTP_MARKUP,
            sector: UNKNOWN_SECTOR,
            weight: 0.0,
        })
        .collect();
    let total: f64 = holdings.iter().map(Holding::value).sum();
    if total > 0.0 {
        for h in &mut holdings {
            h.weight = round_to(h.value() / total * 100.0, 1);
        }
    }
    holdings
}

/// Portfolio-level figures shown in the KPI row and summary card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub value: f64,
    pub invested: f64,
    pub pnl: f64,
    /// Return on invested capital in percent, two decimals.
    pub return_pct: f64,
}

pub fn totals(holdings: &[Holding]) -> Totals {
    let value: f64 = holdings.iter().map(Holding::value).sum();
    let invested: f64 = holdings.iter().map(|h| h.qty * h.avg).sum();
    let pnl = value - invested;
    let return_pct = if invested > 0.0 { round_to(pnl / invested * 100.0, 2) } else { 0.0 };
    Totals { value, invested, pnl, return_pct }
}

/// One risk-analysis bar: label, whole-number score, width, and colour.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskBar {
    pub label: &'static str,
    pub score: f64,
    pub width: f64,
    pub tone: &'static str,
}

pub fn risk_bars(risk: &RiskAnalysis) -> [RiskBar; 3] {
    let bar = |label, fraction: f64, tone| {
        let score = (fraction * 100.0).round();
        RiskBar { label, score, width: bar_percent(score), tone }
    };
    [
        bar("Diversification", risk.diversification_score, "var(--cyan)"),
        bar("Volatility Risk", risk.volatility_risk, "var(--amber)"),
        bar("Allocation Imbalance", risk.allocation_imbalance, "var(--red)"),
    ]
}

/// Value fed to the risk meter.
pub fn risk_meter_value(risk: &RiskAnalysis) -> f64 {
    risk.volatility_risk * 100.0
}

/// Raw "Add Stock" form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddStockDraft {
    pub symbol: String,
    pub qty: String,
    pub price: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please enter a stock symbol")]
    MissingSymbol,
    #[error("Please enter a valid quantity")]
    InvalidQuantity,
    #[error("Please enter a valid price")]
    InvalidPrice,
}

impl AddStockDraft {
    /// Validate and normalize into a request body.
    pub fn validate(&self) -> Result<PortfolioItem, DraftError> {
        let symbol = self.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DraftError::MissingSymbol);
        }
        let quantity = parse_positive(&self.qty).ok_or(DraftError::InvalidQuantity)?;
        let buy_price = parse_positive(&self.price).ok_or(DraftError::InvalidPrice)?;
        Ok(PortfolioItem { symbol, quantity, buy_price })
    }
}

/// Parse a strictly positive finite number.
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}
