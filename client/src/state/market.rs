//! Static market content shown on the dashboard and sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend has no quote feed, so the ticker tape, market overview,
//! signal list, allocation, sentiment gauge, and movers are fixed tables.
//! Only the sparklines move: each tick re-jitters them from a deterministic
//! sequence so server and browser render the same first frame.

#[cfg(test)]
#[path = "market_test.rs"]
mod market_test;

use crate::util::rings::Tone;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ticker {
    pub symbol: &'static str,
    pub price: &'static str,
    pub change: &'static str,
    pub up: bool,
}

pub const TICKERS: [Ticker; 8] = [
    Ticker { symbol: "RELIANCE", price: "2,847.50", change: "+1.24%", up: true },
    Ticker { symbol: "TCS", price: "3,920.00", change: "+0.67%", up: true },
    Ticker { symbol: "HDFC BANK", price: "1,640.25", change: "-0.32%", up: false },
    Ticker { symbol: "INFOSYS", price: "1,720.80", change: "+2.11%", up: true },
    Ticker { symbol: "WIPRO", price: "512.60", change: "-0.88%", up: false },
    Ticker { symbol: "BAJAJ FIN", price: "6,850.00", change: "+1.76%", up: true },
    Ticker { symbol: "ICICI BANK", price: "1,024.35", change: "+0.45%", up: true },
    Ticker { symbol: "LT", price: "3,510.90", change: "-0.21%", up: false },
];

pub const SIDEBAR_MARKET: [Ticker; 3] = [
    Ticker { symbol: "NIFTY 50", price: "22,147", change: "+0.84%", up: true },
    Ticker { symbol: "SENSEX", price: "73,204", change: "+0.72%", up: true },
    Ticker { symbol: "BTC/USD", price: "67,440", change: "-1.20%", up: false },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalKind {
    Buy,
    Sell,
    Hold,
}

impl SignalKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Hold => "HOLD",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Buy => Tone::Green,
            Self::Sell => Tone::Red,
            Self::Hold => Tone::Amber,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Buy => "signal-badge signal-green",
            Self::Sell => "signal-badge signal-red",
            Self::Hold => "signal-badge signal-amber",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockSignal {
    pub symbol: &'static str,
    pub kind: SignalKind,
    pub confidence: u8,
    pub age: &'static str,
}

pub const RECENT_SIGNALS: [MockSignal; 5] = [
    MockSignal { symbol: "RELIANCE", kind: SignalKind::Buy, confidence: 87, age: "2 min ago" },
    MockSignal { symbol: "HDFC BANK", kind: SignalKind::Hold, confidence: 62, age: "7 min ago" },
    MockSignal { symbol: "TCS", kind: SignalKind::Buy, confidence: 79, age: "12 min ago" },
    MockSignal { symbol: "WIPRO", kind: SignalKind::Sell, confidence: 73, age: "18 min ago" },
    MockSignal { symbol: "BAJAJ FIN", kind: SignalKind::Buy, confidence: 91, age: "24 min ago" },
];

/// Count of BUY, SELL, and HOLD entries in `signals`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignalCounts {
    pub buy: usize,
    pub sell: usize,
    pub hold: usize,
}

pub fn signal_counts(signals: &[MockSignal]) -> SignalCounts {
    signals.iter().fold(SignalCounts::default(), |mut acc, s| {
        match s.kind {
            SignalKind::Buy => acc.buy += 1,
            SignalKind::Sell => acc.sell += 1,
            SignalKind::Hold => acc.hold += 1,
        }
        acc
    })
}

/// "3 BUY signals" / "1 SELL signal".
pub fn signal_count_label(count: usize, kind: SignalKind) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {} signal{plural}", kind.label())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Allocation {
    pub label: &'static str,
    pub pct: u8,
    pub tone: &'static str,
}

pub const ALLOCATION: [Allocation; 4] = [
    Allocation { label: "Technology", pct: 40, tone: "var(--cyan)" },
    Allocation { label: "Banking", pct: 28, tone: "var(--purple)" },
    Allocation { label: "Energy", pct: 18, tone: "var(--amber)" },
    Allocation { label: "FMCG", pct: 14, tone: "var(--green)" },
];

pub const SENTIMENT_INDEX: u8 = 70;
pub const SENTIMENT_LABEL: &str = "BULLISH";
pub const SENTIMENT_BREAKDOWN: [(&str, u8, Tone); 3] = [
    ("Positive News", 70, Tone::Green),
    ("Negative News", 18, Tone::Red),
    ("Neutral", 12, Tone::Amber),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mover {
    pub symbol: &'static str,
    pub change_pct: f64,
}

pub const TOP_MOVERS: [Mover; 5] = [
    Mover { symbol: "BAJAJ FIN", change_pct: 4.20 },
    Mover { symbol: "INFOSYS", change_pct: 2.11 },
    Mover { symbol: "RELIANCE", change_pct: 1.24 },
    Mover { symbol: "WIPRO", change_pct: -0.88 },
    Mover { symbol: "HDFC BANK", change_pct: -0.32 },
];

impl Mover {
    pub fn up(&self) -> bool {
        self.change_pct >= 0.0
    }

    /// "+4.20%" / "-0.88%".
    pub fn change_label(&self) -> String {
        format!("{}{:.2}%", if self.up() { "+" } else { "" }, self.change_pct)
    }

    /// Bar width in percent: five points of change fill the bar.
    pub fn bar_width(&self) -> f64 {
        (self.change_pct.abs() * 20.0).min(100.0)
    }
}

pub const SPARK_BASE: [f64; 12] = [40.0, 55.0, 48.0, 72.0, 60.0, 83.0, 70.0, 90.0, 78.0, 95.0, 88.0, 100.0];

const SPARK_JITTER: f64 = 20.0;

/// One sparkline bar: height and opacity, both ready for inline style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkBar {
    pub height_pct: f64,
    pub opacity: f64,
}

/// Base series jittered by up to ±10 for `(tick, row)`.
pub fn jittered_series(tick: u64, row: u64) -> Vec<f64> {
    let mut state = tick
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(row.wrapping_mul(0xBF58_476D_1CE4_E5B9))
        | 1;
    SPARK_BASE
        .iter()
        .map(|base| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            base + (unit - 0.5) * SPARK_JITTER
        })
        .collect()
}

/// Normalize `series` against its maximum and fade earlier bars.
pub fn sparkline_bars(series: &[f64]) -> Vec<SparkBar> {
    let max = series.iter().copied().fold(f64::MIN, f64::max);
    let len = series.len().max(1) as f64;
    series
        .iter()
        .enumerate()
        .map(|(i, v)| SparkBar {
            height_pct: if max > 0.0 { v / max * 100.0 } else { 0.0 },
            opacity: 0.4 + (i as f64 / len) * 0.6,
        })
        .collect()
}
