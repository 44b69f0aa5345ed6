//! Ring gauge geometry and colour thresholds.
//!
//! SYSTEM CONTEXT
//! ==============
//! The risk meter, confidence meter, and score bars all draw an SVG stroke
//! whose dash offset encodes a 0..100 value, coloured by fixed thresholds.

#[cfg(test)]
#[path = "rings_test.rs"]
mod rings_test;

use std::f64::consts::PI;

pub const RISK_RING_RADIUS: f64 = 40.0;
pub const CONFIDENCE_RING_RADIUS: f64 = 54.0;

/// Palette tone, rendered as a CSS custom property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Green,
    Amber,
    Red,
    Cyan,
}

impl Tone {
    pub fn css_var(self) -> &'static str {
        match self {
            Self::Green => "var(--green)",
            Self::Amber => "var(--amber)",
            Self::Red => "var(--red)",
            Self::Cyan => "var(--cyan)",
        }
    }
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Dash offset that leaves `value` percent of the ring visible.
pub fn dash_offset(radius: f64, value: f64) -> f64 {
    let value = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
    circumference(radius) * (1.0 - value / 100.0)
}

/// Clamp a percentage for bar widths.
pub fn bar_percent(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_value(value: f64) -> Self {
        if value <= 35.0 {
            Self::Low
        } else if value <= 60.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW RISK",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH RISK",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Green,
            Self::Moderate => Tone::Amber,
            Self::High => Tone::Red,
        }
    }
}

pub fn confidence_tone(value: f64) -> Tone {
    if value >= 70.0 {
        Tone::Green
    } else if value >= 45.0 {
        Tone::Amber
    } else {
        Tone::Red
    }
}

pub fn confidence_grade(value: f64) -> &'static str {
    if value >= 80.0 {
        "HIGH"
    } else if value >= 55.0 {
        "MED"
    } else {
        "LOW"
    }
}

/// Colour of a hybrid-model component bar.
pub fn component_tone(score: f64) -> Tone {
    if score >= 60.0 {
        Tone::Green
    } else if score >= 40.0 {
        Tone::Amber
    } else {
        Tone::Red
    }
}
