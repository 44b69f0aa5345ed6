//! Number formatting for rupee amounts and percentages.
//!
//! Amounts are grouped the Indian way: the last three integer digits form one
//! group and every two digits before them form another (`12,34,567`).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group the decimal digits of `digits` in lakh/crore style.
pub fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(len - 3);
    let mut out = String::with_capacity(len + len / 2);
    let lead = head.len() % 2;
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (i + 2 - lead) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Format `value` with Indian grouping and at most `max_fraction` decimals.
///
/// Trailing fractional zeros are dropped, and a value that rounds to zero is
/// never shown with a minus sign.
pub fn format_inr(value: f64, max_fraction: usize) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// `₹` followed by [`format_inr`].
pub fn rupees(value: f64, max_fraction: usize) -> String {
    format!("₹{}", format_inr(value, max_fraction))
}

/// `+` for strictly positive values, empty otherwise.
pub fn signed_prefix(value: f64) -> &'static str {
    if value > 0.0 { "+" } else { "" }
}

/// Parse a displayed price, ignoring thousands separators.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to `digits` decimals.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Whole-number label, rounding half away from zero like [`f64::round`].
pub fn whole_label(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// One-decimal percentage, e.g. `50.0%`.
pub fn percent_label(value: f64) -> String {
    format!("{:.1}%", round_to(value, 1))
}
