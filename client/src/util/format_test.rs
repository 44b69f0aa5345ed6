use super::*;

#[test]
fn groups_lakh_and_crore() {
    assert_eq!(group_indian("999"), "999");
    assert_eq!(group_indian("1000"), "1,000");
    assert_eq!(group_indian("123456"), "1,23,456");
    assert_eq!(group_indian("1234567"), "12,34,567");
    assert_eq!(group_indian("123456789"), "12,34,56,789");
}

#[test]
fn format_inr_rounds_to_whole_rupees() {
    assert_eq!(format_inr(245_678.6, 0), "2,45,679");
    assert_eq!(format_inr(0.0, 0), "0");
}

#[test]
fn format_inr_trims_trailing_zeros() {
    assert_eq!(format_inr(2_520.0, 2), "2,520");
    assert_eq!(format_inr(2_520.5, 2), "2,520.5");
    assert_eq!(format_inr(1_234.567, 2), "1,234.57");
}

#[test]
fn format_inr_signs() {
    assert_eq!(format_inr(-12_345.0, 0), "-12,345");
    assert_eq!(format_inr(-0.2, 0), "0");
    assert_eq!(format_inr(f64::NAN, 0), "0");
}

#[test]
fn rupees_prefixes_symbol() {
    assert_eq!(rupees(3_850.0, 0), "₹3,850");
}

#[test]
fn signed_prefix_only_for_positive() {
    assert_eq!(signed_prefix(1.0), "+");
    assert_eq!(signed_prefix(0.0), "");
    assert_eq!(signed_prefix(-3.0), "");
}

#[test]
fn parse_price_strips_commas() {
    assert_eq!(parse_price("2,450.00"), Some(2450.0));
    assert_eq!(parse_price(" 3890 "), Some(3890.0));
    assert_eq!(parse_price("—"), None);
    assert_eq!(parse_price(""), None);
}

#[test]
fn round_to_decimals() {
    assert_eq!(round_to(12.345, 1), 12.3);
    assert_eq!(round_to(4.998, 2), 5.0);
}

#[test]
fn whole_label_rounds_halves_up_like_risk_bars() {
    assert_eq!(whole_label(42.5), "43");
    assert_eq!(whole_label(41.5), "42");
    assert_eq!(whole_label(42.4), "42");
    assert_eq!(whole_label(0.0), "0");
}

#[test]
fn percent_label_always_shows_one_decimal() {
    assert_eq!(percent_label(50.0), "50.0%");
    assert_eq!(percent_label(33.3), "33.3%");
    assert_eq!(percent_label(12.25), "12.3%");
}
