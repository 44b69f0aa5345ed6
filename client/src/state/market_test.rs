use super::*;

#[test]
fn signal_counts_match_mock_table() {
    let counts = signal_counts(&RECENT_SIGNALS);
    assert_eq!(counts, SignalCounts { buy: 3, sell: 1, hold: 1 });
}

#[test]
fn signal_count_labels_pluralize() {
    assert_eq!(signal_count_label(3, SignalKind::Buy), "3 BUY signals");
    assert_eq!(signal_count_label(1, SignalKind::Sell), "1 SELL signal");
}

#[test]
fn mover_bar_width_scales_and_clamps() {
    assert!((TOP_MOVERS[0].bar_width() - 84.0).abs() < 1e-9);
    assert!((TOP_MOVERS[3].bar_width() - 17.6).abs() < 1e-9);
    let big = Mover { symbol: "X", change_pct: -7.5 };
    assert_eq!(big.bar_width(), 100.0);
}

#[test]
fn mover_labels_carry_sign() {
    assert_eq!(TOP_MOVERS[0].change_label(), "+4.20%");
    assert_eq!(TOP_MOVERS[3].change_label(), "-0.88%");
}

#[test]
fn jitter_is_deterministic_and_bounded() {
    let a = jittered_series(3, 1);
    let b = jittered_series(3, 1);
    assert_eq!(a, b);
    assert_ne!(a, jittered_series(4, 1));
    for (v, base) in a.iter().zip(SPARK_BASE) {
        assert!((v - base).abs() <= 10.0);
    }
}

#[test]
fn sparkline_normalizes_to_max() {
    let bars = sparkline_bars(&[50.0, 100.0]);
    assert_eq!(bars[0].height_pct, 50.0);
    assert_eq!(bars[1].height_pct, 100.0);
    assert!((bars[0].opacity - 0.4).abs() < 1e-9);
    assert!((bars[1].opacity - 0.7).abs() < 1e-9);
}

#[test]
fn allocation_sums_to_hundred() {
    let total: u32 = ALLOCATION.iter().map(|a| u32::from(a.pct)).sum();
    assert_eq!(total, 100);
}

#[test]
fn ticker_tables_have_expected_sizes() {
    assert_eq!(TICKERS.len(), 8);
    assert_eq!(SIDEBAR_MARKET.len(), 3);
    assert!(!TICKERS[2].up);
}
