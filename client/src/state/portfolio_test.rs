use super::*;

fn item(symbol: &str, quantity: f64, buy_price: f64) -> PortfolioItem {
    PortfolioItem { symbol: symbol.to_owned(), quantity, buy_price }
}

#[test]
fn ltp_is_five_percent_over_buy_price() {
    let holdings = build_holdings(&[item("TCS", 2.0, 100.0)]);
    assert!((holdings[0].ltp - 105.0).abs() < 1e-9);
    assert_eq!(holdings[0].sector, "Unknown");
}

#[test]
fn weights_are_share_of_value_to_one_decimal() {
    let holdings = build_holdings(&[item("A", 1.0, 100.0), item("B", 2.0, 100.0)]);
    assert_eq!(holdings[0].weight, 33.3);
    assert_eq!(holdings[1].weight, 66.7);
}

#[test]
fn weights_are_zero_when_total_is_zero() {
    let holdings = build_holdings(&[item("A", 0.0, 100.0)]);
    assert_eq!(holdings[0].weight, 0.0);
}

#[test]
fn totals_and_return() {
    let holdings = build_holdings(&[item("A", 10.0, 200.0), item("B", 5.0, 400.0)]);
    let t = totals(&holdings);
    assert!((t.invested - 4000.0).abs() < 1e-9);
    assert!((t.value - 4200.0).abs() < 1e-9);
    assert!((t.pnl - 200.0).abs() < 1e-9);
    assert_eq!(t.return_pct, 5.0);
}

#[test]
fn empty_portfolio_has_zero_return() {
    assert_eq!(totals(&[]), Totals::default());
}

#[test]
fn row_pnl_and_percent() {
    let h = &build_holdings(&[item("INFY", 4.0, 1500.0)])[0];
    assert!((h.pnl() - 300.0).abs() < 1e-9);
    assert_eq!(h.pnl_pct(), 5.0);
    assert!(h.is_up());
}

#[test]
fn risk_bars_scale_round_and_cap() {
    let risk = RiskAnalysis {
        diversification_score: 0.456,
        volatility_risk: 0.3,
        allocation_imbalance: 1.4,
    };
    let bars = risk_bars(&risk);
    assert_eq!(bars[0].score, 46.0);
    assert_eq!(bars[1].label, "Volatility Risk");
    assert_eq!(bars[2].score, 140.0);
    assert_eq!(bars[2].width, 100.0);
    assert!((risk_meter_value(&risk) - 30.0).abs() < 1e-9);
}

#[test]
fn default_risk_is_all_zero() {
    let bars = risk_bars(&RiskAnalysis::default());
    assert!(bars.iter().all(|b| b.score == 0.0));
}

#[test]
fn add_stock_draft_validates_and_uppercases() {
    let draft = AddStockDraft { symbol: " bajajfin ".into(), qty: "3".into(), price: "6850.5".into() };
    assert_eq!(draft.validate(), Ok(item("BAJAJFIN", 3.0, 6850.5)));
}

#[test]
fn add_stock_draft_rejects_bad_input() {
    let mut draft = AddStockDraft { symbol: String::new(), qty: "1".into(), price: "1".into() };
    assert_eq!(draft.validate(), Err(DraftError::MissingSymbol));
    draft.symbol = "TCS".into();
    draft.qty = "0".into();
    assert_eq!(draft.validate(), Err(DraftError::InvalidQuantity));
    draft.qty = "2".into();
    draft.price = "abc".into();
    assert_eq!(draft.validate().map_err(|e| e.to_string()), Err("Please enter a valid price".to_owned()));
}
