use super::*;

fn holding(symbol: &str) -> PortfolioItem {
    PortfolioItem { symbol: symbol.to_owned(), quantity: 1.0, buy_price: 100.0 }
}

fn article(title: &str) -> NewsArticle {
    NewsArticle { title: title.to_owned(), ..NewsArticle::default() }
}

#[test]
fn signal_symbols_take_first_five_in_order() {
    let items: Vec<_> = ["A", "B", "C", "D", "E", "F"].into_iter().map(holding).collect();
    assert_eq!(signal_symbols(&items), vec!["A", "B", "C", "D", "E"]);
    assert!(signal_symbols(&[]).is_empty());
}

#[test]
fn news_is_capped_at_five() {
    let data = DashboardData {
        news: (0..8).map(|i| article(&format!("story {i}"))).collect(),
        ..DashboardData::default()
    };
    assert_eq!(data.visible_news().len(), 5);
    assert_eq!(data.visible_news()[4].title, "story 4");
}

#[test]
fn placeholder_depends_on_loading() {
    assert_eq!(DashboardData::loading().news_placeholder(), "Loading news...");
    assert_eq!(DashboardData::default().news_placeholder(), "No news available.");
}

#[test]
fn kpis_count_live_data() {
    let data = DashboardData {
        portfolio: vec![holding("A"), holding("B")],
        news: vec![article("x")],
        ..DashboardData::default()
    };
    let cards = kpi_cards(&data);
    assert_eq!(cards[0].1, 2);
    assert_eq!(cards[1].1, 0);
    assert_eq!(cards[2].0, "News Articles");
    assert_eq!(cards[2].1, 1);
}
