//! Live dashboard data: holdings count, market news, and engine signals.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::config::DASHBOARD_SIGNAL_LIMIT;
use crate::net::types::{NewsArticle, PortfolioItem, PredictionResponse};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub portfolio: Vec<PortfolioItem>,
    pub news: Vec<NewsArticle>,
    pub signals: Vec<PredictionResponse>,
    pub loading: bool,
}

impl DashboardData {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Articles shown in the news card.
    pub fn visible_news(&self) -> &[NewsArticle] {
        let end = self.news.len().min(crate::config::DASHBOARD_NEWS_LIMIT as usize);
        &self.news[..end]
    }

    pub fn news_placeholder(&self) -> &'static str {
        if self.loading { "Loading news..." } else { "No news available." }
    }
}

/// Symbols whose predictions feed the signal count, in holding order.
pub fn signal_symbols(items: &[PortfolioItem]) -> Vec<String> {
    items.iter().take(DASHBOARD_SIGNAL_LIMIT).map(|i| i.symbol.clone()).collect()
}

/// KPI cards: label, value, colour, icon.
pub fn kpi_cards(data: &DashboardData) -> [(&'static str, usize, &'static str, &'static str); 3] {
    [
        ("Portfolio Items", data.portfolio.len(), "var(--cyan)", "◈"),
        ("Active Signals", data.signals.len(), "var(--purple)", "◉"),
        ("News Articles", data.news.len(), "var(--amber)", "📰"),
    ]
}
