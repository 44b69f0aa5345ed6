//! Market dashboard: static market panels plus live holdings, news, and
//! engine signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! While a user is signed in the page polls the portfolio, market news, and
//! predictions for the first holdings. A 401 on the portfolio trips the page's
//! `PollGate`, which ends the loop until the page is mounted again.
//!
//! TRADE-OFFS
//! ==========
//! Ticker, signals, allocation, sentiment, and movers are fixed tables from
//! `state::market`. Only the sparklines animate, on their own tick.

use leptos::prelude::*;

use crate::components::sparkline::Sparkline;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardData, kpi_cards};
use crate::state::market::{
    ALLOCATION, RECENT_SIGNALS, SENTIMENT_BREAKDOWN, SENTIMENT_INDEX, SENTIMENT_LABEL, SignalKind, TICKERS,
    TOP_MOVERS, jittered_series, signal_count_label, signal_counts, sparkline_bars,
};
use crate::util::clock::{ClockParts, format_long_date, now};
use crate::util::poll::PollGate;
use crate::util::rings::Tone;

#[cfg(feature = "hydrate")]
async fn load_dashboard(data: RwSignal<DashboardData>, gate: PollGate) {
    use crate::config::DASHBOARD_NEWS_LIMIT;
    use crate::net::api;
    use crate::state::dashboard::signal_symbols;

    let portfolio = api::get_portfolio().await;
    gate.note(&portfolio);
    let items = match portfolio {
        Ok(items) => Some(items),
        Err(e) => {
            log::warn!("dashboard portfolio fetch failed: {e}");
            None
        }
    };

    let news = match api::get_market_news(DASHBOARD_NEWS_LIMIT).await {
        Ok(news) => news,
        Err(e) => {
            log::warn!("dashboard news fetch failed: {e}");
            Vec::new()
        }
    };

    let symbols = items.as_deref().map(signal_symbols).unwrap_or_default();
    let signals = if symbols.is_empty() {
        None
    } else {
        let results = futures::future::join_all(symbols.iter().map(|s| api::get_prediction(s))).await;
        Some(
            symbols
                .iter()
                .zip(results)
                .filter_map(|(symbol, result)| match result {
                    Ok(prediction) => Some(prediction),
                    Err(e) => {
                        log::warn!("signal fetch failed for {symbol}: {e}");
                        None
                    }
                })
                .collect::<Vec<_>>(),
        )
    };

    data.update(|d| {
        if let Some(items) = items {
            d.portfolio = items;
        }
        d.news = news;
        if let Some(signals) = signals {
            d.signals = signals;
        }
        d.loading = false;
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = RwSignal::new(DashboardData::loading());
    let tick = RwSignal::new(0_u64);
    let today = RwSignal::new(None::<ClockParts>);
    let gate = PollGate::new();

    let signed_in = Memo::new(move |_| auth.with(AuthState::is_signed_in));

    Effect::new(move || today.set(now()));

    Effect::new(move || {
        if !signed_in.get() {
            data.update(|d| {
                d.loading = false;
                d.portfolio.clear();
            });
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let gate = gate.clone();
            crate::util::poll::spawn_poll(crate::config::DASHBOARD_POLL, gate.clone(), move || {
                load_dashboard(data, gate.clone())
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &gate;
    });

    #[cfg(feature = "hydrate")]
    crate::util::poll::spawn_poll(crate::config::DASHBOARD_TICK, PollGate::new(), move || {
        tick.update(|t| *t += 1);
        async {}
    });

    let counts = signal_counts(&RECENT_SIGNALS);

    view! {
        <div class="dashboard">
            <div class="ticker-tape">
                <div class="ticker-tape__inner">
                    {TICKERS
                        .iter()
                        .chain(TICKERS.iter())
                        .map(|t| {
                            view! {
                                <span class="ticker-tape__item">
                                    <span class="ticker-tape__symbol">{t.symbol}</span>
                                    <span class="ticker-tape__price">{t.price}</span>
                                    <span class="ticker-tape__change" class:up=t.up class:down=!t.up>
                                        {t.change}
                                    </span>
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="page-header">
                <h1>"TradeVision AI"</h1>
                <p>
                    "Real-time AI analysis · NSE/BSE · "
                    {move || today.get().map(format_long_date).unwrap_or_default()}
                </p>
            </div>

            <div class="grid-4 kpi-row">
                {move || {
                    kpi_cards(&data.get())
                        .into_iter()
                        .map(|(label, value, color, icon)| {
                            view! {
                                <div class="card stat-card">
                                    <div class="stat-card__icon" style:color=color>{icon}</div>
                                    <div class="stat-card__label">{label}</div>
                                    <div class="stat-card__value" style:color=color>{value}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="grid-2">
                <div class="card">
                    <div class="section-title">"Market Overview"</div>
                    <div class="market-table">
                        {TICKERS
                            .iter()
                            .enumerate()
                            .map(|(row, t)| {
                                let color = if t.up { Tone::Green } else { Tone::Red }.css_var();
                                let bars = Signal::derive(move || sparkline_bars(&jittered_series(tick.get(), row as u64)));
                                view! {
                                    <div class="market-row">
                                        <div class="market-row__left">
                                            <div class="market-row__symbol">{t.symbol}</div>
                                            <div class="market-row__exchange">"NSE"</div>
                                        </div>
                                        <div class="market-row__spark">
                                            <Sparkline bars=bars color=color/>
                                        </div>
                                        <div class="market-row__right">
                                            <div class="market-row__price">{format!("₹{}", t.price)}</div>
                                            <span class="badge" class:badge--up=t.up class:badge--down=!t.up>
                                                {t.change}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="card">
                    <div class="section-title">"Recent AI Signals"</div>
                    <div class="signals-list">
                        {RECENT_SIGNALS
                            .iter()
                            .map(|s| {
                                view! {
                                    <div class="signal-row">
                                        <div class="signal-row__left">
                                            <div class=s.kind.badge_class()>{s.kind.label()}</div>
                                            <div>
                                                <div class="signal-row__symbol">{s.symbol}</div>
                                                <div class="signal-row__age">{s.age}</div>
                                            </div>
                                        </div>
                                        <div class="signal-row__confidence">
                                            <div class="conf-bar__track">
                                                <div
                                                    class="conf-bar__fill"
                                                    style:width=format!("{}%", s.confidence)
                                                    style:background=s.kind.tone().css_var()
                                                ></div>
                                            </div>
                                            <div class="signal-row__value">{format!("{}%", s.confidence)}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="divider"></div>
                    <div class="signal-summary">
                        {[(counts.buy, SignalKind::Buy), (counts.sell, SignalKind::Sell), (counts.hold, SignalKind::Hold)]
                            .into_iter()
                            .map(|(count, kind)| {
                                view! {
                                    <div class="signal-summary__item">
                                        <span class="signal-summary__dot" style:background=kind.tone().css_var()></span>
                                        <span>{signal_count_label(count, kind)}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="grid-3">
                <div class="card">
                    <div class="section-title">"Portfolio Allocation"</div>
                    {ALLOCATION
                        .iter()
                        .map(|a| {
                            view! {
                                <div class="alloc-row">
                                    <div class="alloc-row__label">
                                        <span class="alloc-row__dot" style:background=a.tone></span>
                                        <span>{a.label}</span>
                                        <span class="alloc-row__pct">{format!("{}%", a.pct)}</span>
                                    </div>
                                    <div class="score-bar__track">
                                        <div
                                            class="score-bar__fill"
                                            style:width=format!("{}%", a.pct)
                                            style:background=a.tone
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="card">
                    <div class="section-title">"Sentiment Index"</div>
                    <div class="sentiment-gauge">
                        <div class="sentiment-gauge__arc">
                            <svg viewBox="0 0 120 80" width="120" height="80">
                                <path d="M10 70 A50 50 0 0 1 110 70" fill="none" stroke="var(--border)" stroke-width="8" stroke-linecap="round"></path>
                                <path
                                    d="M10 70 A50 50 0 0 1 110 70"
                                    fill="none"
                                    stroke="var(--green)"
                                    stroke-width="8"
                                    stroke-linecap="round"
                                    stroke-dasharray="157"
                                    stroke-dashoffset="47"
                                ></path>
                            </svg>
                            <div class="sentiment-gauge__value">{SENTIMENT_INDEX}</div>
                            <div class="sentiment-gauge__label">{SENTIMENT_LABEL}</div>
                        </div>
                        {SENTIMENT_BREAKDOWN
                            .iter()
                            .map(|(label, pct, tone)| {
                                view! {
                                    <div class="score-bar">
                                        <div class="score-bar__label">
                                            <span>{*label}</span>
                                            <span>{format!("{pct}%")}</span>
                                        </div>
                                        <div class="score-bar__track">
                                            <div
                                                class="score-bar__fill"
                                                style:width=format!("{pct}%")
                                                style:background=tone.css_var()
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="card">
                    <div class="section-title">"Top Movers Today"</div>
                    {TOP_MOVERS
                        .iter()
                        .enumerate()
                        .map(|(i, m)| {
                            let color = if m.up() { Tone::Green } else { Tone::Red }.css_var();
                            view! {
                                <div class="mover-row">
                                    <span class="mover-row__rank">{format!("#{}", i + 1)}</span>
                                    <span class="mover-row__symbol">{m.symbol}</span>
                                    <span class="mover-row__change" class:up=m.up() class:down=!m.up()>
                                        {m.change_label()}
                                    </span>
                                    <div class="mover-row__bar-wrap">
                                        <div
                                            class="mover-row__bar"
                                            style:width=format!("{}%", m.bar_width())
                                            style:background=color
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card news-card">
                <div class="section-title">"Latest Market News"</div>
                {move || {
                    let current = data.get();
                    if current.news.is_empty() {
                        return view! { <div class="news-card__empty">{current.news_placeholder()}</div> }.into_any();
                    }
                    view! {
                        <ul class="news-list">
                            {current
                                .visible_news()
                                .iter()
                                .map(|n| {
                                    view! {
                                        <li class="news-list__item">
                                            <a href=n.url.clone() target="_blank" rel="noreferrer">
                                                <h3>{n.title.clone()}</h3>
                                                <p>{n.summary.clone()}</p>
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
