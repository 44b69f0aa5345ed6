//! AI prediction viewer and order entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests a prediction for the chosen symbol and renders the decision,
//! confidence ring, score breakdown, and hybrid score. When the engine is
//! unreachable the page falls back to a small table of cached predictions.
//! BUY NOW / SELL NOW record the trade as a portfolio entry and, shortly
//! after, signal the portfolio page to refresh.

use leptos::prelude::*;

use crate::components::confidence_meter::ConfidenceMeter;
use crate::components::score_breakdown::ScoreBreakdown;
use crate::components::toaster::toast_error;
#[cfg(feature = "hydrate")]
use crate::components::toaster::toast_success;
use crate::state::prediction::{
    DEFAULT_SYMBOL, EXCHANGES, HORIZONS, LOADING_STEPS, NIFTY_SYMBOLS, PredictionView, TradeDraft, TradeSide,
    decision_arrow, display_symbol, initial_view, resolve_symbol,
};
use crate::state::ui::UiState;
use crate::util::format::whole_label;
use crate::util::rings::Tone;

#[component]
pub fn PredictionPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let selected = RwSignal::new(DEFAULT_SYMBOL.to_owned());
    let custom = RwSignal::new(String::new());
    let exchange = RwSignal::new(EXCHANGES[0].to_owned());
    let horizon = RwSignal::new(HORIZONS[0].to_owned());
    let busy = RwSignal::new(false);
    let analyzed = RwSignal::new(DEFAULT_SYMBOL.to_owned());
    let result = RwSignal::new(initial_view());
    let trade = RwSignal::new(None::<TradeDraft>);
    let placing = RwSignal::new(false);

    let generate = move |_| {
        if busy.get_untracked() {
            return;
        }
        let symbol = resolve_symbol(&selected.get_untracked(), &custom.get_untracked());
        analyzed.set(symbol.clone());
        busy.set(true);
        result.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::prediction::{CACHED_TOAST, FAILED_TOAST, cached_prediction};

            log::info!(
                "requesting prediction for {symbol} ({} / {})",
                exchange.get_untracked(),
                horizon.get_untracked()
            );
            match crate::net::api::get_prediction(&symbol).await {
                Ok(resp) => result.set(Some(PredictionView::from_response(&resp))),
                Err(e) => {
                    log::warn!("prediction for {symbol} failed: {e}");
                    match cached_prediction(&symbol) {
                        Some(cached) => {
                            result.set(Some(cached));
                            toast_success(ui, CACHED_TOAST);
                        }
                        None => toast_error(ui, FAILED_TOAST),
                    }
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = symbol;
    };

    let open_trade = move |side: TradeSide| {
        let price = result.with_untracked(|r| r.as_ref().map(PredictionView::order_price)).unwrap_or_default();
        trade.set(Some(TradeDraft { side, quantity: String::new(), price }));
    };

    let submit_trade = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = trade.get_untracked() else {
            return;
        };
        let symbol = analyzed.get_untracked();
        let item = match draft.validate(&symbol) {
            Ok(item) => item,
            Err(e) => {
                toast_error(ui, e.to_string());
                return;
            }
        };
        placing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::prediction::{order_failed_message, order_placed_message};

            match crate::net::api::add_stock(&item).await {
                Ok(_) => {
                    log::info!("{} order recorded for {}", draft.side.label(), item.symbol);
                    toast_success(ui, order_placed_message(draft.side, item.quantity, &symbol));
                    let delay = u32::try_from(crate::config::PORTFOLIO_REFRESH_DELAY.as_millis()).unwrap_or(u32::MAX);
                    gloo_timers::callback::Timeout::new(delay, move || {
                        ui.try_update(UiState::bump_portfolio_refresh);
                    })
                    .forget();
                    trade.set(None);
                }
                Err(e) => {
                    log::warn!("order for {} failed: {e}", item.symbol);
                    toast_error(ui, order_failed_message(draft.side));
                }
            }
            placing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (item, symbol);
    };

    let ready = move || !busy.get() && result.with(Option::is_some);
    let tone = move || result.with(|r| r.as_ref().map(PredictionView::decision_tone)).unwrap_or(Tone::Amber);
    let confidence = Signal::derive(move || result.with(|r| r.as_ref().map_or(0.0, |v| v.confidence)));
    let rows = Signal::derive(move || result.with(|r| r.as_ref().map(|v| v.score_rows().to_vec()).unwrap_or_default()));
    let decision_color = Signal::derive(move || tone().css_var());
    let meter_color = Signal::derive(move || Some(tone().css_var()));

    view! {
        <div class="prediction-page">
            <div class="page-header">
                <h1>"AI Prediction Engine"</h1>
                <p>"LSTM Neural Network + Technical Analysis + Sentiment Fusion"</p>
            </div>

            <div class="pred-layout">
                <div class="pred-controls">
                    <div class="card">
                        <div class="section-title">"Stock Selection"</div>
                        <div class="symbol-grid">
                            {NIFTY_SYMBOLS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <button
                                            class="symbol-btn"
                                            class:active=move || selected.get() == *s
                                            on:click=move |_| selected.set((*s).to_owned())
                                        >
                                            {display_symbol(s)}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="divider"></div>
                        <label class="input-group">
                            "Or enter symbol"
                            <input
                                class="input"
                                placeholder="e.g. BAJAJFIN"
                                prop:value=move || custom.get()
                                on:input=move |ev| custom.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="input-group">
                            "Exchange"
                            <select class="input" on:change=move |ev| exchange.set(event_target_value(&ev))>
                                {EXCHANGES.iter().map(|e| view! { <option value=*e>{*e}</option> }).collect_view()}
                            </select>
                        </label>
                        <label class="input-group">
                            "Prediction Horizon"
                            <select class="input" on:change=move |ev| horizon.set(event_target_value(&ev))>
                                {HORIZONS.iter().map(|h| view! { <option value=*h>{*h}</option> }).collect_view()}
                            </select>
                        </label>
                        <button class="btn btn--primary btn--wide" on:click=generate disabled=move || busy.get()>
                            {move || if busy.get() { "Running AI Model..." } else { "⚡ Generate Prediction" }}
                        </button>
                    </div>

                    <Show when=ready>
                        <div class="card price-targets">
                            <div class="section-title">"Price Targets"</div>
                            {move || {
                                result
                                    .get()
                                    .map(|v| {
                                        let upside = v.upside_label();
                                        [
                                            ("Current Price", format!("₹{}", v.price), "var(--text-primary)"),
                                            ("Target Price", format!("₹{}", v.target), "var(--green)"),
                                            ("Stop Loss", format!("₹{}", v.stop), "var(--red)"),
                                            ("Potential Upside", upside, "var(--cyan)"),
                                        ]
                                            .into_iter()
                                            .map(|(label, value, color)| {
                                                view! {
                                                    <div class="price-targets__row">
                                                        <span class="price-targets__label">{label}</span>
                                                        <span class="price-targets__value" style:color=color>{value}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </div>
                    </Show>
                </div>

                <div class="pred-result">
                    <Show when=move || busy.get()>
                        <div class="card pred-loading">
                            <div class="pred-spinner">
                                {(0..6)
                                    .map(|i| {
                                        view! {
                                            <div class="pred-dot" style:animation-delay=format!("{:.2}s", f64::from(i) * 0.15)></div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="pred-loading__text">{move || format!("Analyzing {}...", analyzed.get())}</div>
                            <div class="pred-loading__steps">
                                {LOADING_STEPS
                                    .iter()
                                    .zip(0_u32..)
                                    .map(|(step, i)| {
                                        view! {
                                            <div class="pred-step" style:animation-delay=format!("{:.1}s", f64::from(i) * 0.3)>
                                                <span class="pred-step__icon">"▸"</span>
                                                {*step}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>

                    <Show when=ready>
                        <div class="card decision-banner" style:border-color=move || decision_color.get()>
                            <div class="decision-banner__left">
                                <div class="decision-banner__symbol">{move || display_symbol(&analyzed.get())}</div>
                                <div class="decision-pill" style:color=move || decision_color.get()>
                                    {move || {
                                        result
                                            .with(|r| r.as_ref().map(|v| format!("{} {}", decision_arrow(&v.decision), v.decision)))
                                            .unwrap_or_default()
                                    }}
                                </div>
                                <div class="decision-banner__explanation">
                                    {move || result.with(|r| r.as_ref().map(|v| v.explanation.clone())).unwrap_or_default()}
                                </div>
                            </div>
                            <div class="decision-banner__right">
                                <ConfidenceMeter value=confidence color=meter_color/>
                            </div>
                        </div>

                        <div class="trade-actions">
                            <button class="btn btn--buy" on:click=move |_| open_trade(TradeSide::Buy)>"↑ BUY NOW"</button>
                            <button class="btn btn--sell" on:click=move |_| open_trade(TradeSide::Sell)>"↓ SELL NOW"</button>
                        </div>

                        <div class="card">
                            <div class="section-title">"Score Breakdown"</div>
                            <ScoreBreakdown rows=rows/>
                        </div>

                        <div class="card">
                            <div class="section-title">"Hybrid Decision Score"</div>
                            <div class="final-score">
                                <div class="final-score__bar">
                                    <div
                                        class="final-score__fill"
                                        style:width=move || format!("{}%", confidence.get())
                                        style:background=move || decision_color.get()
                                    ></div>
                                    <div
                                        class="final-score__marker"
                                        style:left=move || format!("{}%", confidence.get())
                                        style:color=move || decision_color.get()
                                    >
                                        {move || format!("▾ {}", confidence.get())}
                                    </div>
                                </div>
                                <div class="final-score__scale">
                                    <span>"0 — Strong Sell"</span>
                                    <span>"50 — Neutral"</span>
                                    <span>"100 — Strong Buy"</span>
                                </div>
                            </div>
                        </div>

                        <Show when=move || result.with(|r| r.as_ref().is_some_and(|v| !v.components.is_empty()))>
                            <div class="card">
                                <div class="section-title">
                                    "Model Components"
                                    <span class="section-title__aside">
                                        {move || {
                                            result
                                                .with(|r| r.as_ref().and_then(|v| v.hybrid_score))
                                                .map(|s| format!("Hybrid {s:.1}"))
                                                .unwrap_or_default()
                                        }}
                                    </span>
                                </div>
                                {move || {
                                    result
                                        .get()
                                        .map(|v| v.components)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|c| {
                                            view! {
                                                <div class="score-bar">
                                                    <div class="score-bar__label">
                                                        <span>{format!("{} · {}%", c.name, c.weight_pct)}</span>
                                                        <span>{whole_label(c.score)}</span>
                                                    </div>
                                                    <div class="score-bar__track">
                                                        <div
                                                            class="score-bar__fill"
                                                            style:width=format!("{}%", c.width)
                                                            style:background=c.tone.css_var()
                                                        ></div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>

            <Show when=move || trade.with(Option::is_some)>
                <div class="dialog-backdrop" on:click=move |_| trade.set(None)>
                    <div class="dialog dialog--trade" on:click=move |ev| ev.stop_propagation()>
                        <h2>
                            {move || {
                                let side = trade.with(|t| t.as_ref().map(|d| d.side)).unwrap_or_default();
                                format!("{} {}", side.label(), display_symbol(&analyzed.get()))
                            }}
                        </h2>
                        <form on:submit=submit_trade>
                            <label class="dialog__label">
                                "Quantity"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    min="1"
                                    placeholder="Number of shares"
                                    prop:value=move || trade.with(|t| t.as_ref().map(|d| d.quantity.clone())).unwrap_or_default()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        trade.update(|t| {
                                            if let Some(d) = t {
                                                d.quantity = value;
                                            }
                                        });
                                    }
                                />
                            </label>
                            <label class="dialog__label">
                                "Price (₹)"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    step="0.01"
                                    prop:value=move || trade.with(|t| t.as_ref().map(|d| d.price.clone())).unwrap_or_default()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        trade.update(|t| {
                                            if let Some(d) = t {
                                                d.price = value;
                                            }
                                        });
                                    }
                                />
                            </label>
                            <div class="dialog__actions">
                                <button class="btn btn--ghost" type="button" on:click=move |_| trade.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" type="submit" disabled=move || placing.get()>
                                    {move || if placing.get() { "Placing..." } else { "Confirm Order" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
