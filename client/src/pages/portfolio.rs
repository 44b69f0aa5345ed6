//! Holdings, P&L, and portfolio risk.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polls the portfolio every few seconds while signed in, and refetches
//! whenever another page bumps `UiState::portfolio_refresh_seq` (for example
//! after an order on the prediction page). A 401 trips the page's gate and
//! stops both paths. Risk analysis rides along with each portfolio fetch; its
//! failures are logged and the previous figures kept.

use leptos::prelude::*;

use crate::components::risk_meter::RiskMeter;
use crate::components::toaster::toast_error;
use crate::net::types::RiskAnalysis;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::portfolio::build_holdings;
use crate::state::portfolio::{AddStockDraft, Holding, risk_bars, risk_meter_value, totals};
use crate::state::ui::UiState;
use crate::util::format::{format_inr, percent_label, rupees, signed_prefix, whole_label};
use crate::util::poll::PollGate;

const HOLDING_COLUMNS: [&str; 9] = ["Symbol", "Qty", "Avg Price", "LTP", "Current Value", "P&L", "% P&L", "Weight", ""];

#[derive(Clone, Copy)]
struct PortfolioSignals {
    holdings: RwSignal<Vec<Holding>>,
    risk: RwSignal<RiskAnalysis>,
    loading: RwSignal<bool>,
}

#[cfg(feature = "hydrate")]
async fn load_portfolio(sig: PortfolioSignals, gate: PollGate) {
    use crate::net::api;

    if !gate.is_open() {
        return;
    }
    let result = api::get_portfolio().await;
    gate.note(&result);
    match result {
        Ok(items) => {
            sig.holdings.set(build_holdings(&items));
            match api::get_risk_analysis().await {
                Ok(risk) => sig.risk.set(risk),
                Err(e) => log::warn!("risk analysis fetch failed: {e}"),
            }
        }
        Err(e) => log::warn!("portfolio fetch failed: {e}"),
    }
    sig.loading.set(false);
}

fn pnl_color(value: f64) -> &'static str {
    if value > 0.0 { "var(--green)" } else { "var(--red)" }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let sig = PortfolioSignals {
        holdings: RwSignal::new(Vec::new()),
        risk: RwSignal::new(RiskAnalysis::default()),
        loading: RwSignal::new(true),
    };
    let gate = PollGate::new();
    let show_add = RwSignal::new(false);
    let draft = RwSignal::new(AddStockDraft::default());

    let signed_in = Memo::new(move |_| auth.with(AuthState::is_signed_in));

    let poll_gate = gate.clone();
    Effect::new(move || {
        if !signed_in.get() {
            sig.loading.set(false);
            sig.holdings.set(Vec::new());
            return;
        }
        if !poll_gate.is_open() {
            sig.loading.set(false);
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let gate = poll_gate.clone();
            crate::util::poll::spawn_poll(crate::config::PORTFOLIO_POLL, gate.clone(), move || {
                load_portfolio(sig, gate.clone())
            });
        }
    });

    let refresh = {
        let gate = gate.clone();
        move || {
            if !gate.should_fetch(signed_in.get_untracked()) {
                return;
            }
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(load_portfolio(sig, gate.clone()));
        }
    };

    let on_seq = refresh.clone();
    Effect::new(move |prev: Option<u64>| {
        let seq = ui.with(|u| u.portfolio_refresh_seq);
        if prev.is_some_and(|p| p != seq) {
            on_seq();
        }
        seq
    });

    let on_remove = {
        let refresh = refresh.clone();
        Callback::new(move |symbol: String| {
            #[cfg(feature = "hydrate")]
            {
                let refresh = refresh.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::remove_stock(&symbol).await {
                        Ok(_) => refresh(),
                        Err(e) => {
                            log::warn!("remove {symbol} failed: {e}");
                            toast_error(ui, format!("Could not remove {symbol}"));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (symbol, &refresh);
        })
    };

    let submit_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let item = match draft.get_untracked().validate() {
            Ok(item) => item,
            Err(e) => {
                toast_error(ui, e.to_string());
                return;
            }
        };
        show_add.set(false);
        draft.set(AddStockDraft::default());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toaster::toast_success;

            match crate::net::api::add_stock(&item).await {
                Ok(_) => {
                    toast_success(ui, format!("Added {} to portfolio", item.symbol));
                    ui.update(UiState::bump_portfolio_refresh);
                }
                Err(e) => {
                    log::warn!("add {} failed: {e}", item.symbol);
                    toast_error(ui, e.user_message("Could not add stock"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = item;
    };

    let summary = Memo::new(move |_| sig.holdings.with(|h| totals(h)));
    let risk_value = Signal::derive(move || sig.risk.with(risk_meter_value));

    view! {
        <div class="portfolio-page">
            <div class="page-header page-header--split">
                <div>
                    <h1>"Portfolio Manager"</h1>
                    <p>"Track holdings · Monitor risk · Optimize allocation"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>"+ Add Stock"</button>
            </div>

            <div class="grid-4 kpi-row">
                {move || {
                    let t = summary.get();
                    [
                        ("Total Value", rupees(t.value, 0), "var(--cyan)"),
                        ("Invested", rupees(t.invested, 0), "var(--text-primary)"),
                        ("Unrealized P&L", format!("{}{}", signed_prefix(t.pnl), rupees(t.pnl, 0)), pnl_color(t.pnl)),
                        ("Total Return", format!("{}{:.2}%", signed_prefix(t.return_pct), t.return_pct), pnl_color(t.return_pct)),
                    ]
                        .into_iter()
                        .map(|(label, value, color)| {
                            view! {
                                <div class="card">
                                    <div class="stat-label">{label}</div>
                                    <div class="stat-value" style:color=color>{value}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="card holdings-card">
                <div class="section-title">
                    "Holdings"
                    {move || if sig.loading.get() { " (Loading...)" } else { "" }}
                </div>
                {move || {
                    let holdings = sig.holdings.get();
                    if holdings.is_empty() {
                        let message = if sig.loading.get() {
                            "Loading portfolio..."
                        } else {
                            "No holdings yet. Add your first stock!"
                        };
                        return view! { <div class="empty-state">{message}</div> }.into_any();
                    }
                    view! {
                        <div class="holdings-table">
                            <div class="holdings-table__header">
                                {HOLDING_COLUMNS.iter().map(|h| view! { <span>{*h}</span> }).collect_view()}
                            </div>
                            {holdings
                                .into_iter()
                                .map(|h| {
                                    let up = h.is_up();
                                    let pnl = h.pnl();
                                    let symbol = h.symbol.clone();
                                    view! {
                                        <div class="holdings-table__row">
                                            <span class="holdings-table__symbol">{h.symbol.clone()}</span>
                                            <span class="mono">{format_inr(h.qty, 3)}</span>
                                            <span class="mono">{rupees(h.avg, 3)}</span>
                                            <span class="mono">{rupees(h.ltp, 3)}</span>
                                            <span class="mono">{rupees(h.value(), 0)}</span>
                                            <span class="mono" style:color=if up { "var(--green)" } else { "var(--red)" }>
                                                {format!("{}{}", if up { "+" } else { "" }, rupees(pnl.abs(), 0))}
                                            </span>
                                            <span class="badge" class:badge--up=up class:badge--down=!up>
                                                {format!("{}{:.2}%", if up { "+" } else { "" }, h.pnl_pct())}
                                            </span>
                                            <div class="holdings-table__weight">
                                                <div class="holdings-table__weight-bar">
                                                    <div style:width=format!("{}%", h.weight)></div>
                                                </div>
                                                <span class="mono">{percent_label(h.weight)}</span>
                                            </div>
                                            <button
                                                class="btn btn--icon"
                                                title="Remove holding"
                                                on:click=move |_| on_remove.run(symbol.clone())
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </div>

            <div class="grid-3">
                <div class="card risk-card">
                    <div class="section-title">"Portfolio Risk"</div>
                    <RiskMeter value=risk_value/>
                    <div class="risk-card__bars">
                        {move || {
                            sig.risk
                                .with(risk_bars)
                                .into_iter()
                                .map(|bar| {
                                    view! {
                                        <div class="score-bar">
                                            <div class="score-bar__label">
                                                <span>{bar.label}</span>
                                                <span>{format!("{}/100", whole_label(bar.score))}</span>
                                            </div>
                                            <div class="score-bar__track">
                                                <div
                                                    class="score-bar__fill"
                                                    style:width=format!("{}%", bar.width)
                                                    style:background=bar.tone
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="card">
                    <div class="section-title">"Summary"</div>
                    <div class="summary-list">
                        <div class="summary-list__row">
                            <span>"Total Holdings"</span>
                            <span class="mono">{move || sig.holdings.with(Vec::len)}</span>
                        </div>
                        <div class="summary-list__row">
                            <span>"Portfolio Value"</span>
                            <span class="mono">{move || rupees(summary.get().value, 0)}</span>
                        </div>
                        <div class="summary-list__row">
                            <span>"Total Invested"</span>
                            <span class="mono">{move || rupees(summary.get().invested, 0)}</span>
                        </div>
                        <div class="divider"></div>
                        <div class="summary-list__row">
                            <span>"Unrealized P&L"</span>
                            <span
                                class="mono"
                                style:color=move || {
                                    let pnl = summary.get().pnl;
                                    if pnl > 0.0 {
                                        "var(--green)"
                                    } else if pnl < 0.0 {
                                        "var(--red)"
                                    } else {
                                        "var(--text-secondary)"
                                    }
                                }
                            >
                                {move || {
                                    let pnl = summary.get().pnl;
                                    format!("{}{}", signed_prefix(pnl), format_inr(pnl, 0))
                                }}
                            </span>
                        </div>
                    </div>
                </div>

                <div class="card">
                    <div class="section-title">"Status"</div>
                    <div class="status-note">
                        <span class="status-note__tag">"INFO"</span>
                        <p>"Portfolio syncing with backend in real-time."</p>
                    </div>
                </div>
            </div>

            <Show when=move || show_add.get()>
                <div class="dialog-backdrop" on:click=move |_| show_add.set(false)>
                    <div class="dialog dialog--add-stock" on:click=move |ev| ev.stop_propagation()>
                        <div class="dialog__header">
                            <h2>"Add Stock to Portfolio"</h2>
                            <button class="dialog__close" on:click=move |_| show_add.set(false)>"✕"</button>
                        </div>
                        <form on:submit=submit_add>
                            <label class="dialog__label">
                                "Symbol"
                                <input
                                    class="dialog__input"
                                    placeholder="e.g. BAJAJFIN"
                                    prop:value=move || draft.get().symbol
                                    on:input=move |ev| draft.update(|d| d.symbol = event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Quantity"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    placeholder="0"
                                    prop:value=move || draft.get().qty
                                    on:input=move |ev| draft.update(|d| d.qty = event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Buy Price (₹)"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    step="0.01"
                                    placeholder="0.00"
                                    prop:value=move || draft.get().price
                                    on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                                />
                            </label>
                            <div class="dialog__actions">
                                <button class="btn btn--ghost" type="button" on:click=move |_| show_add.set(false)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" type="submit">"Add Stock"</button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
