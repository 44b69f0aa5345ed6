//! Collapsible navigation sidebar with a live-market mini table.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::market::SIDEBAR_MARKET;
use crate::state::ui::UiState;

/// Navigation entry: route path, label, icon.
pub const NAV_ITEMS: [(&str, &str, &str); 6] = [
    ("/dashboard", "Dashboard", "⬡"),
    ("/prediction", "AI Prediction", "◈"),
    ("/portfolio", "Portfolio", "◉"),
    ("/advisor", "AI Advisor", "◎"),
    ("/alerts", "Alerts", "⚠"),
    ("/education", "Education", "✎"),
];

/// Whether `item_path` is the page at `pathname`. `/` is the dashboard.
pub fn is_active(item_path: &str, pathname: &str) -> bool {
    let current = pathname.trim_end_matches('/');
    let current = if current.is_empty() { "/dashboard" } else { current };
    current == item_path
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let open = move || ui.with(|u| u.sidebar_open);

    view! {
        <aside class="sidebar" class:sidebar--open=open class:sidebar--closed=move || !open()>
            <div class="sidebar__header">
                <div class="sidebar__logo">
                    <svg width="22" height="22" viewBox="0 0 32 32" fill="none">
                        <path
                            d="M4 24L10 16L16 20L22 10L28 14"
                            stroke="var(--cyan)"
                            stroke-width="2.5"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        ></path>
                        <circle cx="28" cy="14" r="3" fill="var(--cyan)"></circle>
                    </svg>
                    <Show when=open>
                        <div>
                            <div class="sidebar__logo-name">"TradeVision"</div>
                            <div class="sidebar__logo-sub">"AI Platform"</div>
                        </div>
                    </Show>
                </div>
                <button class="sidebar__toggle" aria-label="Toggle sidebar" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                    {move || if open() { "◁" } else { "▷" }}
                </button>
            </div>

            <nav class="sidebar__nav">
                <div class="sidebar__section-label">{move || if open() { "Navigation" } else { "" }}</div>
                {NAV_ITEMS
                    .into_iter()
                    .map(|(path, label, icon)| {
                        let active = move || is_active(path, &pathname.get());
                        view! {
                            <a
                                href=path
                                class="sidebar__item"
                                class:sidebar__item--active=active
                                title=move || if open() { "" } else { label }
                            >
                                <span class="sidebar__icon">{icon}</span>
                                <Show when=open>
                                    <span class="sidebar__label">{label}</span>
                                </Show>
                                <Show when=move || open() && active()>
                                    <span class="sidebar__active-dot"></span>
                                </Show>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <Show when=open>
                <div class="sidebar__market">
                    <div class="sidebar__section-label">"Live Market"</div>
                    {SIDEBAR_MARKET
                        .into_iter()
                        .map(|m| {
                            view! {
                                <div class="sidebar__market-row">
                                    <div class="sidebar__market-symbol">{m.symbol}</div>
                                    <div class="sidebar__market-right">
                                        <span class="sidebar__market-value">{m.price}</span>
                                        <span class="sidebar__market-change" class:up=m.up class:down=!m.up>
                                            {m.change}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="sidebar__status">
                        <span class="status-dot"></span>
                        "Markets Open"
                    </div>
                </div>
            </Show>
        </aside>
    }
}
