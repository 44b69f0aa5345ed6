//! Top bar: menu toggle, breadcrumb, clock, live badge, and profile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `AuthState` for the avatar and dropdown. Sign Out clears the stored
//! session and routes to `/login`.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::toaster::toast_success;
use crate::state::auth::{AuthState, display_email, display_name, profile_initial};
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::clock::now;
use crate::util::clock::{ClockParts, format_clock, format_date};

/// Page key for a route path: first segment, `dashboard` for `/`.
pub fn page_key(pathname: &str) -> String {
    let segment = pathname.trim_matches('/').split('/').next().unwrap_or_default();
    if segment.is_empty() { "dashboard".to_owned() } else { segment.to_owned() }
}

/// Breadcrumb label for a page key, falling back to the key itself.
pub fn page_label(key: &str) -> String {
    match key {
        "dashboard" => "Dashboard",
        "prediction" => "AI Prediction Engine",
        "portfolio" => "Portfolio Manager",
        "advisor" => "AI Strategy Advisor",
        "alerts" => "Price Alerts",
        "education" => "Education",
        other => other,
    }
    .to_owned()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();

    let clock = RwSignal::new(None::<ClockParts>);
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            while alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                clock.set(now());
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let crumb = move || page_label(&page_key(&location.pathname.get()));
    let initial = move || profile_initial(auth.get().user.as_ref()).to_string();
    let name = move || display_name(auth.get().user.as_ref());
    let email = move || display_email(auth.get().user.as_ref());
    let menu_open = move || ui.with(|u| u.profile_menu_open);

    let on_sign_out = move |_| {
        auth.update(AuthState::end_session);
        ui.update(|u| u.profile_menu_open = false);
        toast_success(ui, "Logged out successfully");
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <div class="navbar__left">
                <button class="navbar__menu" aria-label="Toggle menu" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class="navbar__breadcrumb">
                    <span class="navbar__crumb-root">"TradeVision"</span>
                    <span class="navbar__crumb-sep">"›"</span>
                    <span class="navbar__crumb-current">{crumb}</span>
                </div>
            </div>

            <div class="navbar__right">
                <div class="navbar__clock">
                    <span class="navbar__clock-time">{move || clock.get().map(format_clock).unwrap_or_default()}</span>
                    <span class="navbar__clock-date">{move || clock.get().map(format_date).unwrap_or_default()}</span>
                </div>

                <div class="navbar__live">
                    <span class="navbar__live-pulse"></span>
                    <span>"LIVE"</span>
                </div>

                <div class="navbar__profile">
                    <button class="navbar__profile-btn" on:click=move |_| ui.update(|u| u.profile_menu_open = !u.profile_menu_open)>
                        <span class="navbar__avatar">{initial}</span>
                        <span class="navbar__name">{name}</span>
                        <span class="navbar__chevron">"▾"</span>
                    </button>
                    <div class="navbar__dropdown" class:navbar__dropdown--open=menu_open>
                        <div class="navbar__dropdown-email">{email}</div>
                        <button class="navbar__dropdown-item" on:click=on_sign_out>
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
