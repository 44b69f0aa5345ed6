//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts the form-encoded credentials, stores the returned bearer token and a
//! profile built from the email, then routes to the dashboard. Also hosts the
//! shared card shell used by the register page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;

pub const DEMO_EMAIL: &str = "demo@demo.com";
pub const DEMO_PASSWORD: &str = "demo123";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_SUCCESS: &str = "Successfully logged in!";

/// Profile stored after a successful sign-in.
pub fn login_profile(email: &str) -> UserProfile {
    UserProfile { name: email.to_owned(), email: email.to_owned() }
}

/// Branded card wrapping both auth forms.
#[component]
pub fn AuthCard(tag: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-page__bg">
                <div class="auth-page__orb auth-page__orb--one"></div>
                <div class="auth-page__orb auth-page__orb--two"></div>
                <div class="auth-page__grid"></div>
            </div>
            <div class="auth-card">
                <div class="auth-card__logo">
                    <div class="auth-card__logo-icon">
                        <svg width="32" height="32" viewBox="0 0 32 32" fill="none">
                            <path
                                d="M4 24L10 16L16 20L22 10L28 14"
                                stroke="var(--cyan)"
                                stroke-width="2.5"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            ></path>
                            <circle cx="28" cy="14" r="3" fill="var(--cyan)"></circle>
                        </svg>
                    </div>
                    <div>
                        <div class="auth-card__logo-name">"TradeVision"</div>
                        <div class="auth-card__logo-tag">{tag}</div>
                    </div>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(DEMO_EMAIL.to_owned());
    let password = RwSignal::new(DEMO_PASSWORD.to_owned());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                log::info!("sending login request for {email_value}");
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => {
                        auth.update(|a| a.start_session(login_profile(&email_value), &resp.access_token));
                        crate::components::toaster::toast_success(ui, LOGIN_SUCCESS);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(e.user_message(LOGIN_FAILED));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <AuthCard tag="AI Financial Intelligence">
            <div class="auth-card__header">
                <h1>"Welcome Back"</h1>
                <p>"Access your AI-powered trading dashboard"</p>
            </div>
            <Show when=move || !error.get().is_empty()>
                <div class="auth-card__error">{move || error.get()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <label class="input-group">
                    "Email Address"
                    <input
                        class="input"
                        type="email"
                        placeholder="trader@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="input-group">
                    "Password"
                    <input
                        class="input"
                        type="password"
                        placeholder="••••••••"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Authenticating..." } else { "Sign In →" }}
                </button>
            </form>
            <div class="auth-card__footer">
                "Don't have an account? "
                <a class="auth-card__link" href="/register">"Create Account"</a>
            </div>
            <div class="auth-card__hint">
                <span>"⚡ Demo credentials:"</span>
                {format!(" {DEMO_EMAIL} / {DEMO_PASSWORD}")}
            </div>
        </AuthCard>
    }
}
