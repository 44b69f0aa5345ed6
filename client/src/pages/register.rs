//! Account creation page: register, then sign in with the same credentials.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::pages::login::AuthCard;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const DEFAULT_NAME: &str = "Demo User";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterForm {
    /// Local checks before any request goes out.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.password != self.confirm {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(())
    }

    /// Profile stored after the follow-up sign-in.
    pub fn profile(&self) -> UserProfile {
        let name = self.name.trim();
        UserProfile {
            name: if name.is_empty() { DEFAULT_NAME.to_owned() } else { name.to_owned() },
            email: self.email.trim().to_owned(),
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = form.get();
        if let Err(msg) = current.check() {
            error.set(msg.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let email = current.email.trim().to_owned();
                let result = match crate::net::api::register(&email, &current.password).await {
                    Ok(_) => crate::net::api::login(&email, &current.password).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(resp) => {
                        auth.update(|a| a.start_session(current.profile(), &resp.access_token));
                        crate::components::toaster::toast_success(ui, crate::pages::login::LOGIN_SUCCESS);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        error.set(e.user_message(REGISTER_FAILED));
                    }
                }
                busy.set(false);
            });
        }
    };

    view! {
        <AuthCard tag="Create your account">
            <div class="auth-card__header">
                <h1>"Get Started"</h1>
                <p>"Join thousands of AI-powered traders"</p>
            </div>
            <Show when=move || !error.get().is_empty()>
                <div class="auth-card__error">{move || error.get()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <label class="input-group">
                    "Full Name"
                    <input
                        class="input"
                        type="text"
                        placeholder="John Trader"
                        required
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="input-group">
                    "Email Address"
                    <input
                        class="input"
                        type="email"
                        placeholder="trader@example.com"
                        required
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="input-group">
                    "Password"
                    <input
                        class="input"
                        type="password"
                        placeholder="Min 8 characters"
                        required
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <label class="input-group">
                    "Confirm Password"
                    <input
                        class="input"
                        type="password"
                        placeholder="Re-enter password"
                        required
                        prop:value=move || form.get().confirm
                        on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating Account..." } else { "Create Account →" }}
                </button>
            </form>
            <div class="auth-card__footer">
                "Already have an account? "
                <a class="auth-card__link" href="/login">"Sign In"</a>
            </div>
        </AuthCard>
    }
}
