//! Dismissible error banner.

use leptos::prelude::*;

#[component]
pub fn AlertBanner(
    #[prop(into)] message: Signal<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="alert-banner" role="alert">
            <span class="alert-banner__message">{move || message.get()}</span>
            {on_close.map(|cb| {
                view! {
                    <button class="alert-banner__close" aria-label="Close" on:click=move |_| cb.run(())>
                        "✕"
                    </button>
                }
            })}
        </div>
    }
}
