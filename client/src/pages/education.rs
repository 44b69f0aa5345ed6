//! Learning modules served by the backend.

use leptos::prelude::*;

use crate::net::types::EducationContent;

pub const LOADING_MODULES: &str = "Loading modules…";
pub const MODULES_FAILED: &str = "Could not load modules.";

#[component]
pub fn EducationPage() -> impl IntoView {
    let content = RwSignal::new(None::<EducationContent>);
    let failed = RwSignal::new(false);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_education_content().await {
                Ok(loaded) => content.set(Some(loaded)),
                Err(e) => {
                    log::warn!("education content fetch failed: {e}");
                    failed.set(true);
                }
            }
        });
    });

    view! {
        <div class="education-page">
            <div class="page-header">
                <h1>"Education"</h1>
                <p>"Trading concepts, indicators, and risk basics"</p>
            </div>
            <div class="card">
                {move || match content.get() {
                    Some(loaded) => {
                        view! {
                            <ul class="module-list">
                                {loaded
                                    .modules
                                    .iter()
                                    .map(|m| view! { <li class="module-list__item">{m.display_title().to_owned()}</li> })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                    None => {
                        let message = if failed.get() { MODULES_FAILED } else { LOADING_MODULES };
                        view! { <p class="empty-state">{message}</p> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
