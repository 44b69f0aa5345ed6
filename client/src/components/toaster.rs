//! Stacked success/error toasts.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// Queue a toast on `ui` and schedule its dismissal.
pub fn show_toast(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let id = ui.try_update(|u| u.push_toast(kind, message));

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        let lifetime = crate::config::TOAST_LIFETIME.as_millis();
        let millis = u32::try_from(lifetime).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            ui.try_update(|u| u.dismiss_toast(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn toast_success(ui: RwSignal<UiState>, message: impl Into<String>) {
    show_toast(ui, ToastKind::Success, message);
}

pub fn toast_error(ui: RwSignal<UiState>, message: impl Into<String>) {
    show_toast(ui, ToastKind::Error, message);
}

#[component]
pub fn Toaster() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toaster" aria-live="polite">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.class() on:click=move |_| ui.update(|u| u.dismiss_toast(id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
