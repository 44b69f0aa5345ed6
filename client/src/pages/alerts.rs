//! Price alerts: list, create, delete.
//!
//! Alerts load once per mount. Errors surface in a dismissible banner rather
//! than toasts. A 401 trips the page gate; later creates and deletes are not
//! sent and show the session-expired banner instead.

use leptos::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::alert_modal::AlertModal;
use crate::net::types::{Alert, AlertDraft};
use crate::state::alerts::{EMPTY_LIST, alert_label, blocked_action};
use crate::util::poll::PollGate;

#[component]
pub fn AlertsPage() -> impl IntoView {
    let alerts = RwSignal::new(Vec::<Alert>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let modal_open = RwSignal::new(false);
    let gate = PollGate::new();

    let load_gate = gate.clone();
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let gate = load_gate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::get_alerts().await;
                gate.note(&result);
                match result {
                    Ok(loaded) => alerts.set(loaded),
                    Err(e) => {
                        log::warn!("alerts fetch failed: {e}");
                        error.set(Some(crate::state::alerts::LOAD_FAILED.to_owned()));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &load_gate;
    });

    let delete_gate = gate.clone();
    let on_delete = move |id: i64| {
        if let Some(message) = blocked_action(delete_gate.is_open()) {
            #[cfg(feature = "hydrate")]
            log::warn!("delete alert {id} skipped: session expired");
            error.set(Some(message.to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let gate = delete_gate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::alerts::{DELETE_FAILED, action_error, remove_alert};

                let result = crate::net::api::delete_alert(id).await;
                gate.note(&result);
                match result {
                    Ok(_) => alerts.update(|list| remove_alert(list, id)),
                    Err(e) => {
                        log::warn!("delete alert {id} failed: {e}");
                        error.set(Some(action_error(&e, DELETE_FAILED).to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_create = Callback::new(move |draft: AlertDraft| {
        if let Some(message) = blocked_action(gate.is_open()) {
            #[cfg(feature = "hydrate")]
            log::warn!("create alert for {} skipped: session expired", draft.symbol);
            error.set(Some(message.to_owned()));
            modal_open.set(false);
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let gate = gate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::alerts::{CREATE_FAILED, action_error};

                let result = crate::net::api::create_alert(&draft).await;
                gate.note(&result);
                match result {
                    Ok(created) => {
                        alerts.update(|list| list.push(created));
                        modal_open.set(false);
                    }
                    Err(e) => {
                        log::warn!("create alert for {} failed: {e}", draft.symbol);
                        error.set(Some(action_error(&e, CREATE_FAILED).to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    });

    let banner = Signal::derive(move || error.get().unwrap_or_default());

    view! {
        <div class="alerts-page">
            <div class="page-header page-header--split">
                <div>
                    <h1>"Price Alerts"</h1>
                    <p>"Get notified when a stock crosses your threshold"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| modal_open.set(true)>"New Alert"</button>
            </div>

            <Show when=move || error.with(Option::is_some)>
                <AlertBanner message=banner on_close=Callback::new(move |()| error.set(None))/>
            </Show>

            {move || {
                if loading.get() {
                    return view! { <div class="empty-state">"Loading..."</div> }.into_any();
                }
                let list = alerts.get();
                if list.is_empty() {
                    return view! { <div class="empty-state">{EMPTY_LIST}</div> }.into_any();
                }
                let on_delete = on_delete.clone();
                view! {
                    <div class="alerts-list">
                        {list
                            .into_iter()
                            .map(|a| {
                                let id = a.id;
                                let on_delete = on_delete.clone();
                                view! {
                                    <div class="alert-row">
                                        <span class="alert-row__label">{alert_label(&a)}</span>
                                        <button class="btn btn--icon" title="Delete alert" on:click=move |_| on_delete(id)>
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

            <Show when=move || modal_open.get()>
                <AlertModal on_close=Callback::new(move |()| modal_open.set(false)) on_create=on_create/>
            </Show>
        </div>
    }
}
