//! "New Alert" dialog.

use leptos::prelude::*;

use crate::net::types::{AlertDirection, AlertDraft};
use crate::state::alerts::AlertForm;

/// Collects symbol, threshold, and direction. Submits only a complete form.
#[component]
pub fn AlertModal(on_close: Callback<()>, on_create: Callback<AlertDraft>) -> impl IntoView {
    let form = RwSignal::new(AlertForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(draft) = form.get_untracked().to_draft() {
            on_create.run(draft);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--alert" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Alert"</h2>
                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Symbol"
                        <input
                            class="dialog__input"
                            placeholder="e.g. RELIANCE"
                            prop:value=move || form.get().symbol
                            on:input=move |ev| form.update(|f| f.symbol = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Threshold"
                        <input
                            class="dialog__input"
                            type="number"
                            step="0.01"
                            prop:value=move || form.get().threshold
                            on:input=move |ev| form.update(|f| f.threshold = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Direction"
                        <select
                            class="dialog__input"
                            prop:value=move || form.get().direction.as_str()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.direction = AlertDirection::from_form_value(&value));
                            }
                        >
                            <option value="above">"Above"</option>
                            <option value="below">"Below"</option>
                        </select>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Create"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
