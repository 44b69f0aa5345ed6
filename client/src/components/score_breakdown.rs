//! Labelled score bars for the prediction breakdown card.

use leptos::prelude::*;

use crate::state::prediction::ScoreRow;
use crate::util::format::whole_label;
use crate::util::rings::bar_percent;

#[component]
pub fn ScoreBreakdown(#[prop(into)] rows: Signal<Vec<ScoreRow>>) -> impl IntoView {
    view! {
        <div class="score-breakdown">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|row| {
                        let fill = format!("linear-gradient(90deg, {}88, {})", row.color, row.color);
                        view! {
                            <div class="score-item">
                                <div class="score-item__header">
                                    <span class="score-item__icon">{row.icon}</span>
                                    <span class="score-item__label">{row.label}</span>
                                    <span class="score-item__value" style:color=row.color>
                                        {format!("{}/100", whole_label(row.value))}
                                    </span>
                                </div>
                                <div class="score-bar__track">
                                    <div
                                        class="score-bar__fill"
                                        style:width=format!("{}%", bar_percent(row.value))
                                        style:background=fill
                                    ></div>
                                </div>
                                <div class="score-item__note">{row.note}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
