//! Circular confidence gauge with a HIGH / MED / LOW grade.

use leptos::prelude::*;

use crate::util::format::whole_label;
use crate::util::rings::{
    CONFIDENCE_RING_RADIUS, circumference, confidence_grade, confidence_tone, dash_offset,
};

/// Confidence ring. `color` overrides the threshold colour when set.
#[component]
pub fn ConfidenceMeter(
    #[prop(into)] value: Signal<f64>,
    #[prop(into, optional)] color: MaybeProp<&'static str>,
    #[prop(default = "AI Confidence")] label: &'static str,
) -> impl IntoView {
    let dash = circumference(CONFIDENCE_RING_RADIUS);
    let col = move || color.get().unwrap_or_else(|| confidence_tone(value.get()).css_var());

    view! {
        <div class="conf-meter">
            <div class="conf-meter__ring">
                <svg viewBox="0 0 120 120" width="140" height="140">
                    <circle cx="60" cy="60" r="54" fill="none" stroke="var(--border)" stroke-width="8"></circle>
                    <circle
                        class="conf-meter__arc"
                        cx="60"
                        cy="60"
                        r="54"
                        fill="none"
                        stroke=col
                        stroke-width="8"
                        stroke-linecap="round"
                        stroke-dasharray=dash
                        stroke-dashoffset=move || dash_offset(CONFIDENCE_RING_RADIUS, value.get())
                        transform="rotate(-90 60 60)"
                    ></circle>
                    <circle cx="60" cy="60" r="46" fill="none" stroke=col stroke-width="0.5" opacity="0.3"></circle>
                </svg>
                <div class="conf-meter__inner">
                    <div class="conf-meter__value" style:color=col>
                        {move || whole_label(value.get())}
                        <span>"%"</span>
                    </div>
                    <div class="conf-meter__grade">{move || confidence_grade(value.get())}</div>
                </div>
            </div>
            <div class="conf-meter__label">{label}</div>
        </div>
    }
}
