//! Circular risk gauge with a LOW / MODERATE / HIGH label.

use leptos::prelude::*;

use crate::util::format::whole_label;
use crate::util::rings::{RISK_RING_RADIUS, RiskLevel, circumference, dash_offset};

#[component]
pub fn RiskMeter(#[prop(into)] value: Signal<f64>) -> impl IntoView {
    let dash = circumference(RISK_RING_RADIUS);
    let level = move || RiskLevel::from_value(value.get());
    let color = move || level().tone().css_var();

    view! {
        <div class="risk-meter">
            <div class="risk-meter__ring">
                <svg viewBox="0 0 100 100" width="110" height="110">
                    <circle cx="50" cy="50" r="40" fill="none" stroke="var(--border)" stroke-width="10"></circle>
                    <circle
                        class="risk-meter__arc"
                        cx="50"
                        cy="50"
                        r="40"
                        fill="none"
                        stroke=color
                        stroke-width="10"
                        stroke-linecap="round"
                        stroke-dasharray=dash
                        stroke-dashoffset=move || dash_offset(RISK_RING_RADIUS, value.get())
                        transform="rotate(-90 50 50)"
                    ></circle>
                </svg>
                <div class="risk-meter__inner">
                    <div class="risk-meter__value" style:color=color>
                        {move || whole_label(value.get())}
                    </div>
                    <div class="risk-meter__label">{move || level().label()}</div>
                </div>
            </div>
        </div>
    }
}
