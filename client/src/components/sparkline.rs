//! Tiny bar sparkline used in the market overview.

use leptos::prelude::*;

use crate::util::format::round_to;
use crate::state::market::SparkBar;

#[component]
pub fn Sparkline(#[prop(into)] bars: Signal<Vec<SparkBar>>, color: &'static str) -> impl IntoView {
    view! {
        <div class="sparkline">
            {move || {
                bars.get()
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <div
                                class="sparkline__bar"
                                style:height=format!("{}%", round_to(bar.height_pct, 2))
                                style:opacity=round_to(bar.opacity, 3).to_string()
                                style:background=color
                            ></div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
