//! AI strategy advisor chat.
//!
//! The transcript lives in the `ChatState` context so it survives navigation.
//! When the advisor endpoint fails, a canned analysis keyed on the question is
//! appended after an apology.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::state::chat::{ChatState, SUGGESTIONS};

/// Sources listed on the "Context Used" card: icon, label, detail.
const CONTEXT_SOURCES: [(&str, &str, &str); 4] = [
    ("◈", "AI Predictions", "5 stocks"),
    ("◉", "Portfolio Data", "5 holdings"),
    ("📰", "News Sentiment", "42 articles"),
    ("⬡", "Risk Scores", "Live"),
];

#[component]
pub fn AdvisorPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());

    let send = Callback::new(move |()| {
        let text = input.get_untracked();
        let Some(query) = chat.try_update(|c| c.begin_send(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::advisor_chat(&query).await {
                Ok(reply) => chat.update(|c| c.finish_reply(reply.response)),
                Err(e) => {
                    log::warn!("advisor chat failed: {e}");
                    chat.update(|c| c.finish_offline(&query));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    });

    view! {
        <div class="advisor-page">
            <div class="page-header">
                <h1>"AI Strategy Advisor"</h1>
                <p>"Powered by portfolio data + predictions + market sentiment"</p>
            </div>

            <div class="advisor-layout">
                <div class="advisor-sidebar">
                    <div class="card">
                        <div class="section-title">"Quick Queries"</div>
                        <div class="suggestion-list">
                            {SUGGESTIONS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <button class="suggestion-btn" on:click=move |_| input.set((*s).to_owned())>
                                            <span class="suggestion-btn__arrow">"▸"</span>
                                            {*s}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <div class="section-title">"Context Used"</div>
                        <div class="context-list">
                            {CONTEXT_SOURCES
                                .iter()
                                .map(|(icon, label, detail)| {
                                    view! {
                                        <div class="context-list__item">
                                            <span class="context-list__icon">{*icon}</span>
                                            <div class="context-list__text">
                                                <div class="context-list__label">{*label}</div>
                                                <div class="context-list__detail">{*detail}</div>
                                            </div>
                                            <span class="context-list__live"></span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="card advisor-chat">
                    <div class="advisor-chat__header">
                        <div class="advisor-chat__identity">
                            <div class="advisor-chat__avatar">"◎"</div>
                            <div>
                                <div class="advisor-chat__name">"TradeVision AI Advisor"</div>
                                <div class="advisor-chat__status">"Online · Context loaded"</div>
                            </div>
                        </div>
                        <button class="btn btn--ghost btn--small" on:click=move |_| chat.update(ChatState::clear)>
                            "Clear"
                        </button>
                    </div>
                    <ChatWidget input=input on_send=send/>
                </div>
            </div>
        </div>
    }
}
