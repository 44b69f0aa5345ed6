//! Advisor conversation view with markdown replies and a prompt input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatState` from context. Sending is owned by the advisor page,
//! which performs the request and appends the reply.

use leptos::prelude::*;

use crate::state::chat::{ChatRole, ChatState};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatWidget(input: RwSignal<String>, on_send: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    let loading = move || chat.get().loading;
    let can_send = move || !loading() && !input.get().trim().is_empty();

    view! {
        <div class="chat-widget">
            <div class="chat-widget__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            let is_assistant = msg.role == ChatRole::Assistant;
                            view! {
                                <div
                                    class="chat-msg"
                                    class:chat-msg--assistant=is_assistant
                                    class:chat-msg--user=!is_assistant
                                >
                                    <div class="chat-msg__bubble">
                                        {is_assistant.then(|| view! { <div class="chat-msg__icon">"◈"</div> })}
                                        {if is_assistant {
                                            let rendered = render_markdown_html(&msg.content);
                                            view! { <div class="chat-msg__text chat-msg__markdown" inner_html=rendered></div> }
                                                .into_any()
                                        } else {
                                            view! { <div class="chat-msg__text">{msg.content}</div> }.into_any()
                                        }}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Show when=loading>
                    <div class="chat-msg chat-msg--assistant">
                        <div class="chat-msg__bubble">
                            <div class="chat-msg__icon">"◈"</div>
                            <div class="chat-msg__typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chat-widget__input-row">
                <input
                    class="input"
                    type="text"
                    placeholder="Ask AI about market strategy, risk, stocks..."
                    disabled=loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-widget__send" on:click=move |_| on_send.run(()) disabled=move || !can_send()>
                    {move || if loading() { view! { <span class="spinner"></span> }.into_any() } else { "▶".into_any() }}
                </button>
            </div>
        </div>
    }
}
