use leptos::html::Div;
use leptos::prelude::*;
use paper_chat::{ChatMessage, RenderedBlock, render_reply};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::input::ChatInput;
use crate::state::AppState;

/// Main chat area with message history, loading indicator, and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="chat-area">
            // Reopen button, only once the sidebar has fully closed
            <Show when=move || state.sidebar.get().is_fully_closed()>
                <button
                    class="open-sidebar-btn"
                    title="Open Sidebar"
                    on:click=move |_| state.open_sidebar()
                >
                    "Files"
                </button>
            </Show>

            <div class="content-area">
                <Show
                    when=move || !state.conversation.with(|c| c.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <h1 class="brand-title">"PaperAI"</h1>
                        </div>
                    }
                >
                    <MessageList />
                </Show>
            </div>

            <ChatInput />
        </main>
    }
}

/// Scrollable list of conversation entries. Follows the newest entry.
#[component]
fn MessageList() -> impl IntoView {
    let state = expect_context::<AppState>();
    let end_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        let _revision = state.conversation.with(|c| c.revision());
        if let Some(end) = end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    view! {
        <div class="messages-container">
            <div class="messages">
                <For
                    each=move || {
                        state.conversation.with(|c| {
                            c.messages().iter().cloned().enumerate().collect::<Vec<_>>()
                        })
                    }
                    key=|(idx, _)| *idx
                    let:entry
                >
                    <MessageBubble message=entry.1 />
                </For>
                <Show when=move || state.conversation.with(|c| c.is_loading())>
                    <div class="message assistant">
                        <div class="thinking-indicator">"PaperAI thinking..."</div>
                    </div>
                </Show>
                <div node_ref=end_ref />
            </div>
        </div>
    }
}

/// A single conversation entry.
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    if message.is_user() {
        return view! {
            <div class="message user">
                <div class="bubble">{message.content.plain_text()}</div>
            </div>
        }
        .into_any();
    }

    let state = expect_context::<AppState>();
    let fallback_bytes = state.config.with_value(|c| c.markdown_fallback_bytes);
    let blocks = render_reply(&message.content, fallback_bytes)
        .into_iter()
        .map(|block| match block {
            RenderedBlock::Html(html) => view! { <div class="markdown" inner_html=html /> }.into_any(),
            RenderedBlock::Plain(text) => view! { <div class="plain">{text}</div> }.into_any(),
            RenderedBlock::Thinking(html) => view! {
                <details class="thinking">
                    <summary>"Thinking"</summary>
                    <div class="markdown" inner_html=html />
                </details>
            }
            .into_any(),
        })
        .collect_view();

    view! { <div class="message assistant">{blocks}</div> }.into_any()
}
