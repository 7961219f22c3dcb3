use leptos::ev;
use leptos::prelude::*;
use paper_chat::{InputSizing, KeyAction, key_action};
use web_sys::HtmlTextAreaElement;

use crate::state::AppState;

/// Chat input with the selected-files badge, an auto-growing textarea,
/// the deep-think toggle and the send button.
#[component]
pub fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let sizing = state.config.with_value(|c| InputSizing::from_config(c));
    let (height, set_height) = signal(sizing.reset());

    let send = move || {
        if state.send_message() {
            set_height.set(sizing.reset());
        }
    };

    let on_input = move |ev: ev::Event| {
        let el = event_target::<HtmlTextAreaElement>(&ev);
        state.set_draft.update(|d| d.on_change(el.value()));
        // Collapse first so scroll_height measures the content, not the box.
        if let Err(e) = web_sys::HtmlElement::style(&el).set_property("height", "auto") {
            log::debug!("Failed to reset input height: {e:?}");
        }
        set_height.set(sizing.fit(el.scroll_height().max(0) as u32));
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if key_action(&ev.key(), ev.shift_key()) == KeyAction::Submit {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-box">
                <SelectedFilesBadge />

                <div class="input-row">
                    <textarea
                        rows="1"
                        placeholder="Ask anything..."
                        prop:value=move || state.draft.with(|d| d.text().to_string())
                        style:height=move || height.get().css_height()
                        style:overflow-y=move || height.get().overflow.as_css()
                        on:input=on_input
                        on:keydown=on_keydown
                    />
                </div>

                <div class="input-actions">
                    <DeepThinkButton />
                    <button
                        class="send-btn"
                        on:click=move |_| send()
                        disabled=move || !state.can_send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Count of attached knowledge files; hidden when none are selected.
#[component]
fn SelectedFilesBadge() -> impl IntoView {
    let state = expect_context::<AppState>();

    move || {
        state.selection.with(|s| s.badge_label()).map(|label| {
            view! { <div class="files-badge">{label}</div> }
        })
    }
}

#[component]
fn DeepThinkButton() -> impl IntoView {
    let state = expect_context::<AppState>();
    let active = move || state.deep_think.get().is_active();

    view! {
        <button
            class="deep-think-btn"
            class:active=active
            aria-pressed=move || active().to_string()
            on:click=move |_| state.set_deep_think.update(|d| d.toggle())
        >
            "Deep Think"
        </button>
    }
}
