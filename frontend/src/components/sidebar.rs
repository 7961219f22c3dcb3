use leptos::ev;
use leptos::prelude::*;
use paper_chat::KnowledgeSelection;

use crate::state::AppState;

/// Name of the CSS keyframes played while the sidebar closes.
const EXIT_ANIMATION: &str = "sidebar-slide-out";

/// Knowledge-file picker. Reports every selection change through
/// `on_selection_change` and asks to close through `on_close`.
#[component]
pub fn KnowledgeSidebar(
    #[prop(into)] selected: Signal<KnowledgeSelection>,
    #[prop(into)] on_selection_change: Callback<Vec<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    // Only the sidebar's own exit animation completes the close; animations
    // of its children bubble here too.
    let on_animation_end = move |ev: ev::AnimationEvent| {
        if ev.animation_name() == EXIT_ANIMATION {
            state.sidebar_exited();
        }
    };

    view! {
        <Show when=move || state.sidebar.get().is_mounted()>
            <aside
                class="sidebar"
                class:closing=move || state.sidebar.get().is_closing()
                on:animationend=on_animation_end
            >
                <div class="sidebar-header">
                    <h2>"Knowledge"</h2>
                    <button class="close-sidebar-btn" title="Close Sidebar" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>

                {move || {
                    state.files_error.get().map(|err| {
                        view! { <div class="error-banner">{err}</div> }
                    })
                }}

                <div class="file-list">
                    <Show
                        when=move || !state.knowledge_files.with(|f| f.is_empty())
                        fallback=|| view! {
                            <div class="file-list-empty">"No knowledge files yet"</div>
                        }
                    >
                        <For
                            each=move || state.knowledge_files.get()
                            key=|f| f.id.clone()
                            let:file
                        >
                            {
                                let id = file.id.clone();
                                let id_checked = file.id.clone();
                                view! {
                                    <label class="file-item">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                selected.with(|s| s.contains(&id_checked))
                                            }
                                            on:change=move |_| {
                                                let mut next = selected.get_untracked();
                                                next.toggle(&id);
                                                on_selection_change.run(next.to_vec());
                                            }
                                        />
                                        <span>{file.name.clone()}</span>
                                    </label>
                                }
                            }
                        </For>
                    </Show>
                </div>
            </aside>
        </Show>
    }
}
