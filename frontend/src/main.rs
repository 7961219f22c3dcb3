mod api;
mod components;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use paper_chat::ChatConfig;

use components::chat::ChatArea;
use components::sidebar::KnowledgeSidebar;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide(load_config());

    // Load the picker's file list on mount
    state.load_knowledge_files();

    view! {
        <div class="app-container">
            <ChatArea />
            <KnowledgeSidebar
                selected=state.selection
                on_selection_change={move |ids: Vec<String>| state.set_selection.update(|s| s.replace(ids))}
                on_close={move |_: ()| state.close_sidebar()}
            />
        </div>
    }
}

/// Build-time configuration: an optional JSON document in `PAPERAI_CONFIG`,
/// then an optional `PAPERAI_API_BASE` override.
fn load_config() -> ChatConfig {
    resolve_config(option_env!("PAPERAI_CONFIG"), option_env!("PAPERAI_API_BASE"))
}

/// Invalid inputs are logged and skipped, falling back to what came before.
fn resolve_config(document: Option<&str>, api_base: Option<&str>) -> ChatConfig {
    let config = match document.map(ChatConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("Ignoring PAPERAI_CONFIG: {e}");
            ChatConfig::default()
        }
        None => ChatConfig::default(),
    };

    let Some(api_base) = api_base else {
        return config;
    };
    match config.clone().with_api_base(api_base) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring PAPERAI_API_BASE: {e}");
            config
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
