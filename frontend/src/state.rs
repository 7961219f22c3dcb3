use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use paper_chat::{
    ChatApi, ChatConfig, Conversation, DeepThink, Draft, KnowledgeFile, KnowledgeSelection,
    SidebarVisibility,
};

use crate::api::HttpChatApi;

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub conversation: ReadSignal<Conversation>,
    pub draft: ReadSignal<Draft>,
    pub selection: ReadSignal<KnowledgeSelection>,
    pub sidebar: ReadSignal<SidebarVisibility>,
    pub deep_think: ReadSignal<DeepThink>,
    pub knowledge_files: ReadSignal<Vec<KnowledgeFile>>,
    pub files_error: ReadSignal<Option<String>>,

    // --- Write signals (for mutating state) ---
    pub set_conversation: WriteSignal<Conversation>,
    pub set_draft: WriteSignal<Draft>,
    pub set_selection: WriteSignal<KnowledgeSelection>,
    pub set_sidebar: WriteSignal<SidebarVisibility>,
    pub set_deep_think: WriteSignal<DeepThink>,
    pub set_knowledge_files: WriteSignal<Vec<KnowledgeFile>>,
    pub set_files_error: WriteSignal<Option<String>>,

    pub config: StoredValue<Arc<ChatConfig>>,
    api: StoredValue<HttpChatApi>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide(config: ChatConfig) -> Self {
        let config = Arc::new(config);
        let (conversation, set_conversation) = signal(Conversation::new());
        let (draft, set_draft) = signal(Draft::default());
        let (selection, set_selection) = signal(KnowledgeSelection::default());
        let (sidebar, set_sidebar) = signal(SidebarVisibility::default());
        let (deep_think, set_deep_think) = signal(DeepThink::default());
        let (knowledge_files, set_knowledge_files) = signal(Vec::<KnowledgeFile>::new());
        let (files_error, set_files_error) = signal(None::<String>);

        let state = Self {
            conversation,
            draft,
            selection,
            sidebar,
            deep_think,
            knowledge_files,
            files_error,
            set_conversation,
            set_draft,
            set_selection,
            set_sidebar,
            set_deep_think,
            set_knowledge_files,
            set_files_error,
            api: StoredValue::new(HttpChatApi::new(config.clone())),
            config: StoredValue::new(config),
        };

        provide_context(state);
        state
    }

    /// Load the knowledge files offered by the picker.
    pub fn load_knowledge_files(&self) {
        let api = self.api.get_value();
        let set_files = self.set_knowledge_files;
        let set_error = self.set_files_error;
        spawn_local(async move {
            match api.fetch_knowledge_files().await {
                Ok(files) => {
                    set_files.set(files);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch knowledge files: {e}");
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    }

    /// Whether the send button is enabled.
    pub fn can_send(&self) -> bool {
        let draft = self.draft;
        self.conversation.with(|c| draft.with(|d| c.can_send(d)))
    }

    /// Submit the current draft. Blank drafts and submits while a request is
    /// in flight are ignored. Returns whether a request was started.
    pub fn send_message(&self) -> bool {
        let mut draft = self.draft.get_untracked();
        if !self.conversation.with_untracked(|c| c.can_send(&draft)) {
            return false;
        }
        let selection = self.selection.get_untracked();

        let Some(request) = self
            .set_conversation
            .try_update(|c| c.begin_submit(&mut draft, &selection))
            .flatten()
        else {
            return false;
        };
        self.set_draft.set(draft);

        let api = self.api.get_value();
        let set_conversation = self.set_conversation;
        spawn_local(async move {
            let outcome = api.send_message(request).await;
            // The signal may be gone if the view unmounted; the request is
            // not cancelled in that case.
            set_conversation.try_update(|c| c.finish(outcome));
        });
        true
    }

    pub fn close_sidebar(&self) {
        self.set_sidebar.maybe_update(|s| s.request_close());
    }

    pub fn open_sidebar(&self) {
        self.set_sidebar.maybe_update(|s| s.request_open());
    }

    /// Exit animation of the sidebar finished.
    pub fn sidebar_exited(&self) {
        self.set_sidebar.maybe_update(|s| s.finish_exit());
    }
}
