//! Chat component model of the PaperAI web interface: conversation state,
//! the send lifecycle, input sizing, knowledge-file selection and sidebar
//! visibility. The Leptos frontend binds these types to signals.

pub mod api;
pub mod config;
pub mod conversation;
pub mod errors;
pub mod input;
pub mod markdown;
pub mod models;
pub mod selection;
pub mod sidebar;

pub use api::ChatApi;
pub use config::ChatConfig;
pub use conversation::Conversation;
pub use errors::{ConfigError, SendError};
pub use input::{DeepThink, Draft, InputHeight, InputSizing, KeyAction, Overflow, key_action};
pub use markdown::{RenderedBlock, render_markdown, render_reply};
pub use models::{
    BlockExtras, ChatMessage, ContentBlock, KnowledgeFile, MessageContent, Role, SendRequest,
    SendResponse,
};
pub use selection::KnowledgeSelection;
pub use sidebar::SidebarVisibility;
