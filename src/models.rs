use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional metadata attached to a content block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockExtras {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// A typed rendering unit of an assistant reply, e.g. `text` or `thinking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<BlockExtras>,
}

impl ContentBlock {
    pub const THINKING: &'static str = "thinking";

    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self { kind: kind.into(), text: text.into(), extras: None }
    }

    pub fn is_thinking(&self) -> bool {
        self.kind == Self::THINKING
    }
}

/// Body of a chat turn. On the wire this is either a JSON string or an
/// array of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    PlainText(String),
    Blocks(Vec<ContentBlock>),
}

impl MessageContent {
    /// Concatenated text of the content, in block order.
    pub fn plain_text(&self) -> String {
        match self {
            MessageContent::PlainText(text) => text.clone(),
            MessageContent::Blocks(blocks) => blocks.iter().map(|b| b.text.as_str()).collect(),
        }
    }

    /// Size of the textual payload in bytes.
    pub fn text_len(&self) -> usize {
        match self {
            MessageContent::PlainText(text) => text.len(),
            MessageContent::Blocks(blocks) => blocks.iter().map(|b| b.text.len()).sum(),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::PlainText(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::PlainText(text.to_string())
    }
}

impl From<Vec<ContentBlock>> for MessageContent {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        MessageContent::Blocks(blocks)
    }
}

/// One entry of the conversation. Entries are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, content: MessageContent::PlainText(text.into()) }
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Request body of the send operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub message: String,
    pub knowledge_files: Vec<String>,
}

/// Successful response of the send operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub message: Option<MessageContent>,
}

impl SendResponse {
    pub fn with_message(content: impl Into<MessageContent>) -> Self {
        Self { message: Some(content.into()) }
    }

    /// The assistant payload, if the response carries one. An empty string
    /// counts as no reply; a block array counts even when it is empty.
    pub fn into_reply(self) -> Option<MessageContent> {
        match self.message {
            Some(MessageContent::PlainText(text)) if text.is_empty() => None,
            other => other,
        }
    }
}

/// Entry of the knowledge-file listing shown by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeFile {
    pub id: String,
    pub name: String,
}
