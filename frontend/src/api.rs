use std::sync::Arc;

use gloo_net::http::Request;
use paper_chat::{ChatApi, ChatConfig, KnowledgeFile, SendError, SendRequest, SendResponse};

const CHAT_PATH: &str = "/api/chat";
const KNOWLEDGE_FILES_PATH: &str = "/api/knowledge-files";

/// HTTP implementation of the send operation, plus the knowledge-file
/// listing used by the picker.
#[derive(Clone)]
pub struct HttpChatApi {
    config: Arc<ChatConfig>,
}

impl HttpChatApi {
    pub fn new(config: Arc<ChatConfig>) -> Self {
        Self { config }
    }

    pub fn chat_url(&self) -> String {
        self.config.endpoint(CHAT_PATH)
    }

    pub fn knowledge_files_url(&self) -> String {
        self.config.endpoint(KNOWLEDGE_FILES_PATH)
    }

    /// Fetches the knowledge files the user can attach.
    pub async fn fetch_knowledge_files(&self) -> Result<Vec<KnowledgeFile>, SendError> {
        let resp = Request::get(&self.knowledge_files_url())
            .send()
            .await
            .map_err(|e| SendError::network(e.to_string()))?;

        if !resp.ok() {
            return Err(SendError::status(resp.status(), resp.status_text()));
        }

        resp.json::<Vec<KnowledgeFile>>()
            .await
            .map_err(|e| SendError::Decode(e.to_string()))
    }
}

impl ChatApi for HttpChatApi {
    /// Posts the draft and the attached file ids to the chat endpoint.
    async fn send_message(&self, request: SendRequest) -> Result<SendResponse, SendError> {
        let resp = Request::post(&self.chat_url())
            .json(&request)
            .map_err(|e| SendError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::network(e.to_string()))?;

        if !resp.ok() {
            return Err(SendError::status(resp.status(), resp.status_text()));
        }

        resp.json::<SendResponse>()
            .await
            .map_err(|e| SendError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_configured_base() {
        let config = ChatConfig::default().with_api_base("https://paper.example/").unwrap();
        let api = HttpChatApi::new(Arc::new(config));
        assert_eq!(api.chat_url(), "https://paper.example/api/chat");
        assert_eq!(api.knowledge_files_url(), "https://paper.example/api/knowledge-files");
    }
}
