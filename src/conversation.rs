//! The conversation state holder and the send lifecycle.

use tracing::{debug, error, warn};

use crate::api::ChatApi;
use crate::errors::SendError;
use crate::input::Draft;
use crate::models::{ChatMessage, SendRequest, SendResponse};
use crate::selection::KnowledgeSelection;

/// Ordered, append-only chat history plus the in-flight flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    loading: bool,
    revision: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Bumped on every change to the messages or the loading flag. The view
    /// scrolls to the newest entry whenever it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.touch();
    }

    /// Whether the send affordance is enabled.
    pub fn can_send(&self, draft: &Draft) -> bool {
        !self.loading && !draft.is_blank()
    }

    /// Appends the user's turn, clears the draft and marks the request as
    /// outstanding. Returns `None` without touching anything when the draft
    /// is blank or a request is already in flight.
    pub fn begin_submit(
        &mut self,
        draft: &mut Draft,
        selection: &KnowledgeSelection,
    ) -> Option<SendRequest> {
        if !self.can_send(draft) {
            return None;
        }

        let message = draft.take();
        self.append(ChatMessage::user(message.clone()));
        self.set_loading(true);

        Some(SendRequest { message, knowledge_files: selection.to_vec() })
    }

    /// Applies the outcome of the send started by [`Self::begin_submit`].
    /// Failures are logged and dropped; loading always ends.
    pub fn finish(&mut self, outcome: Result<SendResponse, SendError>) {
        match outcome {
            Ok(response) => {
                debug!(?response, "chat response received");
                match response.into_reply() {
                    Some(content) => self.append(ChatMessage::assistant(content)),
                    None => warn!("chat response carried no message payload"),
                }
            }
            Err(e) => {
                error!("Error sending message: {e}");
            }
        }
        self.set_loading(false);
    }

    /// Full submit path: [`Self::begin_submit`], the send call, then
    /// [`Self::finish`]. Returns whether a request was sent.
    pub async fn submit<A: ChatApi>(
        &mut self,
        api: &A,
        draft: &mut Draft,
        selection: &KnowledgeSelection,
    ) -> bool {
        let Some(request) = self.begin_submit(draft, selection) else {
            return false;
        };
        let outcome = api.send_message(request).await;
        self.finish(outcome);
        true
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::models::{ContentBlock, MessageContent, Role};

    /// Replays canned outcomes and records every request it receives.
    #[derive(Default)]
    struct ScriptedApi {
        outcomes: RefCell<VecDeque<Result<SendResponse, SendError>>>,
        requests: RefCell<Vec<SendRequest>>,
    }

    impl ScriptedApi {
        fn replying(outcome: Result<SendResponse, SendError>) -> Self {
            let api = Self::default();
            api.outcomes.borrow_mut().push_back(outcome);
            api
        }
    }

    impl ChatApi for ScriptedApi {
        async fn send_message(&self, request: SendRequest) -> Result<SendResponse, SendError> {
            self.requests.borrow_mut().push(request);
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(SendError::network("no scripted outcome")))
        }
    }

    #[tokio::test]
    async fn successful_send_appends_user_then_assistant() {
        let api = ScriptedApi::replying(Ok(SendResponse::with_message("hello")));
        let mut conv = Conversation::new();
        let mut draft = Draft::new("hi there");
        let selection = KnowledgeSelection::new(vec!["doc-1".into(), "doc-2".into()]);

        assert!(conv.submit(&api, &mut draft, &selection).await);

        assert_eq!(
            conv.messages(),
            [ChatMessage::user("hi there"), ChatMessage::assistant("hello")]
        );
        assert!(!conv.is_loading());
        assert_eq!(draft.text(), "");

        let requests = api.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].message, "hi there");
        assert_eq!(requests[0].knowledge_files, ["doc-1", "doc-2"]);
    }

    #[tokio::test]
    async fn rejected_send_keeps_user_entry_only() {
        let api = ScriptedApi::replying(Err(SendError::status(500, "Internal Server Error")));
        let mut conv = Conversation::new();
        let mut draft = Draft::new("question");

        assert!(conv.submit(&api, &mut draft, &KnowledgeSelection::default()).await);

        assert_eq!(conv.messages(), [ChatMessage::user("question")]);
        assert!(!conv.is_loading());
    }

    #[tokio::test]
    async fn blank_draft_is_a_no_op() {
        let api = ScriptedApi::default();
        let mut conv = Conversation::new();

        for text in ["", "   ", "\n\t"] {
            let mut draft = Draft::new(text);
            assert!(!conv.submit(&api, &mut draft, &KnowledgeSelection::default()).await);
            assert_eq!(draft.text(), text);
        }

        assert!(conv.is_empty());
        assert!(!conv.is_loading());
        assert_eq!(conv.revision(), 0);
        assert!(api.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn response_without_payload_adds_no_reply() {
        let api = ScriptedApi::replying(Ok(SendResponse::default()));
        let mut conv = Conversation::new();
        let mut draft = Draft::new("anyone?");

        conv.submit(&api, &mut draft, &KnowledgeSelection::default()).await;

        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].role, Role::User);
        assert!(!conv.is_loading());
    }

    #[tokio::test]
    async fn block_reply_is_appended_as_blocks() {
        let blocks = vec![ContentBlock::new("thinking", "let me see"), ContentBlock::new("text", "42")];
        let api = ScriptedApi::replying(Ok(SendResponse::with_message(blocks.clone())));
        let mut conv = Conversation::new();
        let mut draft = Draft::new("meaning of life?");

        conv.submit(&api, &mut draft, &KnowledgeSelection::default()).await;

        assert_eq!(conv.messages()[1].content, MessageContent::Blocks(blocks));
    }

    #[test]
    fn user_entry_keeps_raw_draft_text() {
        let mut conv = Conversation::new();
        let mut draft = Draft::new("  padded  ");

        let request = conv.begin_submit(&mut draft, &KnowledgeSelection::default()).unwrap();

        assert_eq!(request.message, "  padded  ");
        assert_eq!(conv.messages(), [ChatMessage::user("  padded  ")]);
        assert!(conv.is_loading());
    }

    #[test]
    fn send_is_disabled_while_loading() {
        let mut conv = Conversation::new();
        let mut draft = Draft::new("first");
        conv.begin_submit(&mut draft, &KnowledgeSelection::default()).unwrap();

        draft.on_change("second");
        assert!(!conv.can_send(&draft));
        assert_eq!(conv.begin_submit(&mut draft, &KnowledgeSelection::default()), None);
        assert_eq!(draft.text(), "second");
        assert_eq!(conv.messages().len(), 1);

        conv.finish(Ok(SendResponse::with_message("done")));
        assert!(conv.can_send(&draft));
    }

    #[test]
    fn blank_draft_disables_send() {
        let conv = Conversation::new();
        assert!(!conv.can_send(&Draft::new("  ")));
        assert!(conv.can_send(&Draft::new("x")));
    }

    #[test]
    fn every_mutation_moves_the_revision() {
        let mut conv = Conversation::new();
        let mut draft = Draft::new("hi");

        conv.begin_submit(&mut draft, &KnowledgeSelection::default());
        let after_submit = conv.revision();
        assert!(after_submit >= 2);

        conv.finish(Err(SendError::network("offline")));
        assert!(conv.revision() > after_submit);

        let before_append = conv.revision();
        conv.append(ChatMessage::assistant("late"));
        assert_eq!(conv.revision(), before_append + 1);
    }

    #[test]
    fn messages_keep_submission_order() {
        let mut conv = Conversation::new();
        for (question, answer) in [("one", "1"), ("two", "2")] {
            let mut draft = Draft::new(question);
            conv.begin_submit(&mut draft, &KnowledgeSelection::default());
            conv.finish(Ok(SendResponse::with_message(answer)));
        }

        let texts: Vec<String> = conv.messages().iter().map(|m| m.content.plain_text()).collect();
        assert_eq!(texts, ["one", "1", "two", "2"]);
    }
}
