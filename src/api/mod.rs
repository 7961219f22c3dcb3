use std::future::Future;

use crate::errors::SendError;
use crate::models::{SendRequest, SendResponse};

/// The remote send operation consumed by the conversation.
///
/// Implementations run on the browser event loop, so the returned future is
/// not required to be `Send`.
pub trait ChatApi {
    fn send_message(
        &self,
        request: SendRequest,
    ) -> impl Future<Output = Result<SendResponse, SendError>>;
}
