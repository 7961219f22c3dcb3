use thiserror::Error;

/// Failure of a chat API call, chiefly the send operation. Every variant
/// carries a human-readable message for logging; none is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    // ── Transport ────────────────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    // ── Payload ──────────────────────────────────────────────────────────────
    #[error("Serialize error: {0}")]
    Encode(String),

    #[error("Parse error: {0}")]
    Decode(String),
}

impl SendError {
    pub fn network(message: impl Into<String>) -> Self {
        SendError::Network(message.into())
    }

    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        SendError::Status { status, status_text: status_text.into() }
    }
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API base '{value}' must start with http:// or https://")]
    InvalidApiBase { value: String },

    #[error("Invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_code_and_text() {
        let err = SendError::status(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Server error: 502 Bad Gateway");
    }

    #[test]
    fn messages_name_the_failing_stage() {
        assert_eq!(SendError::network("refused").to_string(), "Network error: refused");
        assert_eq!(SendError::Decode("eof".into()).to_string(), "Parse error: eof");
        assert_eq!(SendError::Encode("bad".into()).to_string(), "Serialize error: bad");
    }
}
