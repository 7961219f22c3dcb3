use serde::Deserialize;

use crate::errors::ConfigError;

/// Base URL of the backend API server.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
const DEFAULT_INPUT_MIN_HEIGHT_PX: u32 = 44;
const DEFAULT_INPUT_MAX_HEIGHT_PX: u32 = 192;
const DEFAULT_MARKDOWN_FALLBACK_BYTES: usize = 128 * 1024;

/// Client-side settings of the chat interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub api_base: String,
    pub input_min_height_px: u32,
    pub input_max_height_px: u32,
    /// Assistant payloads above this size skip markdown and render as text.
    pub markdown_fallback_bytes: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            input_min_height_px: DEFAULT_INPUT_MIN_HEIGHT_PX,
            input_max_height_px: DEFAULT_INPUT_MAX_HEIGHT_PX,
            markdown_fallback_bytes: DEFAULT_MARKDOWN_FALLBACK_BYTES,
        }
    }
}

impl ChatConfig {
    /// Parses a JSON config document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ChatConfig = serde_json::from_str(raw)?;
        let api_base = config.api_base.clone();
        config.with_api_base(&api_base)
    }

    /// Replaces the API base, rejecting non-HTTP URLs.
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBase { value: api_base.to_string() });
        }
        self.api_base = trimmed.to_string();
        Ok(self)
    }

    /// Absolute URL of an API path such as `/api/chat`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
