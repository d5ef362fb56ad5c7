//! Chat configuration from TOML (`[chat]` section)

use persona_application::DEFAULT_FALLBACK_REPLY;
use persona_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Chat behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Shown as the assistant's reply when the provider fails
    pub fallback_reply: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }
}

impl FileChatConfig {
    /// Configured fallback reply, or the built-in one when blank
    pub fn fallback_reply(&self) -> &str {
        if self.fallback_reply.trim().is_empty() {
            DEFAULT_FALLBACK_REPLY
        } else {
            &self.fallback_reply
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if !self.fallback_reply.trim().is_empty() {
            return Vec::new();
        }
        vec![ConfigIssue::error(
            ConfigIssueCode::EmptyFallbackReply,
            "chat.fallback_reply is empty, using the built-in reply",
        )]
    }
}
