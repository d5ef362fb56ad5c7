//! Chat parameters — use case behavior control.
//!
//! [`ChatParams`] groups the static parameters used by the agent cache and
//! the completion invoker. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reply shown when the provider cannot produce an answer.
pub const DEFAULT_FALLBACK_REPLY: &str = "Sorry, I cannot answer right now";

/// Chat behavior parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatParams {
    /// How long a built agent handle may be reused.
    pub agent_ttl: Duration,
    /// Upper bound on reply length passed to the provider.
    pub max_tokens: u32,
    /// Text returned in place of a reply when the provider fails.
    pub fallback_reply: String,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            agent_ttl: Duration::from_secs(3600),
            max_tokens: 1000,
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }
}

impl ChatParams {
    // ==================== Builder Methods ====================

    pub fn with_agent_ttl(mut self, ttl: Duration) -> Self {
        self.agent_ttl = ttl;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_fallback_reply(mut self, reply: impl Into<String>) -> Self {
        self.fallback_reply = reply.into();
        self
    }
}
