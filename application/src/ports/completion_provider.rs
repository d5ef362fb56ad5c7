//! Completion provider port
//!
//! Defines the interface to the hosted model. The provider builds a
//! [`ModelClient`] for a set of [`ModelSettings`]; the client answers one
//! request at a time. How either talks to the network is up to the adapter.

use async_trait::async_trait;
use persona_domain::{ModelId, ModelSettings, Temperature};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while building a client or requesting a completion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider unreachable: {0}")]
    Unreachable(String),

    #[error("Model not available: {0}")]
    InvalidModel(String),

    #[error("Timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Options fixed at client construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub max_tokens: u32,
}

/// A single completion request
///
/// Built fresh for every turn: the system prompt carries the transcript,
/// so it changes each time while the client stays the same.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub model_id: &'a ModelId,
    pub temperature: Temperature,
    pub web_search_enabled: bool,
    pub max_tokens: u32,
    pub system_prompt: &'a str,
    pub user_text: &'a str,
}

/// Raw reply as handed back by an adapter
///
/// Providers shape replies differently. Adapters pass through whatever they
/// received; [`into_text`](Self::into_text) is the one place that decides
/// which shapes count as an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReply(Value);

impl ProviderReply {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Reply that is already plain text
    pub fn text(text: impl Into<String>) -> Self {
        Self(Value::String(text.into()))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Normalize the reply to plain text
    ///
    /// Accepted shapes, in order of preference:
    /// 1. a JSON string
    /// 2. an object with a string `output`
    /// 3. an object with `content` as a string, or as an array of text
    ///    blocks (`"..."` or `{"text": "..."}`) which are concatenated
    ///
    /// Anything else, and any blank result, yields `None`.
    pub fn into_text(self) -> Option<String> {
        let text = match self.0 {
            Value::String(s) => Some(s),
            Value::Object(mut map) => match map.remove("output") {
                Some(Value::String(s)) => Some(s),
                _ => map.remove("content").and_then(content_text),
            },
            _ => None,
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

fn content_text(content: Value) -> Option<String> {
    match content {
        Value::String(s) => Some(s),
        Value::Array(blocks) => {
            let parts: Vec<String> = blocks
                .into_iter()
                .filter_map(|block| match block {
                    Value::String(s) => Some(s),
                    Value::Object(mut map) => match map.remove("text") {
                        Some(Value::String(s)) => Some(s),
                        _ => None,
                    },
                    _ => None,
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.concat())
            }
        }
        _ => None,
    }
}

/// A configured model client (the payload of an agent handle)
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one request and return the raw reply
    async fn invoke(&self, request: CompletionRequest<'_>) -> Result<ProviderReply, ProviderError>;
}

/// Factory for model clients
///
/// Building a client is assumed to be expensive; callers go through
/// [`AgentCache`](crate::cache::AgentCache) rather than calling this per turn.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn connect(
        &self,
        settings: &ModelSettings,
        options: &ClientOptions,
    ) -> Result<Arc<dyn ModelClient>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string_reply() {
        assert_eq!(
            ProviderReply::text("Hello").into_text(),
            Some("Hello".to_string())
        );
    }

    #[test]
    fn test_output_preferred_over_content() {
        let reply = ProviderReply::new(json!({"output": "from output", "content": "from content"}));
        assert_eq!(reply.into_text(), Some("from output".to_string()));
    }

    #[test]
    fn test_content_used_when_output_missing_or_not_text() {
        let reply = ProviderReply::new(json!({"content": "from content"}));
        assert_eq!(reply.into_text(), Some("from content".to_string()));

        let reply = ProviderReply::new(json!({"output": null, "content": "from content"}));
        assert_eq!(reply.into_text(), Some("from content".to_string()));
    }

    #[test]
    fn test_content_blocks_are_concatenated() {
        let reply = ProviderReply::new(json!({
            "content": [
                {"type": "text", "text": "Na, "},
                {"type": "image", "url": "ignored"},
                "wie bitte?"
            ]
        }));
        assert_eq!(reply.into_text(), Some("Na, wie bitte?".to_string()));
    }

    #[test]
    fn test_unknown_shapes_fail_closed() {
        for value in [
            json!(42),
            json!(null),
            json!(["loose", "array"]),
            json!({"message": "no known field"}),
            json!({"content": [{"type": "image"}]}),
            json!({"output": {"nested": "object"}}),
        ] {
            assert_eq!(ProviderReply::new(value.clone()).into_text(), None, "{value}");
        }
    }

    #[test]
    fn test_blank_text_fails_closed() {
        assert_eq!(ProviderReply::text("  \n").into_text(), None);
        assert_eq!(ProviderReply::new(json!({"output": ""})).into_text(), None);
    }
}
