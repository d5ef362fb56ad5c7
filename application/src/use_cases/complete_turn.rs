//! Completion invoker
//!
//! Sends one user message to a cached agent handle under this turn's
//! system prompt and always comes back with displayable text.

use crate::cache::AgentHandle;
use crate::config::{ChatParams, DEFAULT_FALLBACK_REPLY};
use persona_domain::util::{tail_str, truncate_str};
use tracing::{debug, warn};

/// Text produced for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// `true` when `text` is the fallback reply rather than a model answer
    pub used_fallback: bool,
}

/// Invokes the model behind an [`AgentHandle`]
///
/// Provider failures and unusable replies never propagate; they turn into
/// the configured fallback reply.
#[derive(Debug, Clone)]
pub struct CompletionInvoker {
    fallback_reply: String,
}

impl Default for CompletionInvoker {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_REPLY)
    }
}

impl CompletionInvoker {
    pub fn new(fallback_reply: impl Into<String>) -> Self {
        Self {
            fallback_reply: fallback_reply.into(),
        }
    }

    pub fn from_params(params: &ChatParams) -> Self {
        Self::new(params.fallback_reply.clone())
    }

    pub fn fallback_reply(&self) -> &str {
        &self.fallback_reply
    }

    /// Reply text for `user_text`, or the fallback reply
    pub async fn complete(
        &self,
        handle: &AgentHandle,
        system_prompt: &str,
        user_text: &str,
    ) -> String {
        self.complete_detailed(handle, system_prompt, user_text)
            .await
            .text
    }

    /// Like [`complete`](Self::complete), but also reports whether the
    /// fallback was used
    pub async fn complete_detailed(
        &self,
        handle: &AgentHandle,
        system_prompt: &str,
        user_text: &str,
    ) -> Completion {
        let request = handle.request(system_prompt, user_text);
        debug!(
            "Sending to {}: '{}' (system prompt {} bytes, ends with ...{})",
            request.model_id,
            truncate_str(user_text, 100),
            system_prompt.len(),
            tail_str(system_prompt, 100)
        );

        match handle.client().invoke(request).await {
            Ok(reply) => match reply.into_text() {
                Some(text) => Completion {
                    text,
                    used_fallback: false,
                },
                None => {
                    warn!("Provider reply had no usable text, using fallback reply");
                    self.fallback()
                }
            },
            Err(e) => {
                warn!("Completion failed: {}", e);
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> Completion {
        Completion {
            text: self.fallback_reply.clone(),
            used_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::AgentCache;
    use crate::ports::completion_provider::{ProviderError, ProviderReply};
    use crate::testing::{CountingProvider, ScriptedClient};
    use persona_domain::ModelSettings;
    use serde_json::json;
    use std::sync::Arc;

    async fn handle_for(client: Arc<ScriptedClient>) -> Arc<AgentHandle> {
        let provider = Arc::new(CountingProvider::with_client(client));
        let cache = AgentCache::new(provider, &ChatParams::default().with_max_tokens(500));
        cache
            .get_or_build(&ModelSettings::parse("gpt-4o", 0.7, true).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_request_combines_handle_settings_and_prompts() {
        let client = Arc::new(ScriptedClient::new());
        let handle = handle_for(client.clone()).await;

        CompletionInvoker::default()
            .complete(&handle, "You are terse.", "Hi")
            .await;

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gpt-4o");
        assert_eq!(requests[0].temperature, 0.7);
        assert!(requests[0].web_search_enabled);
        assert_eq!(requests[0].max_tokens, 500);
        assert_eq!(requests[0].system_prompt, "You are terse.");
        assert_eq!(requests[0].user_text, "Hi");
    }

    #[tokio::test]
    async fn test_reply_shapes_are_normalized() {
        let client = Arc::new(ScriptedClient::with_replies(vec![
            Ok(ProviderReply::text("plain")),
            Ok(ProviderReply::new(json!({"output": "out", "content": "ignored"}))),
            Ok(ProviderReply::new(json!({"content": "content"}))),
        ]));
        let handle = handle_for(client).await;
        let invoker = CompletionInvoker::default();

        assert_eq!(invoker.complete(&handle, "P", "1").await, "plain");
        assert_eq!(invoker.complete(&handle, "P", "2").await, "out");
        assert_eq!(invoker.complete(&handle, "P", "3").await, "content");
    }

    #[tokio::test]
    async fn test_timeout_returns_fallback() {
        let client = Arc::new(ScriptedClient::with_replies(vec![Err(ProviderError::Timeout)]));
        let handle = handle_for(client).await;

        let completion = CompletionInvoker::default()
            .complete_detailed(&handle, "P", "Hi")
            .await;

        assert_eq!(completion.text, "Sorry, I cannot answer right now");
        assert!(completion.used_fallback);
    }

    #[tokio::test]
    async fn test_unknown_shape_returns_fallback() {
        let client = Arc::new(ScriptedClient::with_replies(vec![Ok(ProviderReply::new(
            json!({"choices": []}),
        ))]));
        let handle = handle_for(client).await;

        let invoker = CompletionInvoker::new("Entschuldigung, ich kann im Moment nicht antworten.");
        assert_eq!(
            invoker.complete(&handle, "P", "Hi").await,
            "Entschuldigung, ich kann im Moment nicht antworten."
        );
    }

    #[test]
    fn test_from_params_uses_configured_fallback() {
        let params = ChatParams::default().with_fallback_reply("Nope.");
        assert_eq!(CompletionInvoker::from_params(&params).fallback_reply(), "Nope.");
    }
}
