//! Agent handle

use crate::ports::completion_provider::{ClientOptions, CompletionRequest, ModelClient};
use persona_domain::ModelSettings;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// A configured model client, valid only for the settings it was built with
///
/// Handles are created by [`AgentCache`](super::AgentCache) and hold no
/// persona or transcript; those arrive per request.
pub struct AgentHandle {
    settings: ModelSettings,
    options: ClientOptions,
    client: Arc<dyn ModelClient>,
    built_at: Instant,
}

impl AgentHandle {
    pub(crate) fn new(
        settings: ModelSettings,
        options: ClientOptions,
        client: Arc<dyn ModelClient>,
        built_at: Instant,
    ) -> Self {
        Self {
            settings,
            options,
            client,
            built_at,
        }
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn built_at(&self) -> Instant {
        self.built_at
    }

    pub(crate) fn client(&self) -> &dyn ModelClient {
        self.client.as_ref()
    }

    /// Whether `ttl` has fully elapsed since the handle was built
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.built_at) >= ttl
    }

    /// Per-call request: fixed settings plus this turn's prompts
    pub fn request<'a>(&'a self, system_prompt: &'a str, user_text: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            model_id: &self.settings.model_id,
            temperature: self.settings.temperature,
            web_search_enabled: self.settings.web_search_enabled,
            max_tokens: self.options.max_tokens,
            system_prompt,
            user_text,
        }
    }
}

impl std::fmt::Debug for AgentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentHandle")
            .field("settings", &self.settings)
            .field("options", &self.options)
            .field("built_at", &self.built_at)
            .finish_non_exhaustive()
    }
}
