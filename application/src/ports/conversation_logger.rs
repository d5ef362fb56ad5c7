//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording chat events
//! (persona changes, handle builds, completed turns) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! record of the conversation (JSONL).

use persona_domain::ModelSettings;
use serde_json::{Value, json};

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The adapter adds the timestamp.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    /// Event type identifier (e.g., "turn_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub const PERSONA_APPLIED: &'static str = "persona_applied";
    pub const AGENT_BUILT: &'static str = "agent_built";
    pub const TURN_COMPLETED: &'static str = "turn_completed";

    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn persona_applied(persona: &str, cleared_turns: usize) -> Self {
        Self::new(
            Self::PERSONA_APPLIED,
            json!({
                "persona_bytes": persona.len(),
                "cleared_turns": cleared_turns,
            }),
        )
    }

    pub fn agent_built(settings: &ModelSettings) -> Self {
        Self::new(
            Self::AGENT_BUILT,
            json!({
                "model": settings.model_id.as_str(),
                "temperature": settings.temperature.value(),
                "web_search": settings.web_search_enabled,
            }),
        )
    }

    pub fn turn_completed(
        settings: &ModelSettings,
        user_text: &str,
        reply: &str,
        used_fallback: bool,
    ) -> Self {
        Self::new(
            Self::TURN_COMPLETED,
            json!({
                "model": settings.model_id.as_str(),
                "user": user_text,
                "reply": reply,
                "fallback": used_fallback,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; a failing sink must never break
/// a chat turn.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
