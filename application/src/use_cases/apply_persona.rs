//! Apply Persona use case
//!
//! Makes an edited persona the active one. A changed persona starts a new
//! conversation and drops every cached agent handle.

use crate::cache::AgentCache;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use persona_domain::SessionState;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for applying a new persona to a session
pub struct ApplyPersonaUseCase {
    cache: Arc<AgentCache>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ApplyPersonaUseCase {
    pub fn new(cache: Arc<AgentCache>) -> Self {
        Self {
            cache,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Apply `text` as the session's persona
    ///
    /// Returns `true` if the persona changed. Applying the current text
    /// again changes nothing.
    pub fn execute(&self, session: &mut SessionState, text: &str) -> bool {
        let cleared_turns = session.log().len();
        if !session.replace_persona(text) {
            debug!("Persona unchanged, keeping conversation");
            return false;
        }

        self.cache.invalidate_all();
        info!(
            "Persona updated, conversation reset ({} turns dropped)",
            cleared_turns
        );
        self.conversation_logger
            .log(ConversationEvent::persona_applied(text, cleared_turns));
        true
    }

    /// Apply whatever is currently in the session's editor
    pub fn apply_editor(&self, session: &mut SessionState) -> bool {
        let text = session.editor().to_string();
        self.execute(session, &text)
    }
}
