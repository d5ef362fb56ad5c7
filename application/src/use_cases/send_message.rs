//! Send Message use case
//!
//! Runs one chat turn:
//! 1. Assemble the system prompt from the persona and the transcript so far
//! 2. Get (or build) the agent handle for the session's model settings
//! 3. Invoke the completion, falling back to a fixed reply on failure
//! 4. Record the user message and the reply in the conversation log

use super::complete_turn::CompletionInvoker;
use crate::cache::{AgentCache, ConstructionError};
use crate::config::ChatParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use persona_domain::util::truncate_str;
use persona_domain::{PromptAssembler, SessionState};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that end a turn without a reply
#[derive(Error, Debug)]
pub enum SendMessageError {
    #[error("Agent unavailable: {0}")]
    Construction(#[from] ConstructionError),
}

/// Result of a completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Text to display as the assistant's answer
    pub reply: String,
    /// `true` when `reply` is the fallback text
    pub used_fallback: bool,
}

/// Use case for sending one user message
///
/// The cache may be shared by every session; the [`SessionState`] is
/// borrowed mutably, so turns within one session cannot overlap.
pub struct SendMessageUseCase {
    cache: Arc<AgentCache>,
    invoker: CompletionInvoker,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SendMessageUseCase {
    pub fn new(cache: Arc<AgentCache>, params: &ChatParams) -> Self {
        Self {
            cache,
            invoker: CompletionInvoker::from_params(params),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute one turn
    ///
    /// If no handle can be built the log is left untouched and the error is
    /// returned for display. Provider failures during the call do not error;
    /// they produce the fallback reply, which is logged like any answer.
    pub async fn execute(
        &self,
        session: &mut SessionState,
        user_text: &str,
    ) -> Result<TurnOutcome, SendMessageError> {
        info!("Chat turn: {}", truncate_str(user_text, 100));

        let transcript = session.log().serialize();
        let system_prompt = PromptAssembler::assemble(session.persona().text(), &transcript);

        let handle = self.cache.get_or_build(session.settings()).await.map_err(|e| {
            warn!("Turn aborted, no agent: {}", e);
            e
        })?;

        let completion = self
            .invoker
            .complete_detailed(&handle, &system_prompt, user_text)
            .await;

        self.conversation_logger.log(ConversationEvent::turn_completed(
            session.settings(),
            user_text,
            &completion.text,
            completion.used_fallback,
        ));
        session.record_exchange(user_text, completion.text.as_str());

        Ok(TurnOutcome {
            reply: completion.text,
            used_fallback: completion.used_fallback,
        })
    }
}
