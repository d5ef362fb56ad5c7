//! Application layer for persona-chat
//!
//! This crate contains use cases, port definitions, the agent cache and
//! application configuration. It depends only on the domain layer.
//!
//! A UI drives one turn like this:
//!
//! ```text
//! SessionState ──► SendMessageUseCase ──► PromptAssembler (persona + transcript)
//!                        │
//!                        ├──► AgentCache::get_or_build(settings)
//!                        └──► CompletionInvoker::complete ──► reply / fallback
//! ```

pub mod cache;
pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use cache::{AgentCache, AgentHandle, CacheEntryState, ConstructionError};
pub use config::{ChatParams, DEFAULT_FALLBACK_REPLY};
pub use ports::{
    completion_provider::{
        ClientOptions, CompletionProvider, CompletionRequest, ModelClient, ProviderError,
        ProviderReply,
    },
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    preset_store::{PresetStore, PresetStoreError},
};
pub use use_cases::apply_persona::ApplyPersonaUseCase;
pub use use_cases::complete_turn::{Completion, CompletionInvoker};
pub use use_cases::manage_presets::PresetCatalog;
pub use use_cases::send_message::{SendMessageError, SendMessageUseCase, TurnOutcome};
