//! Domain layer for persona-chat
//!
//! This crate contains the core entities and value objects of a
//! single-persona chatbot. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Persona
//!
//! The persona is the editable personality prompt. Changing it resets the
//! conversation, since old turns under a new personality make no sense.
//!
//! ## Conversation
//!
//! The model is stateless between calls, so each turn re-sends the persona
//! followed by the transcript of earlier turns:
//!
//! ```text
//! <persona>
//!
//! Previous conversation:
//! User: ...
//! Assistant: ...
//! ```
//!
//! ## Model Settings
//!
//! `(model, temperature, web search)` identifies a reusable model handle.
//! The persona is not part of it.

pub mod config;
pub mod conversation;
pub mod core;
pub mod persona;
pub mod prompt;
pub mod session;
pub mod settings;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use conversation::{
    entities::{ConversationLog, Role, Turn},
    transcript::Transcript,
};
pub use core::{
    error::DomainError,
    model::{KNOWN_MODELS, ModelId},
};
pub use persona::{
    entities::{DEFAULT_PERSONA, Persona},
    preset::{Preset, PresetName},
};
pub use prompt::{HISTORY_HEADER, PromptAssembler};
pub use session::state::SessionState;
pub use settings::{model_settings::ModelSettings, temperature::Temperature};
