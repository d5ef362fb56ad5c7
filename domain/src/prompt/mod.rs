//! Prompt domain
//!
//! Builds the system prompt that carries the persona and the running
//! transcript to the model on each turn.

mod assembler;

pub use assembler::{HISTORY_HEADER, PromptAssembler};
