//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod apply_persona;
pub mod complete_turn;
pub mod manage_presets;
pub mod send_message;
