//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Temperature must be a finite value between 0 and 2, got {0}")]
    InvalidTemperature(f64),

    #[error("Model id cannot be empty")]
    EmptyModelId,

    #[error("Invalid preset name '{name}': {reason}")]
    InvalidPresetName { name: String, reason: &'static str },
}

impl DomainError {
    /// Check if this error was caused by a rejected preset name
    pub fn is_invalid_preset_name(&self) -> bool {
        matches!(self, DomainError::InvalidPresetName { .. })
    }
}
