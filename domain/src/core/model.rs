//! Model identifier value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Model ids offered in the settings panel out of the box.
///
/// Any other non-empty id is accepted as a custom model.
pub const KNOWN_MODELS: &[&str] = &[
    "gpt-4o-mini",
    "gpt-4.1-nano",
    "gpt-4o",
    "gpt-4-turbo",
    "gpt-3.5-turbo",
];

/// Identifier of a hosted chat model (Value Object)
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Create a model id, trimming surrounding whitespace
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyModelId);
        }
        if trimmed.len() == id.len() {
            Ok(Self(id))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this id is one of [`KNOWN_MODELS`]
    pub fn is_known(&self) -> bool {
        KNOWN_MODELS.contains(&self.0.as_str())
    }

    /// The built-in model list as ids
    pub fn known_models() -> Vec<ModelId> {
        KNOWN_MODELS
            .iter()
            .map(|id| ModelId((*id).to_string()))
            .collect()
    }
}

impl Default for ModelId {
    /// Returns the default model (gpt-4o-mini)
    fn default() -> Self {
        ModelId(KNOWN_MODELS[0].to_string())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::new(s)
    }
}

impl TryFrom<String> for ModelId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ModelId::new(value)
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.0
    }
}
