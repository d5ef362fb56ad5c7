//! Model settings value object

use super::temperature::Temperature;
use crate::core::error::DomainError;
use crate::core::model::ModelId;
use serde::{Deserialize, Serialize};

/// Settings a model handle is built with (Value Object)
///
/// Two settings are interchangeable for caching purposes exactly when all
/// three fields are equal. The persona prompt is deliberately absent: it is
/// injected per call, so rewording it never requires a new handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelSettings {
    pub model_id: ModelId,
    pub temperature: Temperature,
    pub web_search_enabled: bool,
}

impl ModelSettings {
    pub fn new(model_id: ModelId, temperature: Temperature, web_search_enabled: bool) -> Self {
        Self {
            model_id,
            temperature,
            web_search_enabled,
        }
    }

    /// Build settings from raw UI values, validating each field
    pub fn parse(
        model_id: &str,
        temperature: f64,
        web_search_enabled: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            ModelId::new(model_id)?,
            Temperature::new(temperature)?,
            web_search_enabled,
        ))
    }

    pub fn with_model(mut self, model_id: ModelId) -> Self {
        self.model_id = model_id;
        self
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search_enabled = enabled;
        self
    }
}

impl std::fmt::Display for ModelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (temperature {}, web search {})",
            self.model_id,
            self.temperature,
            if self.web_search_enabled { "on" } else { "off" }
        )
    }
}
