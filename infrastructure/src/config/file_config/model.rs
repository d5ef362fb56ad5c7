//! Model configuration from TOML (`[model]` section)

use persona_domain::{
    ConfigIssue, ConfigIssueCode, KNOWN_MODELS, ModelId, ModelSettings, Temperature,
};
use serde::{Deserialize, Serialize};

/// Model selection and sampling parameters
///
/// # Example
///
/// ```toml
/// [model]
/// id = "gpt-4o"
/// temperature = 0.7
/// web_search = true
/// max_tokens = 1000
/// available = ["gpt-4o", "gpt-4o-mini"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model used for new sessions
    pub id: String,
    /// Sampling temperature in `[0, 2]`
    pub temperature: f64,
    /// Whether the provider's web search tool is enabled
    pub web_search: bool,
    /// Reply length limit passed to the provider
    pub max_tokens: u32,
    /// Models offered for selection
    pub available: Vec<String>,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        let settings = ModelSettings::default();
        Self {
            id: settings.model_id.to_string(),
            temperature: settings.temperature.value(),
            web_search: settings.web_search_enabled,
            max_tokens: 1000,
            available: KNOWN_MODELS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl FileModelConfig {
    /// Convert to [`ModelSettings`]
    ///
    /// Invalid fields are replaced by their defaults and reported.
    pub fn to_model_settings(&self) -> (ModelSettings, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut settings = ModelSettings::default().with_web_search(self.web_search);

        match ModelId::new(&self.id) {
            Ok(id) => settings = settings.with_model(id),
            Err(_) => issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "model.id".to_string(),
                },
                "model.id is empty, using the default model",
            )),
        }

        match Temperature::new(self.temperature) {
            Ok(t) => settings = settings.with_temperature(t),
            Err(e) => issues.push(ConfigIssue::error(
                ConfigIssueCode::TemperatureOutOfRange {
                    value: self.temperature,
                },
                format!("model.temperature: {}", e),
            )),
        }

        (settings, issues)
    }

    /// Warn when `id` is not among `available`
    pub fn validate_available(&self) -> Vec<ConfigIssue> {
        let id = self.id.trim();
        if id.is_empty() || self.available.is_empty() || self.available.iter().any(|m| m == id) {
            return Vec::new();
        }
        vec![ConfigIssue::warning(
            ConfigIssueCode::ModelNotListed {
                model: id.to_string(),
            },
            format!("model.id '{}' is not listed in model.available", id),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_defaults() {
        let config = FileModelConfig::default();
        let (settings, issues) = config.to_model_settings();
        assert!(issues.is_empty());
        assert_eq!(settings, ModelSettings::default());
        assert_eq!(config.available.len(), KNOWN_MODELS.len());
    }

    #[test]
    fn test_id_is_trimmed() {
        let config = FileModelConfig {
            id: "  gpt-4o ".to_string(),
            ..Default::default()
        };
        let (settings, issues) = config.to_model_settings();
        assert!(issues.is_empty());
        assert_eq!(settings.model_id.as_str(), "gpt-4o");
        assert!(config.validate_available().is_empty());
    }

    #[test]
    fn test_unlisted_model_is_a_warning() {
        let config = FileModelConfig {
            id: "gpt-5".to_string(),
            available: vec!["gpt-4o".to_string()],
            ..Default::default()
        };
        let issues = config.validate_available();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ModelNotListed {
                model: "gpt-5".to_string()
            }
        );
    }

    #[test]
    fn test_bad_temperature_keeps_other_fields() {
        let config = FileModelConfig {
            id: "gpt-4o".to_string(),
            temperature: -0.5,
            web_search: true,
            ..Default::default()
        };
        let (settings, issues) = config.to_model_settings();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(settings.model_id.as_str(), "gpt-4o");
        assert_eq!(settings.temperature, Temperature::default());
        assert!(settings.web_search_enabled);
    }
}
