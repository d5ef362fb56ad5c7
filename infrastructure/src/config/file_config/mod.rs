//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They convert into domain and application types, reporting questionable
//! values as [`ConfigIssue`]s and falling back to defaults for them.

mod agent;
mod chat;
mod model;
mod persona;

pub use agent::FileAgentConfig;
pub use chat::FileChatConfig;
pub use model::FileModelConfig;
pub use persona::FilePersonaConfig;

use persona_application::ChatParams;
use persona_domain::{ConfigIssue, SessionState};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection and sampling
    pub model: FileModelConfig,
    /// Agent cache settings
    pub agent: FileAgentConfig,
    /// Persona text and preset location
    pub persona: FilePersonaConfig,
    /// Chat behavior
    pub chat: FileChatConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.to_model_settings().1);
        issues.extend(self.model.validate_available());
        issues.extend(self.agent.validate());
        issues.extend(self.chat.validate());
        issues
    }

    /// Parameters for the agent cache and completion invoker
    pub fn to_chat_params(&self) -> ChatParams {
        ChatParams::default()
            .with_agent_ttl(self.agent.cache_ttl())
            .with_max_tokens(self.model.max_tokens)
            .with_fallback_reply(self.chat.fallback_reply())
    }

    /// Initial state for a new session
    pub fn new_session(&self) -> SessionState {
        let (settings, _) = self.model.to_model_settings();
        SessionState::new(settings, self.persona.persona())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_domain::{ConfigIssueCode, DEFAULT_PERSONA, ModelSettings};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
id = "gpt-4o"
temperature = 0.9
web_search = true
max_tokens = 400
available = ["gpt-4o", "gpt-4o-mini"]

[agent]
cache_ttl_secs = 600

[persona]
text = "You are terse."
presets_dir = "/var/lib/persona-chat/presets"

[chat]
fallback_reply = "Entschuldigung, ich kann im Moment nicht antworten."
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let params = config.to_chat_params();
        assert_eq!(params.agent_ttl, Duration::from_secs(600));
        assert_eq!(params.max_tokens, 400);
        assert!(params.fallback_reply.starts_with("Entschuldigung"));

        let session = config.new_session();
        assert_eq!(session.settings().model_id.as_str(), "gpt-4o");
        assert_eq!(session.settings().temperature.value(), 0.9);
        assert!(session.settings().web_search_enabled);
        assert_eq!(session.persona().text(), "You are terse.");
        assert_eq!(
            config.persona.presets_dir(),
            std::path::PathBuf::from("/var/lib/persona-chat/presets")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[model]
temperature = 1.2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let session = config.new_session();
        assert_eq!(session.settings().temperature.value(), 1.2);
        // Defaults should apply
        assert_eq!(session.settings().model_id.as_str(), "gpt-4o-mini");
        assert_eq!(session.persona().text(), DEFAULT_PERSONA);
        assert_eq!(config.to_chat_params(), ChatParams::default());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.to_chat_params(), ChatParams::default());
        assert_eq!(config.new_session().settings(), &ModelSettings::default());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[model]
id = ""
temperature = 5.0

[agent]
cache_ttl_secs = 0

[chat]
fallback_reply = "  "
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let codes: Vec<_> = config.validate().into_iter().map(|i| i.code).collect();

        assert!(codes.contains(&ConfigIssueCode::EmptyModelName {
            field: "model.id".to_string()
        }));
        assert!(codes.contains(&ConfigIssueCode::TemperatureOutOfRange { value: 5.0 }));
        assert!(codes.contains(&ConfigIssueCode::ZeroCacheTtl));
        assert!(codes.contains(&ConfigIssueCode::EmptyFallbackReply));

        // Invalid values fall back to defaults
        assert_eq!(config.new_session().settings(), &ModelSettings::default());
        assert_eq!(
            config.to_chat_params().fallback_reply,
            ChatParams::default().fallback_reply
        );
    }
}
