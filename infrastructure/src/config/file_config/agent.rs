//! Agent cache configuration from TOML (`[agent]` section)

use persona_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Agent cache configuration
///
/// # Example
///
/// ```toml
/// [agent]
/// cache_ttl_secs = 3600
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Seconds a built agent handle stays reusable
    pub cache_ttl_secs: u64,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 3600,
        }
    }
}

impl FileAgentConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.cache_ttl_secs > 0 {
            return Vec::new();
        }
        vec![ConfigIssue::warning(
            ConfigIssueCode::ZeroCacheTtl,
            "agent.cache_ttl_secs is 0, every turn will rebuild the agent",
        )]
    }
}
