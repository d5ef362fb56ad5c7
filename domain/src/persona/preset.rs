//! Persona preset value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Name of a stored preset (Value Object)
///
/// The name doubles as a file stem, so it must be usable as a single path
/// component on every platform we store presets on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PresetName(String);

impl PresetName {
    /// Name of the preset seeded into an empty store
    pub const DEFAULT: &'static str = "default";

    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reject = |reason: &'static str| DomainError::InvalidPresetName {
            name: name.clone(),
            reason,
        };

        if name.trim().is_empty() {
            return Err(reject("name is empty"));
        }
        if name != name.trim() {
            return Err(reject("name has leading or trailing whitespace"));
        }
        if name.contains(['/', '\\']) {
            return Err(reject("name contains a path separator"));
        }
        if name.contains('\0') {
            return Err(reject("name contains a NUL byte"));
        }
        if name.starts_with('.') {
            return Err(reject("name starts with a dot"));
        }
        Ok(Self(name))
    }

    pub fn default_name() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PresetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PresetName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::new(s)
    }
}

impl TryFrom<String> for PresetName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PresetName::new(value)
    }
}

impl From<PresetName> for String {
    fn from(name: PresetName) -> Self {
        name.0
    }
}

/// A named persona snapshot (Value Object)
///
/// Presets are not versioned: saving under an existing name replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: PresetName,
    pub text: String,
}

impl Preset {
    pub fn new(name: PresetName, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
        }
    }
}
