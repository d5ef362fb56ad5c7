//! Persona configuration from TOML (`[persona]` section)

use persona_domain::Persona;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persona configuration
///
/// # Example
///
/// ```toml
/// [persona]
/// text = "You are a grumpy lighthouse keeper."
/// presets_dir = "presets"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonaConfig {
    /// Replaces the built-in persona when set
    pub text: Option<String>,
    /// Directory holding `<name>.txt` preset files
    pub presets_dir: Option<PathBuf>,
}

impl FilePersonaConfig {
    /// Persona for new sessions; blank text counts as unset
    pub fn persona(&self) -> Persona {
        match self.text.as_deref() {
            Some(text) if !text.trim().is_empty() => Persona::new(text),
            _ => Persona::default(),
        }
    }

    /// Preset directory, `presets` relative to the working directory by default
    pub fn presets_dir(&self) -> PathBuf {
        self.presets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("presets"))
    }
}
