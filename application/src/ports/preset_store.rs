//! Preset store port
//!
//! Persistence for named persona presets. Presets are plain text keyed by
//! name; there is no versioning and the last write wins.

use persona_domain::PresetName;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing presets
#[derive(Error, Debug)]
pub enum PresetStoreError {
    #[error("Preset storage error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PresetStoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetStoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Storage for persona presets
///
/// Implementations live in the infrastructure layer.
pub trait PresetStore: Send + Sync {
    /// Write or overwrite a preset, returning where it was stored
    fn save(&self, name: &PresetName, text: &str) -> Result<PathBuf, PresetStoreError>;

    /// Names of all stored presets
    fn list(&self) -> Result<Vec<PresetName>, PresetStoreError>;

    /// Text of a preset, or an empty string if no such preset exists
    fn load(&self, name: &PresetName) -> Result<String, PresetStoreError>;

    /// Remove a preset; returns `false` if it did not exist
    fn delete(&self, name: &PresetName) -> Result<bool, PresetStoreError>;
}
