//! Preset management use case
//!
//! Wraps a [`PresetStore`] with the behavior the prompt editor needs:
//! seeding an empty store, finding the preset that matches the active
//! persona, and loading a preset into the editor.

use crate::ports::preset_store::{PresetStore, PresetStoreError};
use persona_domain::{PresetName, SessionState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Preset operations used by the prompt editor
pub struct PresetCatalog {
    store: Arc<dyn PresetStore>,
}

impl PresetCatalog {
    pub fn new(store: Arc<dyn PresetStore>) -> Self {
        Self { store }
    }

    /// Names of all presets
    ///
    /// An empty store is seeded with a `default` preset holding
    /// `active_persona`, so the selection list is never empty.
    pub fn list(&self, active_persona: &str) -> Result<Vec<PresetName>, PresetStoreError> {
        let names = self.store.list()?;
        if !names.is_empty() {
            return Ok(names);
        }

        let name = PresetName::default_name();
        info!("No presets found, seeding '{}' from the active persona", name);
        self.store.save(&name, active_persona)?;
        Ok(vec![name])
    }

    pub fn save(&self, name: &PresetName, text: &str) -> Result<PathBuf, PresetStoreError> {
        let path = self.store.save(name, text)?;
        debug!("Saved preset '{}' to {}", name, path.display());
        Ok(path)
    }

    /// Preset text, or `""` if there is no such preset
    pub fn load(&self, name: &PresetName) -> Result<String, PresetStoreError> {
        self.store.load(name)
    }

    pub fn delete(&self, name: &PresetName) -> Result<bool, PresetStoreError> {
        let removed = self.store.delete(name)?;
        if removed {
            info!("Deleted preset '{}'", name);
        }
        Ok(removed)
    }

    /// First preset (in list order) whose text equals `active_persona`
    pub fn matching_preset(
        &self,
        active_persona: &str,
    ) -> Result<Option<PresetName>, PresetStoreError> {
        for name in self.list(active_persona)? {
            if self.store.load(&name)? == active_persona {
                return Ok(Some(name));
            }
        }
        Ok(None)
    }

    /// Put a preset's text into the session's editor
    ///
    /// Returns `false` and leaves the editor alone when the preset does not
    /// exist. The active persona is not changed; applying the editor is a
    /// separate step.
    pub fn load_into_editor(
        &self,
        session: &mut SessionState,
        name: &PresetName,
    ) -> Result<bool, PresetStoreError> {
        let text = self.store.load(name)?;
        if text.is_empty() {
            return Ok(false);
        }
        session.set_editor(text);
        Ok(true)
    }
}
