//! Directory-backed preset store.
//!
//! Each preset is one UTF-8 text file: `<dir>/<name>.txt`. The directory is
//! created on first use.

use persona_application::ports::preset_store::{PresetStore, PresetStoreError};
use persona_domain::PresetName;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const EXTENSION: &str = "txt";

/// [`PresetStore`] keeping one text file per preset
#[derive(Debug, Clone)]
pub struct FilePresetStore {
    dir: PathBuf,
}

impl FilePresetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a preset is stored in
    pub fn path_for(&self, name: &PresetName) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }

    fn ensure_dir(&self) -> Result<(), PresetStoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| PresetStoreError::io(&self.dir, e))
    }
}

impl PresetStore for FilePresetStore {
    fn save(&self, name: &PresetName, text: &str) -> Result<PathBuf, PresetStoreError> {
        self.ensure_dir()?;
        let path = self.path_for(name);
        fs::write(&path, text).map_err(|e| PresetStoreError::io(&path, e))?;
        debug!("Wrote preset {}", path.display());
        Ok(path)
    }

    fn list(&self) -> Result<Vec<PresetName>, PresetStoreError> {
        self.ensure_dir()?;

        let pattern = format!(
            "{}/*.{EXTENSION}",
            glob::Pattern::escape(&self.dir.to_string_lossy())
        );
        let paths = glob::glob(&pattern).map_err(|e| {
            PresetStoreError::io(&self.dir, std::io::Error::new(ErrorKind::InvalidInput, e))
        })?;

        let mut names = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                PresetStoreError::io(path, e.into_error())
            })?;
            if !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("Skipping preset file with non UTF-8 name: {}", path.display());
                continue;
            };
            match PresetName::new(stem) {
                Ok(name) => names.push(name),
                Err(e) => debug!("Skipping {}: {}", path.display(), e),
            }
        }

        names.sort();
        Ok(names)
    }

    fn load(&self, name: &PresetName) -> Result<String, PresetStoreError> {
        let path = self.path_for(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(PresetStoreError::io(path, e)),
        }
    }

    fn delete(&self, name: &PresetName) -> Result<bool, PresetStoreError> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PresetStoreError::io(path, e)),
        }
    }
}
