//! Profile storage: a JSON file in the platform data directory, or memory.

use crate::core::constants::SAVE_FILE_NAME;
use crate::core::profile::PlayerProfile;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine a data directory for saves")]
    NoDataDir,
    #[error("profile I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("profile could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where profiles go between sessions.
pub trait ProfileStore {
    /// Returns `Ok(None)` when nothing has been saved yet. Malformed saves
    /// load leniently rather than failing.
    fn load(&self) -> Result<Option<PlayerProfile>, StoreError>;

    fn save(&mut self, profile: &PlayerProfile) -> Result<(), StoreError>;
}

/// Pretty-printed JSON on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Uses the platform data directory, e.g. `~/.local/share/driftline`.
    pub fn new() -> Result<Self, StoreError> {
        let project_dirs =
            ProjectDirs::from("", "", "driftline").ok_or(StoreError::NoDataDir)?;
        Ok(Self::at_path(project_dirs.data_dir().join(SAVE_FILE_NAME)))
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<PlayerProfile>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %self.path.display(), "loaded profile");
        Ok(Some(PlayerProfile::from_json_lenient(&text)))
    }

    fn save(&mut self, profile: &PlayerProfile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(profile)?;

        // Write then rename so a crash mid-write keeps the previous save
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        info!(path = %self.path.display(), gold = profile.gold, "profile saved");
        Ok(())
    }
}

/// Keeps the last save as a JSON string. Used by tests and the simulator.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    saved: Option<String>,
    save_count: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw text, as if a previous run had written it.
    pub fn with_raw(text: &str) -> Self {
        Self {
            saved: Some(text.to_string()),
            save_count: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.saved.as_deref()
    }

    pub fn save_count(&self) -> u32 {
        self.save_count
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Option<PlayerProfile>, StoreError> {
        Ok(self.saved.as_deref().map(PlayerProfile::from_json_lenient))
    }

    fn save(&mut self, profile: &PlayerProfile) -> Result<(), StoreError> {
        self.saved = Some(serde_json::to_string_pretty(profile)?);
        self.save_count += 1;
        Ok(())
    }
}
