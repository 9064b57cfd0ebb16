//! Persisted user preferences

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Failed to access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse preferences file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type PreferencesResult<T> = Result<T, PreferencesError>;

/// Preferences that survive restarts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Dark color scheme enabled
    #[serde(default)]
    pub dark_mode: bool,
}

/// Reads and writes the preferences file
#[derive(Debug, Clone)]
pub struct PreferencesManager {
    path: PathBuf,
}

impl PreferencesManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads preferences, falling back to defaults if the file is missing
    pub fn load(&self) -> PreferencesResult<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves preferences, creating the parent directory if needed
    pub fn save(&self, preferences: &Preferences) -> PreferencesResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(preferences)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "Saved preferences");
        Ok(())
    }

    /// Persists the dark mode flag and returns the updated preferences
    pub fn set_dark_mode(&self, enabled: bool) -> PreferencesResult<Preferences> {
        let mut preferences = self.load()?;
        preferences.dark_mode = enabled;
        self.save(&preferences)?;
        Ok(preferences)
    }

    /// Deletes the preferences file. Missing files are not an error.
    pub fn clear(&self) -> PreferencesResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Cleared preferences");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = PreferencesManager::new(dir.path().join("preferences.toml"));

        assert_eq!(manager.load().unwrap(), Preferences::default());
    }

    #[test]
    fn test_dark_mode_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        PreferencesManager::new(&path).set_dark_mode(true).unwrap();
        let reloaded = PreferencesManager::new(&path).load().unwrap();

        assert!(reloaded.dark_mode);
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = PreferencesManager::new(dir.path().join("preferences.toml"));
        manager.set_dark_mode(true).unwrap();

        manager.clear().unwrap();
        manager.clear().unwrap();

        assert!(!manager.load().unwrap().dark_mode);
    }
}
