//! Application configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validation::Locale;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Regional rule set for phone validation
    #[serde(default)]
    pub locale: Locale,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// File holding persisted preferences
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,

    /// Directory exports are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("profile-manager")
        .join("preferences.toml")
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            log_level: default_log_level(),
            preferences_path: default_preferences_path(),
            export_dir: default_export_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional config file and the environment.
    ///
    /// An explicit `path` must exist; otherwise the standard locations are
    /// searched. Environment variables take precedence over the file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mut config = match path.map(Path::to_path_buf).or_else(Self::find_config_file) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Override fields from `PROFILE_MANAGER_*` variables looked up via `var`.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(locale) = var("PROFILE_MANAGER_LOCALE") {
            self.locale = locale.parse().map_err(ConfigError::InvalidLocale)?;
        }

        if let Some(level) = var("PROFILE_MANAGER_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(path) = var("PROFILE_MANAGER_PREFERENCES_PATH") {
            self.preferences_path = PathBuf::from(path);
        }

        if let Some(dir) = var("PROFILE_MANAGER_EXPORT_DIR") {
            self.export_dir = PathBuf::from(dir);
        }

        Ok(())
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let locations = [
            PathBuf::from("profile-manager.toml"),
            dirs::config_dir()
                .map(|p| p.join("profile-manager").join("config.toml"))
                .unwrap_or_default(),
        ];

        locations
            .into_iter()
            .find(|p| !p.as_os_str().is_empty() && p.exists())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
}
