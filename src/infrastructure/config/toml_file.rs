//! TOML settings file adapter

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::application::ports::SettingsStore;
use crate::domain::config::NotificationSettings;
use crate::domain::error::ConfigError;

/// Settings read from a TOML file
pub struct TomlSettingsFile {
    path: PathBuf,
}

impl TomlSettingsFile {
    /// Create with the default path under the user config directory
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("growl-notify");

        Self {
            path: config_dir.join("settings.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse and validate TOML content
    fn parse_toml(content: &str) -> Result<NotificationSettings, ConfigError> {
        let settings: NotificationSettings =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for TomlSettingsFile {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for TomlSettingsFile {
    fn load(&self) -> Result<NotificationSettings, ConfigError> {
        if !self.exists() {
            debug!(path = %self.path.display(), "No settings file, using defaults");
            return Ok(NotificationSettings::empty());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
