//! Settings port interface

use std::path::PathBuf;

use crate::domain::config::NotificationSettings;
use crate::domain::error::ConfigError;

/// Port for reading notification settings
pub trait SettingsStore: Send + Sync {
    /// Load settings from storage.
    ///
    /// # Returns
    /// The loaded settings (all None if the file doesn't exist)
    fn load(&self) -> Result<NotificationSettings, ConfigError>;

    /// Get the settings file path.
    fn path(&self) -> PathBuf;

    /// Check if the settings file exists.
    fn exists(&self) -> bool;
}
