//! Notification settings value object

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::ConfigError;
use crate::domain::notification::{DisplayDuration, TimeUnit};

/// Bundle identifier of the Growl helper on OS X
pub const DEFAULT_NOTIFIER_BUNDLE_ID: &str = "com.Growl.GrowlHelperApp";

/// Application whose icon is used for registered notifications
pub const DEFAULT_ICON_APPLICATION: &str = "Script Editor";

/// Host of the local Growl for Windows relay
pub const DEFAULT_RELAY_HOST: &str = "localhost";

/// Default GNTP port
pub const DEFAULT_RELAY_PORT: u16 = 23053;

/// OS X specific settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsxSettings {
    pub notifier_bundle_id: Option<String>,
    pub icon_application: Option<String>,
}

/// Windows specific settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsSettings {
    pub relay_host: Option<String>,
    pub relay_port: Option<u16>,
    pub duration: Option<i64>,
    pub time_unit: Option<String>,
}

/// Notification settings.
/// All fields are optional to support partial files and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub sticky: Option<bool>,
    pub callback_url: Option<String>,
    pub osx: Option<OsxSettings>,
    pub windows: Option<WindowsSettings>,
}

impl NotificationSettings {
    /// Create settings with default values
    pub fn defaults() -> Self {
        Self {
            sticky: Some(false),
            callback_url: None,
            osx: Some(OsxSettings {
                notifier_bundle_id: Some(DEFAULT_NOTIFIER_BUNDLE_ID.to_string()),
                icon_application: Some(DEFAULT_ICON_APPLICATION.to_string()),
            }),
            windows: Some(WindowsSettings {
                relay_host: Some(DEFAULT_RELAY_HOST.to_string()),
                relay_port: Some(DEFAULT_RELAY_PORT),
                duration: Some(DisplayDuration::default().amount() as i64),
                time_unit: Some(TimeUnit::default().to_string()),
            }),
        }
    }

    /// Create empty settings (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge these settings with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            sticky: other.sticky.or(self.sticky),
            callback_url: other.callback_url.or(self.callback_url),
            osx: match (self.osx, other.osx) {
                (Some(b), Some(o)) => Some(OsxSettings {
                    notifier_bundle_id: o.notifier_bundle_id.or(b.notifier_bundle_id),
                    icon_application: o.icon_application.or(b.icon_application),
                }),
                (b, o) => o.or(b),
            },
            windows: match (self.windows, other.windows) {
                (Some(b), Some(o)) => Some(WindowsSettings {
                    relay_host: o.relay_host.or(b.relay_host),
                    relay_port: o.relay_port.or(b.relay_port),
                    duration: o.duration.or(b.duration),
                    time_unit: o.time_unit.or(b.time_unit),
                }),
                (b, o) => o.or(b),
            },
        }
    }

    /// Check every set value, so a bad file fails at load time
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display_duration()?;
        self.callback_url()?;
        Ok(())
    }

    /// Get sticky setting, or false if not set
    pub fn sticky_or_default(&self) -> bool {
        self.sticky.unwrap_or(false)
    }

    /// Parse the callback URL, if one is set
    pub fn callback_url(&self) -> Result<Option<Url>, ConfigError> {
        self.callback_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|e| ConfigError::ValidationError {
                    key: "callback_url".to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    /// Get the notifier bundle identifier, or the Growl helper if not set
    pub fn notifier_bundle_id_or_default(&self) -> &str {
        self.osx
            .as_ref()
            .and_then(|o| o.notifier_bundle_id.as_deref())
            .unwrap_or(DEFAULT_NOTIFIER_BUNDLE_ID)
    }

    /// Get the icon application, or "Script Editor" if not set
    pub fn icon_application_or_default(&self) -> &str {
        self.osx
            .as_ref()
            .and_then(|o| o.icon_application.as_deref())
            .unwrap_or(DEFAULT_ICON_APPLICATION)
    }

    /// Get the relay host, or "localhost" if not set
    pub fn relay_host_or_default(&self) -> &str {
        self.windows
            .as_ref()
            .and_then(|w| w.relay_host.as_deref())
            .unwrap_or(DEFAULT_RELAY_HOST)
    }

    /// Get the relay port, or 23053 if not set
    pub fn relay_port_or_default(&self) -> u16 {
        self.windows
            .as_ref()
            .and_then(|w| w.relay_port)
            .unwrap_or(DEFAULT_RELAY_PORT)
    }

    /// Build the display duration from the set amount and unit, falling
    /// back to 3 seconds for whichever part is missing
    pub fn display_duration(&self) -> Result<DisplayDuration, ConfigError> {
        let windows = self.windows.as_ref();
        let mut duration = DisplayDuration::default();

        if let Some(amount) = windows.and_then(|w| w.duration) {
            duration = duration
                .with_amount(amount)
                .map_err(|e| ConfigError::ValidationError {
                    key: "windows.duration".to_string(),
                    message: e.message,
                })?;
        }

        if let Some(unit) = windows.and_then(|w| w.time_unit.as_deref()) {
            let unit = unit
                .parse::<TimeUnit>()
                .map_err(|e| ConfigError::ValidationError {
                    key: "windows.time_unit".to_string(),
                    message: e.message,
                })?;
            duration = duration
                .with_unit(Some(unit))
                .map_err(|e| ConfigError::ValidationError {
                    key: "windows.time_unit".to_string(),
                    message: e.message,
                })?;
        }

        Ok(duration)
    }
}
