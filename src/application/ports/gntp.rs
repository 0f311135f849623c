//! GNTP relay port interface

use thiserror::Error;

use crate::domain::notification::DisplayDuration;

/// GNTP client errors
#[derive(Debug, Clone, Error)]
pub enum GntpError {
    #[error("Failed to connect to GNTP relay at {address}: {message}")]
    ConnectFailed { address: String, message: String },

    #[error("GNTP I/O error: {0}")]
    Io(String),

    #[error("GNTP relay responded with error {code}: {description}")]
    Rejected { code: String, description: String },

    #[error("Malformed GNTP response: {0}")]
    MalformedResponse(String),

    #[error("GNTP client has been shut down")]
    ShutDown,
}

/// Application descriptor registered with the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationInfo {
    pub name: String,
    pub notification_types: Vec<String>,
}

impl ApplicationInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notification_types: Vec::new(),
        }
    }

    /// Add a notification type, enabled by default
    pub fn with_notification_type(mut self, name: impl Into<String>) -> Self {
        self.notification_types.push(name.into());
        self
    }
}

/// A single notification sent through the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GntpNotification {
    pub application_name: String,
    pub notification_type: String,
    pub title: String,
    pub text: Option<String>,
}

impl GntpNotification {
    /// Notification of the given type for a registered application
    pub fn new(info: &ApplicationInfo, notification_type: &str, title: impl Into<String>) -> Self {
        Self {
            application_name: info.name.clone(),
            notification_type: notification_type.to_string(),
            title: title.into(),
            text: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Port for a connected GNTP client
pub trait GntpClient: Send {
    /// Register the application and its notification types.
    fn register(&mut self) -> Result<(), GntpError>;

    /// Send a notification, displayed for `duration`.
    fn notify(
        &mut self,
        notification: &GntpNotification,
        duration: DisplayDuration,
    ) -> Result<(), GntpError>;

    /// Shut the client down, waiting at most `duration`.
    fn shutdown(&mut self, duration: DisplayDuration) -> Result<(), GntpError>;
}

/// Port for building a GNTP client bound to a relay
pub trait GntpConnector: Send {
    fn connect(
        &self,
        info: &ApplicationInfo,
        host: &str,
        port: u16,
    ) -> Result<Box<dyn GntpClient>, GntpError>;
}
