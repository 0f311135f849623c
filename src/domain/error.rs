//! Domain error types

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed underlying cause carried by a notification failure
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Error raised while setting up, displaying or tearing down a notification.
///
/// `UnsupportedOperatingSystem` is the specialization raised when a backend's
/// host precondition does not hold, so callers can tell "wrong platform"
/// apart from "right platform, but it failed".
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("{message}")]
    Failure {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("{0}")]
    UnsupportedOperatingSystem(String),
}

impl NotificationError {
    /// Failure with a message and no underlying cause
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            source: None,
        }
    }

    /// Failure wrapping an underlying cause
    pub fn caused_by(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        Self::Failure {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn unsupported_os(message: impl Into<String>) -> Self {
        Self::UnsupportedOperatingSystem(message.into())
    }

    /// Whether this failure is the wrong-platform specialization
    pub fn is_unsupported_os(&self) -> bool {
        matches!(self, Self::UnsupportedOperatingSystem(_))
    }

    /// Human-readable message, without the cause chain
    pub fn message(&self) -> &str {
        match self {
            Self::Failure { message, .. } => message,
            Self::UnsupportedOperatingSystem(message) => message,
        }
    }
}

/// Local validation failure for arguments such as the application name or
/// the display duration. Raised before any backend state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {argument}: {message}")]
pub struct InvalidArgumentError {
    pub argument: &'static str,
    pub message: String,
}

impl InvalidArgumentError {
    pub fn new(argument: &'static str, message: impl Into<String>) -> Self {
        Self {
            argument,
            message: message.into(),
        }
    }
}

/// A capability the active backend does not implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{capability} is not supported by the {backend} backend")]
pub struct UnsupportedCapability {
    pub backend: &'static str,
    pub capability: &'static str,
}

/// Error when loading notification settings
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    ReadError(String),

    #[error("Failed to parse settings file: {0}")]
    ParseError(String),

    #[error("Invalid setting value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn failure_keeps_cause() {
        let err = NotificationError::caused_by(
            "Could not register",
            io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        );
        assert_eq!(err.to_string(), "Could not register");
        assert!(!err.is_unsupported_os());
        let source = StdError::source(&err).expect("cause is kept");
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn unsupported_os_is_distinguished() {
        let err = NotificationError::unsupported_os("Operating System is not Windows");
        assert!(err.is_unsupported_os());
        assert_eq!(err.message(), "Operating System is not Windows");
        assert!(StdError::source(&err).is_none());
    }

    #[test]
    fn invalid_argument_display() {
        let err = InvalidArgumentError::new("duration", "cannot be less than 1");
        assert_eq!(err.to_string(), "Invalid duration: cannot be less than 1");
    }

    #[test]
    fn unsupported_capability_display() {
        let err = UnsupportedCapability {
            backend: "Windows",
            capability: "callback URL",
        };
        assert_eq!(
            err.to_string(),
            "callback URL is not supported by the Windows backend"
        );
    }
}
