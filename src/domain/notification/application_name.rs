//! Application name value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidArgumentError;

/// Name under which an application registers with the notifier.
/// Non-empty and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationName(String);

impl ApplicationName {
    /// Validate and wrap an application name
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidArgumentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidArgumentError::new(
                "application name",
                "cannot be empty",
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ApplicationName {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ApplicationName {
    type Error = InvalidArgumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for ApplicationName {
    type Error = InvalidArgumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for ApplicationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
