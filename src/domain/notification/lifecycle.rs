//! Notification handle lifecycle

use std::fmt;

/// Lifecycle of a notification handle.
///
/// `open` is valid from `Unopened`, `show` only while `Open`, and `close`
/// moves to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Unopened,
    Open,
    Closed,
}

impl LifecycleState {
    pub const fn can_open(&self) -> bool {
        matches!(self, Self::Unopened)
    }

    pub const fn can_show(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unopened => write!(f, "unopened"),
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
