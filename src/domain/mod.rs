//! Domain layer - Core value objects and errors
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;
pub mod platform;

// Re-export common types
pub use config::NotificationSettings;
pub use error::*;
pub use notification::{ApplicationName, DisplayDuration, LifecycleState, TimeUnit};
pub use platform::{BackendKind, HostOs};
