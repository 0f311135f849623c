//! growl-notify - Growl desktop notifications for OS X and Windows
//!
//! This crate shows desktop notifications through Growl, choosing the
//! platform backend once when a [`GrowlNotification`] is created.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, settings and errors
//! - **Application**: The notification contract and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (AppleScript via osascript,
//!   GNTP over TCP, TOML settings file)
//! - **Growl**: The facade that selects a backend for the host

pub mod application;
pub mod domain;
pub mod growl;
pub mod infrastructure;

pub use application::{CapabilityResult, Notification};
pub use domain::{
    ApplicationName, BackendKind, ConfigError, DisplayDuration, HostOs, InvalidArgumentError,
    NotificationError, NotificationSettings, TimeUnit, UnsupportedCapability,
};
pub use growl::{Backend, GrowlNotification, Platform};
