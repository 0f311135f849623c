//! Application layer - Port interfaces
//!
//! Contains the notification contract and the trait definitions
//! for the external scripting host and GNTP relay.

pub mod ports;

pub use ports::{CapabilityResult, Notification};
