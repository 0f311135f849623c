//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod gntp;
pub mod notification;
pub mod scripting;
pub mod settings;

// Re-export common types
pub use gntp::{ApplicationInfo, GntpClient, GntpConnector, GntpError, GntpNotification};
pub use notification::{CapabilityResult, Notification};
pub use scripting::{
    ScriptEngineManager, ScriptError, ScriptEvaluator, ScriptValue, APPLESCRIPT_ENGINE,
};
pub use settings::SettingsStore;
