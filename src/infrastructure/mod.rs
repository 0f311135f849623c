//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with osascript, the GNTP relay and the settings file.

pub mod config;
pub mod osx;
pub mod windows;

// Re-export adapters
pub use config::TomlSettingsFile;
pub use osx::{OsascriptEvaluator, OsxGrowlNotification, ScriptBuilder, SystemScriptEngines};
pub use windows::{TcpGntpConnector, WindowsGrowlNotification};
