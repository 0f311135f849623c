//! OS X notification infrastructure module
//!
//! Drives Growl through AppleScript programs evaluated by `osascript`.

mod growl;
pub mod growl_script;
mod osascript;
pub mod script;

pub use growl::{OsxGrowlNotification, NO_ENGINE_MESSAGE, NO_PROCESS_MESSAGE};
pub use osascript::{OsascriptEvaluator, SystemScriptEngines};
pub use script::ScriptBuilder;
