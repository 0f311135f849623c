//! Scripting host port interface

use thiserror::Error;

/// Name of the engine that evaluates AppleScript
pub const APPLESCRIPT_ENGINE: &str = "AppleScript";

/// Scripting host errors
#[derive(Debug, Clone, Error)]
pub enum ScriptError {
    #[error("osascript not found")]
    HostNotFound,

    #[error("Could not execute script: {0}")]
    ExecutionFailed(String),

    #[error("Script error: {0}")]
    ScriptFailed(String),
}

/// Value returned by an evaluated program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptValue {
    Integer(i64),
    Boolean(bool),
    Text(String),
    Nothing,
}

impl ScriptValue {
    /// Interpret raw scripting host output
    pub fn parse(output: &str) -> Self {
        let output = output.trim();
        if output.is_empty() {
            return Self::Nothing;
        }
        if let Ok(n) = output.parse::<i64>() {
            return Self::Integer(n);
        }
        match output {
            "true" => Self::Boolean(true),
            "false" => Self::Boolean(false),
            _ => Self::Text(output.to_string()),
        }
    }

    /// Whether the value reports a count greater than zero.
    /// A boolean counts as the already-evaluated comparison.
    pub fn is_positive_count(&self) -> bool {
        match self {
            Self::Integer(n) => *n > 0,
            Self::Boolean(b) => *b,
            Self::Text(text) => matches!(Self::parse(text), Self::Integer(n) if n > 0),
            Self::Nothing => false,
        }
    }
}

/// Port for evaluating a program in an external scripting host
pub trait ScriptEvaluator: Send {
    /// Evaluate a complete program and return its result.
    fn evaluate(&self, script: &str) -> Result<ScriptValue, ScriptError>;
}

/// Port for looking up a scripting engine by name
pub trait ScriptEngineManager: Send {
    /// Return an evaluator for the named language, if the host has one.
    fn engine_by_name(&self, name: &str) -> Option<Box<dyn ScriptEvaluator>>;
}
