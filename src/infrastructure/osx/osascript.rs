//! osascript scripting host adapter

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::application::ports::{
    ScriptEngineManager, ScriptError, ScriptEvaluator, ScriptValue, APPLESCRIPT_ENGINE,
};

/// Evaluates AppleScript by piping the program into `osascript -`
pub struct OsascriptEvaluator {
    program: String,
}

impl OsascriptEvaluator {
    /// Create an evaluator using `osascript` from PATH
    pub fn new() -> Self {
        Self {
            program: "osascript".to_string(),
        }
    }

    /// Create with a custom interpreter binary
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OsascriptEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptEvaluator for OsascriptEvaluator {
    fn evaluate(&self, script: &str) -> Result<ScriptValue, ScriptError> {
        let mut child = Command::new(&self.program)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ScriptError::HostNotFound
                } else {
                    ScriptError::ExecutionFailed(e.to_string())
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(script.as_bytes()) {
                drop(stdin);
                // Reap the interpreter before reporting the write failure
                let _ = child.kill();
                let _ = child.wait();
                return Err(ScriptError::ExecutionFailed(e.to_string()));
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| ScriptError::ExecutionFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScriptError::ScriptFailed(format!(
                "{} exited with status {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(output = %stdout.trim(), "osascript finished");
        Ok(ScriptValue::parse(&stdout))
    }
}

/// The host's scripting engines. Only AppleScript is available.
#[derive(Debug, Default)]
pub struct SystemScriptEngines;

impl SystemScriptEngines {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptEngineManager for SystemScriptEngines {
    fn engine_by_name(&self, name: &str) -> Option<Box<dyn ScriptEvaluator>> {
        if name.eq_ignore_ascii_case(APPLESCRIPT_ENGINE) {
            Some(Box::new(OsascriptEvaluator::new()))
        } else {
            None
        }
    }
}
