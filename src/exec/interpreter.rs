// src/exec/interpreter.rs

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use tokio::process::Command;

/// Program the CLI always runs code files with.
pub const DEFAULT_PROGRAM: &str = "python";

/// Command prefix used to execute a code file.
///
/// The code file path is appended as the final argument, so the default
/// interpreter runs `python <code_filepath>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    program: OsString,
    args: Vec<OsString>,
}

impl Interpreter {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument placed before the code file path.
    pub fn with_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Build the command for `code_file`. Stdio is left to the caller.
    pub fn command(&self, code_file: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(code_file);
        cmd
    }

    /// Human-readable command line, used in logs and failure messages.
    pub fn display_for(&self, code_file: &Path) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.program.to_string_lossy().into_owned());
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.push(code_file.to_string_lossy().into_owned());
        parts.join(" ")
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
