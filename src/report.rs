// src/report.rs

//! Console reporting of run outcomes.
//!
//! Every outcome, good or bad, ends up as a few lines on stdout. Nothing here
//! affects the process exit code.

use tracing::info;

use crate::errors::{Result, RunError};
use crate::exec::RunOutcome;

pub const SUCCESS_MESSAGE: &str = "Code executed successfully.";
pub const NOT_FOUND_MESSAGE: &str = "Error: Code file or input file not found.";

/// Render an outcome as console lines.
pub fn render(result: &Result<RunOutcome>) -> Vec<String> {
    match result {
        Ok(_) => vec![SUCCESS_MESSAGE.to_string()],
        Err(RunError::ProcessFailed {
            command,
            status,
            stderr,
        }) => vec![
            format!("Error executing code: {command} exited with {status}"),
            format!("Stderr: {stderr}"),
        ],
        Err(RunError::PathNotFound { .. }) => vec![NOT_FOUND_MESSAGE.to_string()],
        Err(RunError::Unexpected(err)) => {
            vec![format!("An unexpected error occurred: {err:#}")]
        }
    }
}

/// Log and print an outcome.
pub fn print(result: &Result<RunOutcome>) {
    if let Err(err) = result {
        info!(error = %err, "script run failed");
    }
    for line in render(result) {
        println!("{line}");
    }
}
