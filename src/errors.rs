// src/errors.rs

//! Crate-wide error types.
//!
//! `RunError` is what the runner hands back to the CLI layer; the CLI renders
//! it to the console and carries on (see [`crate::report`]).

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Which of the three paths of a run could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Code,
    Input,
    Output,
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathRole::Code => "code file",
            PathRole::Input => "input file",
            PathRole::Output => "output file",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum RunError {
    /// The child ran to completion but did not exit successfully.
    #[error("{command} exited with {status}")]
    ProcessFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{role} not found: {path:?}")]
    PathNotFound { role: PathRole, path: PathBuf },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl RunError {
    /// Exit code of a failed child, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::ProcessFailed { status, .. } => status.code(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunError>;

/// True if any error in the chain is an `io::Error` of kind `NotFound`.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
    })
}
