// src/exec/runner.rs

//! The code runner: one child process per call.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use crate::errors::{is_not_found, PathRole, Result, RunError};
use crate::exec::decode::{decode_lossy, decode_text};
use crate::exec::interpreter::Interpreter;
use crate::fs::{FileSystem, RealFileSystem};

/// The three paths of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub code_file: PathBuf,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

impl RunRequest {
    pub fn new(
        code_file: impl Into<PathBuf>,
        input_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            code_file: code_file.into(),
            input_file: input_file.into(),
            output_file: output_file.into(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub output_file: PathBuf,
    pub bytes_written: usize,
    /// Exit code of the child; `Some(0)` for a normal successful exit.
    pub exit_code: Option<i32>,
}

/// Runs code files with a fixed interpreter.
#[derive(Debug, Clone)]
pub struct Runner {
    interpreter: Interpreter,
    fs: Arc<dyn FileSystem>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(Interpreter::default())
    }
}

impl Runner {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            fs: Arc::new(RealFileSystem),
        }
    }

    /// Swap the filesystem used for the input, code and output paths.
    ///
    /// The child process itself still sees the real filesystem, so the code
    /// file must exist on disk for anything past the path checks to work.
    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Filesystem used for the input, code and output paths.
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Execute `req.code_file` with `req.input_file` on stdin and store stdout
    /// in `req.output_file`.
    ///
    /// The output file is only written when the child exits successfully and
    /// its stdout is valid UTF-8.
    pub async fn run(&self, req: &RunRequest) -> Result<RunOutcome> {
        let input = self.fs.open_read(&req.input_file).map_err(|err| {
            classify(err, PathRole::Input, &req.input_file, "opening input file")
        })?;

        if !self.fs.is_file(&req.code_file) {
            return Err(RunError::PathNotFound {
                role: PathRole::Code,
                path: req.code_file.clone(),
            });
        }

        let command_line = self.interpreter.display_for(&req.code_file);
        info!(
            cmd = %command_line,
            input = ?req.input_file,
            input_bytes = ?input.metadata().ok().map(|m| m.len()),
            "starting script process"
        );

        // The opened input file itself becomes the child's stdin, so the
        // child sees a regular, seekable file rather than a pipe.
        let mut cmd = self.interpreter.command(&req.code_file);
        cmd.stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .with_context(|| format!("spawning `{}`", command_line))?;

        let output = child
            .wait_with_output()
            .await
            .with_context(|| format!("waiting for `{}`", command_line))?;

        info!(
            cmd = %command_line,
            exit_code = ?output.status.code(),
            success = output.status.success(),
            stdout_bytes = output.stdout.len(),
            "script process exited"
        );

        if !output.status.success() {
            let stderr = decode_lossy(&output.stderr);
            debug!(cmd = %command_line, "stderr: {}", stderr.trim_end());
            return Err(RunError::ProcessFailed {
                command: command_line,
                status: output.status,
                stderr,
            });
        }

        let text = decode_text(&output.stdout)
            .with_context(|| format!("decoding stdout of `{}` as UTF-8", command_line))?;

        self.fs
            .write(&req.output_file, text.as_bytes())
            .map_err(|err| {
                classify(err, PathRole::Output, &req.output_file, "writing output file")
            })?;

        debug!(output = ?req.output_file, bytes = text.len(), "output file written");

        Ok(RunOutcome {
            output_file: req.output_file.clone(),
            bytes_written: text.len(),
            exit_code: output.status.code(),
        })
    }
}

/// Map a filesystem error onto `PathNotFound` or `Unexpected`.
fn classify(err: anyhow::Error, role: PathRole, path: &Path, what: &str) -> RunError {
    if is_not_found(&err) {
        RunError::PathNotFound {
            role,
            path: path.to_path_buf(),
        }
    } else {
        RunError::Unexpected(err.context(what.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    fn mock_runner(fs: &MockFileSystem) -> Runner {
        Runner::new(Interpreter::new("script-runner-test-no-such-interpreter"))
            .with_fs(Arc::new(fs.clone()))
    }

    #[tokio::test]
    async fn missing_input_is_path_not_found() {
        let fs = MockFileSystem::new();
        fs.add_file("/work/code.py", "print('hi')");
        fs.add_dir("/out");

        let req = RunRequest::new("/work/code.py", "/work/input.txt", "/out/output.txt");
        let err = mock_runner(&fs).run(&req).await.unwrap_err();

        match err {
            RunError::PathNotFound { role, path } => {
                assert_eq!(role, PathRole::Input);
                assert_eq!(path, PathBuf::from("/work/input.txt"));
            }
            other => panic!("expected PathNotFound, got {other:?}"),
        }
        assert!(fs.contents("/out/output.txt").is_none());
    }

    #[tokio::test]
    async fn missing_code_is_path_not_found() {
        let fs = MockFileSystem::new();
        fs.add_file("/work/input.txt", "1 2\n");

        let req = RunRequest::new("/work/code.py", "/work/input.txt", "/work/output.txt");
        let err = mock_runner(&fs).run(&req).await.unwrap_err();

        assert!(matches!(
            err,
            RunError::PathNotFound {
                role: PathRole::Code,
                ..
            }
        ));
        assert!(fs.contents("/work/output.txt").is_none());
    }

    #[tokio::test]
    async fn code_path_that_is_a_directory_is_path_not_found() {
        let fs = MockFileSystem::new();
        fs.add_file("/work/input.txt", "");
        fs.add_dir("/work/code.py");

        let req = RunRequest::new("/work/code.py", "/work/input.txt", "/work/output.txt");
        let err = mock_runner(&fs).run(&req).await.unwrap_err();

        assert!(matches!(err, RunError::PathNotFound { role: PathRole::Code, .. }));
    }

    #[tokio::test]
    async fn missing_interpreter_is_unexpected() {
        let fs = MockFileSystem::new();
        fs.add_file("/work/code.py", "print('hi')");
        fs.add_file("/work/input.txt", "");

        let req = RunRequest::new("/work/code.py", "/work/input.txt", "/work/output.txt");
        let err = mock_runner(&fs).run(&req).await.unwrap_err();

        assert!(matches!(err, RunError::Unexpected(_)), "got {err:?}");
        assert!(fs.contents("/work/output.txt").is_none());
    }
}
