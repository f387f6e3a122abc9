// src/submission.rs

//! Run code and input given as text rather than as files.
//!
//! A submission is staged into a fresh `submission_*` directory:
//!
//! ```text
//! submission_XXXXXX/
//!   user_code.py
//!   input.txt
//!   output.txt   (written by the runner on success)
//! ```
//!
//! The directory is removed once the report has been read back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;
use crate::exec::{RunRequest, Runner};

pub const CODE_FILE_NAME: &str = "user_code.py";
pub const INPUT_FILE_NAME: &str = "input.txt";
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// Code and stdin contents for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub code: String,
    pub input: String,
}

/// Result of a successful submission run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Text the code wrote to stdout.
    pub output: String,
}

impl Submission {
    pub fn new(code: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            input: input.into(),
        }
    }

    /// Stage under the system temp directory and run.
    pub async fn run(&self, runner: &Runner) -> Result<SubmissionReport> {
        self.run_in(runner, &std::env::temp_dir()).await
    }

    /// Stage under `base_dir` and run.
    pub async fn run_in(&self, runner: &Runner, base_dir: &Path) -> Result<SubmissionReport> {
        let workdir = tempfile::Builder::new()
            .prefix("submission_")
            .tempdir_in(base_dir)
            .with_context(|| format!("creating submission directory in {:?}", base_dir))?;

        let req = self.stage(workdir.path())?;
        debug!(workdir = ?workdir.path(), "submission staged");

        runner.run(&req).await?;

        let output = runner
            .fs()
            .read_to_string(&req.output_file)
            .with_context(|| format!("reading submission output {:?}", req.output_file))?;

        Ok(SubmissionReport { output })
    }

    /// Write the code and input files into `dir` and return the request
    /// that runs them.
    fn stage(&self, dir: &Path) -> anyhow::Result<RunRequest> {
        let code_file: PathBuf = dir.join(CODE_FILE_NAME);
        let input_file = dir.join(INPUT_FILE_NAME);

        fs::write(&code_file, &self.code)
            .with_context(|| format!("writing code file {:?}", code_file))?;
        fs::write(&input_file, &self.input)
            .with_context(|| format!("writing input file {:?}", input_file))?;

        Ok(RunRequest::new(code_file, input_file, dir.join(OUTPUT_FILE_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::exec::Interpreter;
    use crate::fs::{FileSystem, RealFileSystem};

    /// Real filesystem that counts output reads.
    #[derive(Debug, Default)]
    struct CountingFileSystem {
        reads: AtomicUsize,
    }

    impl FileSystem for CountingFileSystem {
        fn open_read(&self, path: &Path) -> anyhow::Result<fs::File> {
            RealFileSystem.open_read(path)
        }

        fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            RealFileSystem.read_to_string(path)
        }

        fn write(&self, path: &Path, contents: &[u8]) -> anyhow::Result<()> {
            RealFileSystem.write(path, contents)
        }

        fn is_file(&self, path: &Path) -> bool {
            RealFileSystem.is_file(path)
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn output_is_read_back_through_the_runner_filesystem() {
        let base = tempfile::tempdir().unwrap();
        let counting = Arc::new(CountingFileSystem::default());
        let runner = Runner::new(Interpreter::new("sh")).with_fs(counting.clone());

        let report = Submission::new("cat\n", "abc\n")
            .run_in(&runner, base.path())
            .await
            .unwrap();

        assert_eq!(report.output, "abc\n");
        assert_eq!(counting.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stage_lays_out_fixed_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let sub = Submission::new("print(input())\n", "42\n");

        let req = sub.stage(dir.path()).unwrap();

        assert_eq!(req.code_file, dir.path().join("user_code.py"));
        assert_eq!(req.input_file, dir.path().join("input.txt"));
        assert_eq!(req.output_file, dir.path().join("output.txt"));
        assert_eq!(fs::read_to_string(&req.code_file).unwrap(), "print(input())\n");
        assert_eq!(fs::read_to_string(&req.input_file).unwrap(), "42\n");
        assert!(!req.output_file.exists());
    }
}
