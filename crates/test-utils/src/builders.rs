#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use script_runner::exec::RunRequest;
use tempfile::TempDir;

/// A temp directory holding one code file and one input file.
///
/// The directory lives as long as the `Scenario`.
pub struct Scenario {
    dir: TempDir,
    pub code_file: PathBuf,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

impl Scenario {
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Request for the scenario's code, input and output paths.
    pub fn request(&self) -> RunRequest {
        RunRequest::new(&self.code_file, &self.input_file, &self.output_file)
    }

    /// Request that reads `input_file` instead, e.g. a second input.
    pub fn request_with_input(&self, input_file: impl Into<PathBuf>) -> RunRequest {
        RunRequest::new(&self.code_file, input_file, &self.output_file)
    }

    /// Write another file into the scenario directory.
    pub fn write_file(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("writing scenario file");
        path
    }

    pub fn output(&self) -> Option<String> {
        fs::read_to_string(&self.output_file).ok()
    }
}

/// Builder for `Scenario` to simplify test setup.
pub struct ScenarioBuilder {
    code_name: String,
    code: String,
    input: Option<String>,
    output_name: String,
}

impl ScenarioBuilder {
    /// Start from a code file with the given contents.
    pub fn new(code: &str) -> Self {
        Self {
            code_name: "code.sh".to_string(),
            code: code.to_string(),
            input: Some(String::new()),
            output_name: "output.txt".to_string(),
        }
    }

    /// Shell script that copies stdin to stdout.
    pub fn echo() -> Self {
        Self::new("cat\n")
    }

    /// Shell script that writes `stderr` and exits with `code`.
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self::new(&format!("printf '%s' '{stderr}' >&2\nexit {code}\n"))
    }

    pub fn code_name(mut self, name: &str) -> Self {
        self.code_name = name.to_string();
        self
    }

    pub fn input(mut self, input: &str) -> Self {
        self.input = Some(input.to_string());
        self
    }

    /// Do not create the input file.
    pub fn without_input(mut self) -> Self {
        self.input = None;
        self
    }

    pub fn output_name(mut self, name: &str) -> Self {
        self.output_name = name.to_string();
        self
    }

    pub fn build(self) -> Scenario {
        let dir = tempfile::tempdir().expect("creating scenario dir");
        let code_file = dir.path().join(&self.code_name);
        let input_file = dir.path().join("input.txt");
        let output_file = dir.path().join(&self.output_name);

        fs::write(&code_file, &self.code).expect("writing code file");
        if let Some(input) = &self.input {
            fs::write(&input_file, input).expect("writing input file");
        }

        Scenario {
            dir,
            code_file,
            input_file,
            output_file,
        }
    }
}
