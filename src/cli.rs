// src/cli.rs

//! CLI argument parsing using `clap`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use crate::exec::RunRequest;

pub const USAGE: &str =
    "Usage: script_runner <code_filepath> <input_filepath> <output_filepath>";

/// Command-line arguments for `script_runner`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "script_runner",
    version,
    about = "Run a code file with an input file on stdin and save its stdout.",
    long_about = None
)]
pub struct CliArgs {
    /// Code file to execute.
    #[arg(value_name = "CODE_FILEPATH")]
    pub code_filepath: PathBuf,

    /// File fed to the code on stdin.
    #[arg(value_name = "INPUT_FILEPATH")]
    pub input_filepath: PathBuf,

    /// File that receives stdout (overwritten on success).
    #[arg(value_name = "OUTPUT_FILEPATH")]
    pub output_filepath: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SCRIPT_RUNNER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    pub fn request(&self) -> RunRequest {
        RunRequest::new(
            &self.code_filepath,
            &self.input_filepath,
            &self.output_filepath,
        )
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// How parsing ended when it did not produce arguments.
#[derive(Debug)]
pub enum ParseExit {
    /// Wrong arguments: print [`USAGE`] and exit 1.
    Usage(clap::Error),
    /// `--help` / `--version`: let clap print it and exit 0.
    Info(clap::Error),
}

/// Parse from an explicit argument list (first item is the binary name).
pub fn parse_from<I, T>(args: I) -> Result<CliArgs, ParseExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseExit::Info(err),
        _ => ParseExit::Usage(err),
    })
}

/// Parse the process arguments.
pub fn parse() -> Result<CliArgs, ParseExit> {
    parse_from(std::env::args_os())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_positionals_parse() {
        let args = parse_from(["script_runner", "main.py", "in.txt", "out.txt"]).unwrap();
        assert_eq!(args.code_filepath, PathBuf::from("main.py"));
        assert_eq!(args.input_filepath, PathBuf::from("in.txt"));
        assert_eq!(args.output_filepath, PathBuf::from("out.txt"));
        assert_eq!(args.log_level, None);
        assert_eq!(args.request().output_file, PathBuf::from("out.txt"));
    }

    #[test]
    fn log_level_flag_is_not_a_positional() {
        let args = parse_from([
            "script_runner",
            "--log-level",
            "debug",
            "main.py",
            "in.txt",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn wrong_positional_count_is_usage() {
        assert!(matches!(
            parse_from(["script_runner", "main.py", "in.txt"]),
            Err(ParseExit::Usage(_))
        ));
        assert!(matches!(
            parse_from(["script_runner", "a", "b", "c", "d"]),
            Err(ParseExit::Usage(_))
        ));
        assert!(matches!(parse_from(["script_runner"]), Err(ParseExit::Usage(_))));
    }

    #[test]
    fn help_is_not_usage() {
        assert!(matches!(
            parse_from(["script_runner", "--help"]),
            Err(ParseExit::Info(_))
        ));
    }
}
