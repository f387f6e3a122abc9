// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod report;
pub mod submission;

use tracing::debug;

use crate::cli::CliArgs;
use crate::exec::Runner;

/// High-level entry point used by `main.rs`.
///
/// Runs the code file once with the fixed interpreter and prints the outcome.
/// Run failures are reported on the console only; they never surface as an
/// error here.
pub async fn run(args: CliArgs) {
    let runner = Runner::default();
    let req = args.request();
    debug!(?req, interpreter = %runner.interpreter(), "running script");

    let result = runner.run(&req).await;
    report::print(&result);
}
