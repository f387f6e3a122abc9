// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`runner`] owns the single-shot [`Runner`]: read input, spawn the
//!   interpreter with `tokio::process::Command`, capture output, write the
//!   output file.
//! - [`interpreter`] describes the fixed command a code file is run with.
//! - [`decode`] turns captured bytes into text.

pub mod decode;
pub mod interpreter;
pub mod runner;

pub use interpreter::Interpreter;
pub use runner::{RunOutcome, RunRequest, Runner};
