//! Command layer behind the `astopt` binary.
//!
//! Each command takes its whole input as a string and returns its whole output, so
//! nothing is written anywhere unless the command succeeded.

mod check;
mod optimize;
mod render;

pub use check::{CheckResult, execute_check};
pub use optimize::{OptimizeOptions, OptimizeResult, OutputFormat, execute_optimize};
pub use render::{RenderOptions, execute_codegen, execute_graph};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Pass an input file or pipe the tree to stdin.")]
    NoInput,
}
