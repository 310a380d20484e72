//! Validate a serialized tree without transforming it

use super::CliError;
use crate::parser::{ReaderConfig, parse_with_config};

/// Shape of a tree that parsed successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub nodes: usize,
    pub depth: usize,
}

pub fn execute_check(source: &str, reader: ReaderConfig) -> Result<CheckResult, CliError> {
    let tree = parse_with_config(source, reader)?;
    Ok(CheckResult {
        nodes: tree.node_count(),
        depth: tree.depth(),
    })
}
