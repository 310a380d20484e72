//! Read, optimize and re-serialize a tree

use super::CliError;
use crate::optimizer::{OptimizationStats, Optimizer, OptimizerConfig};
use crate::output::{to_json, to_text};
use crate::parser::{ReaderConfig, parse_with_config};
use tracing::info;

/// Serialization used for the optimized tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indentation-delimited text, readable by the parser again
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Options for the optimize command
#[derive(Debug, Clone, Default)]
pub struct OptimizeOptions {
    /// Serialized input tree
    pub source: String,
    pub reader: ReaderConfig,
    pub optimizer: OptimizerConfig,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct OptimizeResult {
    /// Serialized optimized tree
    pub output: String,
    pub stats: OptimizationStats,
}

pub fn execute_optimize(options: &OptimizeOptions) -> Result<OptimizeResult, CliError> {
    let mut tree = parse_with_config(&options.source, options.reader)?;
    let before = tree.node_count();

    let mut optimizer = Optimizer::new(options.optimizer);
    optimizer.optimize(&mut tree);
    let stats = optimizer.stats();

    info!(
        before,
        after = tree.node_count(),
        folded = stats.folded,
        eliminated = stats.eliminated,
        unrolled = stats.unrolled,
        "optimized tree"
    );

    let output = match options.format {
        OutputFormat::Text => to_text(&tree),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&to_json(&tree))?;
            json.push('\n');
            json
        }
    };

    Ok(OptimizeResult { output, stats })
}
