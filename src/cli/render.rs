//! Hand a tree to the downstream renderers: C source and Graphviz

use super::CliError;
use crate::codegen::to_c;
use crate::graph::to_dot;
use crate::optimizer::{Optimizer, OptimizerConfig};
use crate::output::to_text;
use crate::parser::{ReaderConfig, parse_with_config};

/// Options shared by the codegen and graph commands
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Serialized input tree
    pub source: String,
    pub reader: ReaderConfig,
    /// Run the optimizer before rendering
    pub optimize: Option<OptimizerConfig>,
}

pub fn execute_codegen(options: &RenderOptions) -> Result<String, CliError> {
    let mut tree = parse_with_config(&options.source, options.reader)?;
    if let Some(config) = options.optimize {
        Optimizer::new(config).optimize(&mut tree);
    }
    Ok(to_c(&tree))
}

pub fn execute_graph(options: &RenderOptions) -> Result<String, CliError> {
    let mut tree = parse_with_config(&options.source, options.reader)?;
    match options.optimize {
        Some(config) => {
            Optimizer::new(config).optimize(&mut tree);
            Ok(to_dot(&to_text(&tree)))
        }
        // The graph is drawn from the text as given, once it is known to parse
        None => Ok(to_dot(&options.source)),
    }
}
