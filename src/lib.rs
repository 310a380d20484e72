//! Middle tier of a small compiler pipeline.
//!
//! A tree arrives as indentation-delimited text, is parsed into an owned [`Node`]
//! tree, optimized in place and written back out in the same form:
//!
//! ```
//! use astopt::{optimize, parse, to_text};
//!
//! let mut tree = parse("BINARY_EXPR (*)\n  BINARY_EXPR (+)\n    INT (2)\n    INT (3)\n  INT (4)\n")?;
//! optimize(&mut tree);
//! assert_eq!(to_text(&tree), "INT (20)\n");
//! # Ok::<(), astopt::ParseError>(())
//! ```
pub mod ast;
pub mod cli;
pub mod codegen;
pub mod graph;
pub mod lexer;
pub mod optimizer;
pub mod output;
pub mod parser;

pub use ast::{BinaryOp, Node, NodeData, NodeKind, UnaryOp};
pub use codegen::to_c;
pub use graph::to_dot;
pub use lexer::{LexError, Lexer, Line};
pub use optimizer::{OptimizationStats, Optimizer, OptimizerConfig, optimize};
pub use output::{to_json, to_text};
pub use parser::{ParseError, Parser, ReaderConfig, parse, parse_with_config};
