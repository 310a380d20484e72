//! Tree reader: rebuilds a [`Node`] tree from its indentation-delimited text.
//!
//! Parsing is recursive descent keyed by indentation. A node at depth `d` owns every
//! following line at depth `d + 1` until a line with smaller indentation appears;
//! that line is left unconsumed for an ancestor to pick up. A line indented deeper
//! than expected fails the whole parse.

use crate::{
    ast::{BinaryOp, Node, NodeData, NodeKind, UnaryOp},
    lexer::{LexError, Lexer, Line},
};
use tracing::{debug, warn};

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// Operators keep at most this many characters of their argument.
const OPERATOR_WIDTH: usize = 3;

/// Errors that abort a parse. No partial tree is ever returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("line {line}: unexpected indentation of {found} spaces (expected {expected}) in `{text}`")]
    Indentation {
        line: usize,
        found: usize,
        expected: usize,
        text: String,
    },

    #[error("line {line}: node has more than {limit} children")]
    CapacityExceeded { line: usize, limit: usize },

    #[error("line {line}: nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { line: usize, limit: usize },

    #[error("input contains no nodes")]
    EmptyInput,
}

impl ParseError {
    /// 1-based number of the offending line, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Lex(e) => Some(e.line()),
            ParseError::Indentation { line, .. }
            | ParseError::CapacityExceeded { line, .. }
            | ParseError::DepthLimitExceeded { line, .. } => Some(*line),
            ParseError::EmptyInput => None,
        }
    }
}

/// Limits applied while reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Deepest nesting accepted; the root sits at depth 0.
    pub max_depth: usize,
    /// Most children a single node may have. `None` means unbounded.
    pub max_children: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            max_depth: 512,
            max_children: None,
        }
    }
}

pub struct Parser<'a> {
    lines: Vec<Line<'a>>,
    position: usize,
    config: ReaderConfig,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        Parser::with_config(source, ReaderConfig::default())
    }

    pub fn with_config(source: &'a str, config: ReaderConfig) -> Result<Self, ParseError> {
        let lines = Lexer::new(source).tokenize()?;
        Ok(Parser {
            lines,
            position: 0,
            config,
        })
    }

    /// Parse the single root node and its subtree.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let root = self.parse_node(0)?.ok_or(ParseError::EmptyInput)?;

        if let Some(line) = self.current() {
            // A shallower column than the root's children but deeper than the root
            // cannot attach anywhere
            if line.indent > 0 {
                return Err(ParseError::Indentation {
                    line: line.number,
                    found: line.indent,
                    expected: 0,
                    text: line.text.to_string(),
                });
            }
            warn!(
                line = line.number,
                ignored = self.lines.len() - self.position,
                "ignoring lines after the root node"
            );
        }

        debug!(nodes = root.node_count(), depth = root.depth(), "parsed tree");
        Ok(root)
    }

    fn current(&self) -> Option<&Line<'a>> {
        self.lines.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Parse the node at `depth`, or return `Ok(None)` without consuming anything
    /// when the next line belongs to an ancestor (or there are no lines left).
    fn parse_node(&mut self, depth: usize) -> Result<Option<Node>, ParseError> {
        let expected = depth * INDENT_WIDTH;

        let Some(line) = self.current() else {
            return Ok(None);
        };

        if line.indent < expected {
            return Ok(None);
        }
        if line.indent > expected {
            return Err(ParseError::Indentation {
                line: line.number,
                found: line.indent,
                expected,
                text: line.text.to_string(),
            });
        }
        if depth > self.config.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                line: line.number,
                limit: self.config.max_depth,
            });
        }

        let number = line.number;
        let data = node_data(line)?;
        self.advance();

        let mut children = Vec::new();
        while let Some(child) = self.parse_node(depth + 1)? {
            if let Some(limit) = self.config.max_children
                && children.len() >= limit
            {
                return Err(ParseError::CapacityExceeded {
                    line: number,
                    limit,
                });
            }
            children.push(child);
        }

        Ok(Some(Node::new(data, children)))
    }
}

/// Interpret a line's argument according to its kind.
fn node_data(line: &Line<'_>) -> Result<NodeData, ParseError> {
    let Some(arg) = line.arg else {
        return Ok(NodeData::empty(line.kind));
    };

    let data = match line.kind {
        NodeKind::FunctionDef => NodeData::FunctionDef { name: arg.to_string() },
        NodeKind::Declaration => NodeData::Declaration { name: arg.to_string() },
        NodeKind::VarRef => NodeData::VarRef { name: arg.to_string() },
        NodeKind::FunctionCall => NodeData::FunctionCall { name: arg.to_string() },
        NodeKind::BinaryExpr => NodeData::BinaryExpr(BinaryOp::from_token(operator_token(arg))),
        NodeKind::UnaryExpr => NodeData::UnaryExpr(UnaryOp::from_token(operator_token(arg))),
        NodeKind::IntLiteral => {
            let value = arg.trim().parse::<i64>().map_err(|e| LexError::MalformedArgument {
                line: line.number,
                reason: format!("invalid integer `{arg}`: {e}"),
                text: line.text.to_string(),
            })?;
            NodeData::IntLiteral(value)
        }
        NodeKind::StringLiteral => NodeData::StringLiteral(arg.trim_matches('"').to_string()),
        // Kinds without a field ignore their argument
        kind @ (NodeKind::Sequence
        | NodeKind::IfStmt
        | NodeKind::ExprList
        | NodeKind::ForStmt
        | NodeKind::ReturnStmt) => NodeData::empty(kind),
    };

    Ok(data)
}

fn operator_token(arg: &str) -> &str {
    match arg.char_indices().nth(OPERATOR_WIDTH) {
        Some((end, _)) => &arg[..end],
        None => arg,
    }
}

/// Parse a whole tree with the default limits.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    Parser::new(source)?.parse()
}

/// Parse a whole tree with explicit limits.
pub fn parse_with_config(source: &str, config: ReaderConfig) -> Result<Node, ParseError> {
    Parser::with_config(source, config)?.parse()
}
