//! Tree serialization.
//!
//! [`to_text()`] writes the indentation-delimited form that [`crate::parser`] reads
//! back: one node per line, two spaces per nesting level, and a parenthesized
//! argument for kinds that carry one.
//!
//! # Examples
//!
//! ```
//! use astopt::ast::{BinaryOp, Node};
//! use astopt::output::to_text;
//!
//! let tree = Node::binary(BinaryOp::Add, Node::int(2), Node::var("x"));
//! assert_eq!(to_text(&tree), "BINARY_EXPR (+)\n  INT (2)\n  VAR (x)\n");
//! ```
//!
//! [`to_json()`] renders the same tree as a `serde_json::Value` for tooling.

use crate::ast::{Node, NodeData};
use crate::parser::INDENT_WIDTH;
use std::fmt::{self, Write};

pub struct TreePrinter {
    indent_width: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        TreePrinter {
            indent_width: INDENT_WIDTH,
        }
    }

    pub fn print(&self, node: &Node) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_node(&mut out, node, 0);
        out
    }

    pub fn write_node<W: Write>(&self, out: &mut W, node: &Node, depth: usize) -> fmt::Result {
        write!(out, "{:width$}", "", width = depth * self.indent_width)?;
        out.write_str(node.kind().as_str())?;
        if let Some(arg) = argument(node) {
            write!(out, " ({arg})")?;
        }
        out.write_char('\n')?;

        for child in &node.children {
            self.write_node(out, child, depth + 1)?;
        }
        Ok(())
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        TreePrinter::new()
    }
}

fn argument(node: &Node) -> Option<String> {
    match &node.data {
        NodeData::FunctionDef { name }
        | NodeData::Declaration { name }
        | NodeData::VarRef { name }
        | NodeData::FunctionCall { name } => Some(name.clone()),
        NodeData::IntLiteral(value) => Some(value.to_string()),
        NodeData::BinaryExpr(op) => Some(op.to_string()),
        NodeData::UnaryExpr(op) => Some(op.to_string()),
        NodeData::StringLiteral(value) => Some(format!("\"{value}\"")),
        NodeData::Sequence
        | NodeData::IfStmt
        | NodeData::ExprList
        | NodeData::ForStmt
        | NodeData::ReturnStmt => None,
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::new().write_node(f, self, 0)
    }
}

/// Serialize a tree into its indentation-delimited text.
pub fn to_text(node: &Node) -> String {
    TreePrinter::new().print(node)
}

/// Render a tree as JSON.
///
/// ```
/// use astopt::ast::Node;
/// use astopt::output::to_json;
///
/// let json = to_json(&Node::var("x"));
/// assert_eq!(json.to_string(), r#"{"kind":"VAR","name":"x"}"#);
/// ```
pub fn to_json(node: &Node) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    object.insert("kind".to_string(), node.kind().as_str().into());

    match &node.data {
        NodeData::FunctionDef { name }
        | NodeData::Declaration { name }
        | NodeData::VarRef { name }
        | NodeData::FunctionCall { name } => {
            object.insert("name".to_string(), name.as_str().into());
        }
        NodeData::IntLiteral(value) => {
            object.insert("value".to_string(), (*value).into());
        }
        NodeData::StringLiteral(value) => {
            object.insert("value".to_string(), value.as_str().into());
        }
        NodeData::BinaryExpr(op) => {
            object.insert("operator".to_string(), op.as_str().into());
        }
        NodeData::UnaryExpr(op) => {
            object.insert("operator".to_string(), op.as_str().into());
        }
        NodeData::Sequence
        | NodeData::IfStmt
        | NodeData::ExprList
        | NodeData::ForStmt
        | NodeData::ReturnStmt => {}
    }

    if !node.children.is_empty() {
        let children = node.children.iter().map(to_json).collect();
        object.insert("children".to_string(), serde_json::Value::Array(children));
    }

    serde_json::Value::Object(object)
}
