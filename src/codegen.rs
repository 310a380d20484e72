//! C source emitter.
//!
//! A direct one-pass walk that turns a finished tree into C text. The tree is only
//! read. Optimized trees may contain a `SEQUENCE` where an `IF_STMT` or `FOR_STMT`
//! used to be; sequences are emitted inline, so those need no special handling.

use crate::ast::{Node, NodeData};
use std::fmt::Write;

const BLOCK_INDENT: usize = 4;

pub struct CEmitter {
    out: String,
}

impl CEmitter {
    pub fn new() -> Self {
        CEmitter { out: String::new() }
    }

    /// Emit a whole translation unit for `root`.
    pub fn emit(mut self, root: &Node) -> String {
        self.out.push_str("#include <stdio.h>\n\n");
        self.statement(root, 0);
        self.out
    }

    fn indent(&mut self, level: usize) {
        self.out.extend(std::iter::repeat_n(' ', level));
    }

    fn line(&mut self, level: usize, text: &str) {
        self.indent(level);
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn statement(&mut self, node: &Node, level: usize) {
        match &node.data {
            NodeData::FunctionDef { name } => {
                if name.is_empty() {
                    return;
                }
                self.line(level, &format!("int {name}() {{"));
                for child in &node.children {
                    self.statement(child, level + BLOCK_INDENT);
                }
                self.line(level, "}");
            }

            NodeData::Declaration { name } => {
                let text = match node.children.as_slice() {
                    [init] => format!("int {name} = {};", expression(init)),
                    _ => format!("int {name};"),
                };
                self.line(level, &text);
            }

            NodeData::ReturnStmt => {
                let text = match node.children.as_slice() {
                    [value] => format!("return {};", expression(value)),
                    _ => "return;".to_string(),
                };
                self.line(level, &text);
            }

            NodeData::ForStmt => {
                let [init, condition, increment, body] = node.children.as_slice() else {
                    return;
                };
                let header = format!(
                    "for ({} {}; {}) {{",
                    for_init(init),
                    expression(condition),
                    for_increment(increment)
                );
                self.line(level, &header);
                self.statement(body, level + BLOCK_INDENT);
                self.line(level, "}");
            }

            NodeData::FunctionCall { .. } => {
                let call = expression(node);
                self.line(level, &format!("{call};"));
            }

            NodeData::IfStmt => {
                let [condition, then_branch, ..] = node.children.as_slice() else {
                    return;
                };
                self.line(level, &format!("if ({}) {{", expression(condition)));
                self.statement(then_branch, level + BLOCK_INDENT);
                self.line(level, "}");
            }

            NodeData::Sequence
            | NodeData::IntLiteral(_)
            | NodeData::BinaryExpr(_)
            | NodeData::VarRef { .. }
            | NodeData::ExprList
            | NodeData::UnaryExpr(_)
            | NodeData::StringLiteral(_) => {
                for child in &node.children {
                    self.statement(child, level);
                }
            }
        }
    }
}

impl Default for CEmitter {
    fn default() -> Self {
        CEmitter::new()
    }
}

fn for_init(init: &Node) -> String {
    match (&init.data, init.children.as_slice()) {
        (NodeData::Declaration { name }, [value]) => format!("int {name} = {};", expression(value)),
        _ => ";".to_string(),
    }
}

fn for_increment(increment: &Node) -> String {
    match (&increment.data, increment.children.as_slice()) {
        (NodeData::UnaryExpr(op), [operand]) => format!("{}{op}", expression(operand)),
        _ => String::new(),
    }
}

/// Render an expression. Binary expressions are fully parenthesized.
pub fn expression(node: &Node) -> String {
    let mut out = String::new();
    match (&node.data, node.children.as_slice()) {
        (NodeData::IntLiteral(value), _) => {
            let _ = write!(out, "{value}");
        }
        (NodeData::VarRef { name }, _) => out.push_str(name),
        (NodeData::StringLiteral(value), _) => {
            let _ = write!(out, "\"{value}\"");
        }
        (NodeData::BinaryExpr(op), [left, right]) => {
            let _ = write!(out, "({} {op} {})", expression(left), expression(right));
        }
        (NodeData::UnaryExpr(op), [operand]) => {
            let _ = write!(out, "{}{op}", expression(operand));
        }
        (NodeData::FunctionCall { name }, children) => {
            let args = match children {
                [list] if matches!(list.data, NodeData::ExprList) => list
                    .children
                    .iter()
                    .map(expression)
                    .collect::<Vec<_>>()
                    .join(", "),
                _ => String::new(),
            };
            let _ = write!(out, "{name}({args})");
        }
        _ => out.push_str("/* expr */"),
    }
    out
}

/// Translate a tree into C source.
pub fn to_c(root: &Node) -> String {
    CEmitter::new().emit(root)
}
