//! # Abstract Syntax Tree
//!
//! This module defines the tree that every stage of the pipeline works on. A program
//! fragment is a single recursive [`Node`]; each node carries a [`NodeData`] payload
//! that fixes its kind and the fields that kind owns, plus an ordered list of children
//! it owns outright.
//!
//! ## Architecture Overview
//!
//! - **[kind]** - The closed vocabulary of node kinds and their wire names
//! - **[node]** - The node type, its payload and construction helpers
//! - **[operators]** - Binary and unary operator tokens
//!
//! ## Textual Form
//!
//! Trees travel between tools as indentation-delimited text, one node per line:
//!
//! ```text
//! FUNCTION_DEF (main)
//!   SEQUENCE
//!     DECLARATION (a)
//!       BINARY_EXPR (+)
//!         INT (2)
//!         INT (3)
//!     RETURN_STMT
//!       VAR (a)
//! ```
//!
//! See [`crate::parser`] for reading this form and [`crate::output`] for writing it.
//!
//! ## Ownership
//!
//! Children are stored by value, so a tree is always strictly tree-shaped. Cloning a
//! node is a deep copy that shares nothing with the original, and dropping a node
//! releases its whole subtree exactly once.
pub mod kind;
pub mod node;
pub mod operators;

pub use kind::NodeKind;
pub use node::{Node, NodeData};
pub use operators::{BinaryOp, UnaryOp};
