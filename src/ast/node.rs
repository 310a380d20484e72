use crate::ast::{BinaryOp, NodeKind, UnaryOp};

/// Kind-specific payload of a node.
///
/// Each variant holds exactly the fields its kind owns, so a `VarRef` can never
/// carry an operator and a `BinaryExpr` can never carry a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Function definition
    ///
    /// # Example
    /// ```text
    /// FUNCTION_DEF (main)
    /// ```
    FunctionDef { name: String },

    /// Ordered block of statements
    Sequence,

    /// Variable declaration, optionally with an initializer child
    ///
    /// # Example
    /// ```text
    /// DECLARATION (i)
    ///   INT (0)
    /// ```
    Declaration { name: String },

    /// Integer literal
    IntLiteral(i64),

    /// Binary expression over exactly two children
    BinaryExpr(BinaryOp),

    /// Variable reference
    VarRef { name: String },

    /// Conditional: condition, then-branch, and optional extra branches
    IfStmt,

    /// Function call, arguments in an `EXPR_LIST` child
    FunctionCall { name: String },

    /// Call argument list
    ExprList,

    /// Counted loop: init declaration, condition, increment, body
    ForStmt,

    /// Unary expression over one child
    UnaryExpr(UnaryOp),

    /// Return statement, optionally with a value child
    ReturnStmt,

    /// String literal, without its surrounding quotes
    StringLiteral(String),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::FunctionDef { .. } => NodeKind::FunctionDef,
            NodeData::Sequence => NodeKind::Sequence,
            NodeData::Declaration { .. } => NodeKind::Declaration,
            NodeData::IntLiteral(_) => NodeKind::IntLiteral,
            NodeData::BinaryExpr(_) => NodeKind::BinaryExpr,
            NodeData::VarRef { .. } => NodeKind::VarRef,
            NodeData::IfStmt => NodeKind::IfStmt,
            NodeData::FunctionCall { .. } => NodeKind::FunctionCall,
            NodeData::ExprList => NodeKind::ExprList,
            NodeData::ForStmt => NodeKind::ForStmt,
            NodeData::UnaryExpr(_) => NodeKind::UnaryExpr,
            NodeData::ReturnStmt => NodeKind::ReturnStmt,
            NodeData::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }

    /// Payload of a kind with every field empty (`""`, `0`, empty operator).
    pub fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::FunctionDef => NodeData::FunctionDef { name: String::new() },
            NodeKind::Sequence => NodeData::Sequence,
            NodeKind::Declaration => NodeData::Declaration { name: String::new() },
            NodeKind::IntLiteral => NodeData::IntLiteral(0),
            NodeKind::BinaryExpr => NodeData::BinaryExpr(BinaryOp::Other(String::new())),
            NodeKind::VarRef => NodeData::VarRef { name: String::new() },
            NodeKind::IfStmt => NodeData::IfStmt,
            NodeKind::FunctionCall => NodeData::FunctionCall { name: String::new() },
            NodeKind::ExprList => NodeData::ExprList,
            NodeKind::ForStmt => NodeData::ForStmt,
            NodeKind::UnaryExpr => NodeData::UnaryExpr(UnaryOp::Other(String::new())),
            NodeKind::ReturnStmt => NodeData::ReturnStmt,
            NodeKind::StringLiteral => NodeData::StringLiteral(String::new()),
        }
    }
}

/// A node of the tree.
///
/// Children are owned by value and their count is not capped. `Clone` is a deep
/// copy: the clone shares no storage with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub data: NodeData,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(data: NodeData, children: Vec<Node>) -> Self {
        Node { data, children }
    }

    pub fn leaf(data: NodeData) -> Self {
        Node::new(data, Vec::new())
    }

    pub fn function_def(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(NodeData::FunctionDef { name: name.into() }, children)
    }

    pub fn sequence(children: Vec<Node>) -> Self {
        Node::new(NodeData::Sequence, children)
    }

    pub fn declaration(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(NodeData::Declaration { name: name.into() }, children)
    }

    pub fn int(value: i64) -> Self {
        Node::leaf(NodeData::IntLiteral(value))
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::new(NodeData::BinaryExpr(op), vec![left, right])
    }

    pub fn var(name: impl Into<String>) -> Self {
        Node::leaf(NodeData::VarRef { name: name.into() })
    }

    pub fn if_stmt(children: Vec<Node>) -> Self {
        Node::new(NodeData::IfStmt, children)
    }

    pub fn call(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(NodeData::FunctionCall { name: name.into() }, children)
    }

    pub fn expr_list(children: Vec<Node>) -> Self {
        Node::new(NodeData::ExprList, children)
    }

    pub fn for_stmt(init: Node, condition: Node, increment: Node, body: Node) -> Self {
        Node::new(NodeData::ForStmt, vec![init, condition, increment, body])
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Node::new(NodeData::UnaryExpr(op), vec![operand])
    }

    pub fn return_stmt(children: Vec<Node>) -> Self {
        Node::new(NodeData::ReturnStmt, children)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::leaf(NodeData::StringLiteral(value.into()))
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    /// Identifier of a `FunctionDef`, `Declaration`, `VarRef` or `FunctionCall`.
    pub fn name(&self) -> Option<&str> {
        match &self.data {
            NodeData::FunctionDef { name }
            | NodeData::Declaration { name }
            | NodeData::VarRef { name }
            | NodeData::FunctionCall { name } => Some(name),
            _ => None,
        }
    }

    pub fn int_value(&self) -> Option<i64> {
        match self.data {
            NodeData::IntLiteral(value) => Some(value),
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&str> {
        match &self.data {
            NodeData::StringLiteral(value) => Some(value),
            _ => None,
        }
    }

    /// Operator token of a `BinaryExpr` or `UnaryExpr`.
    pub fn operator(&self) -> Option<&str> {
        match &self.data {
            NodeData::BinaryExpr(op) => Some(op.as_str()),
            NodeData::UnaryExpr(op) => Some(op.as_str()),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }
}
