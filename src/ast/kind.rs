use std::fmt;

/// The closed set of node kinds.
///
/// Every line of the textual encoding starts with one of these names. Matching is
/// exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Function definition (`FUNCTION_DEF`)
    FunctionDef,
    /// Ordered block of statements (`SEQUENCE`)
    Sequence,
    /// Variable declaration (`DECLARATION`)
    Declaration,
    /// Integer literal (`INT`)
    IntLiteral,
    /// Binary expression (`BINARY_EXPR`)
    BinaryExpr,
    /// Variable reference (`VAR`)
    VarRef,
    /// Conditional statement (`IF_STMT`)
    IfStmt,
    /// Function call (`FUNCTION_CALL`)
    FunctionCall,
    /// Argument list of a call (`EXPR_LIST`)
    ExprList,
    /// Counted loop (`FOR_STMT`)
    ForStmt,
    /// Unary expression (`UNARY_EXPR`)
    UnaryExpr,
    /// Return statement (`RETURN_STMT`)
    ReturnStmt,
    /// String literal (`STRING`)
    StringLiteral,
}

impl NodeKind {
    pub const ALL: [NodeKind; 13] = [
        NodeKind::FunctionDef,
        NodeKind::Sequence,
        NodeKind::Declaration,
        NodeKind::IntLiteral,
        NodeKind::BinaryExpr,
        NodeKind::VarRef,
        NodeKind::IfStmt,
        NodeKind::FunctionCall,
        NodeKind::ExprList,
        NodeKind::ForStmt,
        NodeKind::UnaryExpr,
        NodeKind::ReturnStmt,
        NodeKind::StringLiteral,
    ];

    /// Name used for this kind in the textual encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::FunctionDef => "FUNCTION_DEF",
            NodeKind::Sequence => "SEQUENCE",
            NodeKind::Declaration => "DECLARATION",
            NodeKind::IntLiteral => "INT",
            NodeKind::BinaryExpr => "BINARY_EXPR",
            NodeKind::VarRef => "VAR",
            NodeKind::IfStmt => "IF_STMT",
            NodeKind::FunctionCall => "FUNCTION_CALL",
            NodeKind::ExprList => "EXPR_LIST",
            NodeKind::ForStmt => "FOR_STMT",
            NodeKind::UnaryExpr => "UNARY_EXPR",
            NodeKind::ReturnStmt => "RETURN_STMT",
            NodeKind::StringLiteral => "STRING",
        }
    }

    /// Look up a kind by its textual name.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
