use std::fmt;

/// Binary operators.
///
/// Only the arithmetic operators take part in constant folding. Anything the
/// front end emits that is not listed here is kept verbatim in [`BinaryOp::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Truncating integer division (`/`)
    Divide,

    // Comparison
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,

    /// Any other operator token
    Other(String),
}

impl BinaryOp {
    pub fn from_token(token: &str) -> Self {
        match token {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Subtract,
            "*" => BinaryOp::Multiply,
            "/" => BinaryOp::Divide,
            "<" => BinaryOp::LessThan,
            ">" => BinaryOp::GreaterThan,
            "<=" => BinaryOp::LessEqual,
            ">=" => BinaryOp::GreaterEqual,
            "==" => BinaryOp::Equal,
            "!=" => BinaryOp::NotEqual,
            other => BinaryOp::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Other(token) => token,
        }
    }

    /// Evaluate the operator on two integer constants.
    ///
    /// Returns `None` when the operator does not fold, the divisor is zero or the
    /// result does not fit in an `i64`.
    pub fn fold(&self, left: i64, right: i64) -> Option<i64> {
        match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Subtract => left.checked_sub(right),
            BinaryOp::Multiply => left.checked_mul(right),
            BinaryOp::Divide => left.checked_div(right),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Increment (`++`)
    Increment,
    /// Decrement (`--`)
    Decrement,
    /// Any other operator token
    Other(String),
}

impl UnaryOp {
    pub fn from_token(token: &str) -> Self {
        match token {
            "++" => UnaryOp::Increment,
            "--" => UnaryOp::Decrement,
            other => UnaryOp::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
            UnaryOp::Other(token) => token,
        }
    }

    /// Evaluate the operator on an integer constant.
    pub fn fold(&self, operand: i64) -> Option<i64> {
        match self {
            UnaryOp::Increment => operand.checked_add(1),
            UnaryOp::Decrement => operand.checked_sub(1),
            UnaryOp::Other(_) => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
