use std::fmt;

use crate::interpreter::lexer::Token;

/// A runtime value: every expression evaluates to a double-precision float.
pub type Value = f64;

/// Represents one item on the operand stack.
///
/// Literals and symbols are pushed as they were tokenized and only resolved
/// when an operator consumes them, which lets assignment read its target as a
/// name. Operator results are pushed as already computed values.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A token that has not been resolved yet.
    Token(Token),
    /// The result of an operator application.
    Value(Value),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => write!(f, "{token}"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}
