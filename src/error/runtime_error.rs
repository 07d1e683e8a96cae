use thiserror::Error;

use crate::interpreter::evaluator::operator::Operator;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// A symbol is neither numeric nor bound in the environment.
    #[error("Unbound symbol: {name}")]
    UnboundSymbol {
        /// The name of the symbol.
        name: String,
    },
    /// An operator needed more operands than the stack held.
    #[error("Invalid number of args to {operator}: expected {expected}, found {found}")]
    Arity {
        /// The operator that was applied.
        operator: Operator,
        /// The operator's arity.
        expected: usize,
        /// The number of items that were on the stack.
        found:    usize,
    },
    /// More than one item was left on the stack after evaluation.
    #[error("Invalid expression: {remaining} values left on the stack")]
    MalformedExpression {
        /// The number of items on the stack when evaluation finished.
        remaining: usize,
    },
    /// There was nothing to take from the stack.
    #[error("Empty stack: {0}")]
    EmptyStack(&'static str),
    /// An assignment target is not a legal variable name.
    #[error("Illegal variable name: {name}")]
    InvalidVariableName {
        /// The rejected target, as written or computed.
        name: String,
    },
    /// A math function was applied outside of its domain.
    #[error("Math domain error: {operator} is undefined for {argument}")]
    Domain {
        /// The operator that was applied.
        operator: Operator,
        /// The resolved argument.
        argument: f64,
    },
    /// A math function produced a result too large to represent.
    #[error("Math range error: {operator} of {argument} overflows")]
    Overflow {
        /// The operator that was applied.
        operator: Operator,
        /// The resolved argument.
        argument: f64,
    },
}
