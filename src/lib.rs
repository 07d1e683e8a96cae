//! # polish
//!
//! polish is a reverse Polish notation calculator written in Rust.
//! It tokenizes postfix expressions, evaluates them on an operand stack and
//! keeps variables in a session [`Environment`] that outlives a single
//! evaluation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for evaluation.
///
/// This module defines every failure that can be raised while an expression
/// is evaluated. All of them are user-input errors: unknown symbols, operators
/// starved of operands, leftover stack items, bad assignment targets and math
/// domain violations.
///
/// # Responsibilities
/// - Defines the `RuntimeError` enum for all failure modes.
/// - Carries the offending symbol, operator or argument for user feedback.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates tokenizing and evaluating expressions.
///
/// This module ties together the lexer, the operand representation, the
/// session environment and the stack evaluator.
///
/// # Responsibilities
/// - Splits source text into tokens.
/// - Runs the postfix stack machine and dispatches operators.
/// - Owns the per-session symbol table.
pub mod interpreter;
/// General numeric helpers shared by the lexer and the evaluator.
pub mod util;

pub use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::EvalResult,
            operator::{Operator, is_valid_variable_name},
        },
        lexer::{Token, tokenize},
        value::{Operand, Value},
    },
};

/// Evaluates a postfix expression in the given session environment.
///
/// The expression is split into tokens and run through the stack evaluator.
/// Assignments made by the expression are written into `environment` and stay
/// there, even when a later part of the same expression fails.
///
/// # Errors
/// Returns a [`RuntimeError`] for unbound symbols, operators without enough
/// operands, leftover or missing stack items, invalid assignment targets and
/// math domain or range violations.
///
/// # Examples
/// ```
/// use polish::{Environment, RuntimeError, evaluate};
///
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate("3 5 * 2 + 7 -", &mut env).unwrap(), 10.0);
///
/// // Variables persist across evaluations in the same environment.
/// assert_eq!(evaluate("x 3 =", &mut env).unwrap(), 3.0);
/// assert_eq!(evaluate("x 2 *", &mut env).unwrap(), 6.0);
///
/// // Unknown names are reported.
/// let err = evaluate("y 1 +", &mut env).unwrap_err();
/// assert!(matches!(err, RuntimeError::UnboundSymbol { .. }));
/// ```
pub fn evaluate(expression: &str, environment: &mut Environment) -> EvalResult<Value> {
    tracing::debug!(expression, "evaluating expression");
    environment.eval_tokens(tokenize(expression))
}
