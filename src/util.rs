/// Numeric parsing and coercion helpers.
///
/// This module holds the conversions between text, `f64` and truthiness that
/// both the lexer and the evaluator rely on, so that a literal is recognised
/// the same way wherever it appears.
pub mod num;
