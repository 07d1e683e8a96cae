/// The per-session symbol table.
///
/// An `Environment` maps variable names to values. It starts with the
/// constants `pi` and `e`, grows through assignment and is owned by the
/// caller, so every session (or test) works on its own table.
///
/// # Responsibilities
/// - Seeds the built-in constants.
/// - Stores and overwrites bindings made by the `=` operator.
/// - Answers name lookups for the evaluator.
pub mod environment;
/// The evaluator module runs postfix token sequences.
///
/// The evaluator walks the tokens left to right, keeps pending operands on a
/// stack, applies operators as they appear and resolves the single remaining
/// item at the end.
///
/// # Responsibilities
/// - Drives the operand stack and enforces operator arity.
/// - Dispatches the fixed operator set.
/// - Resolves literals and symbols to values.
pub mod evaluator;
/// The lexer module tokenizes source text.
///
/// The lexer splits the raw input on single spaces and classifies each piece
/// as a numeric literal or a symbol. It never fails: anything that is not a
/// number is a symbol, and rejecting unknown symbols is left to lookup.
///
/// # Responsibilities
/// - Converts the input into an ordered `Vec<Token>`.
/// - Preserves empty pieces produced by repeated spaces.
pub mod lexer;
/// The value module defines what lives on the operand stack.
///
/// Stack items are either tokens that have not been resolved yet or values
/// computed by an operator. Keeping tokens unresolved lets assignment see the
/// name it binds instead of the name's current value.
pub mod value;
