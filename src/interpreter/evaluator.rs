/// Core evaluation logic.
///
/// Contains the stack machine that walks a token sequence, the result type
/// shared by the evaluator, and the finalization rules for the last stack
/// item.
pub mod core;

/// Resolution of stack operands to values.
///
/// Turns literals, numeric-looking symbols and bound names into values, in
/// that order.
pub mod lookup;

/// The fixed operator set.
///
/// Declares every operator with its name and arity and implements how each
/// one consumes its operands, including assignment and the conditional.
pub mod operator;
