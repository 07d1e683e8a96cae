/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unbound symbols, arity violations, malformed expressions,
/// invalid assignment targets and math domain errors.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
