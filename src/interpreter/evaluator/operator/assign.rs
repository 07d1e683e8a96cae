use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, operator::Operator},
        lexer::Token,
        value::{Operand, Value},
    },
};

/// Returns `true` if `name` can be bound by assignment.
///
/// A variable name must not be an operator name (operators cannot be
/// shadowed), must not be empty, and must start with an ASCII letter or an
/// underscore. Later characters are not restricted.
///
/// # Example
/// ```
/// use polish::is_valid_variable_name;
///
/// assert!(is_valid_variable_name("x"));
/// assert!(is_valid_variable_name("_tmp"));
/// assert!(is_valid_variable_name("rate-2"));
/// assert!(!is_valid_variable_name("2x"));
/// assert!(!is_valid_variable_name("+"));
/// assert!(!is_valid_variable_name("sin"));
/// assert!(!is_valid_variable_name(""));
/// ```
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    if Operator::from_name(name).is_some() {
        return false;
    }

    name.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Binds the target operand to the resolved value operand.
///
/// The target is taken as written: it must be a symbol holding a valid
/// variable name. The target is validated before the value is resolved, so a
/// rejected target never touches the environment. The binding replaces any
/// previous one and the bound value is returned.
///
/// # Errors
/// - `EmptyStack` if the target is an empty symbol.
/// - `InvalidVariableName` if the target is a number, a computed value or a
///   symbol that fails [`is_valid_variable_name`].
/// - `UnboundSymbol` if the value cannot be resolved.
pub fn assign(env: &mut Environment, target: &Operand, value: &Operand) -> EvalResult<Value> {
    let name = match target {
        Operand::Token(Token::Symbol(name)) if name.is_empty() => {
            return Err(RuntimeError::EmptyStack("assignment has no target"));
        },
        Operand::Token(Token::Symbol(name)) if is_valid_variable_name(name) => name,
        _ => return Err(RuntimeError::InvalidVariableName { name: target.to_string() }),
    };

    let value = env.lookup(value)?;
    env.bind(name, value);

    Ok(value)
}
