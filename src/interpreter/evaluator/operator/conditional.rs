use crate::{
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::{Operand, Value},
    },
    util::num::is_truthy,
};

/// Selects between two operands based on a predicate.
///
/// The predicate, the if-true operand and the else operand are resolved in
/// that order, all three of them, before the selection is made. An unbound
/// symbol in the branch that is not selected still fails the evaluation.
///
/// # Example
/// ```
/// use polish::{Environment, Operand, interpreter::evaluator::operator::conditional::conditional};
///
/// let env = Environment::new();
/// let r = conditional(&env, &Operand::Value(0.0), &Operand::Value(1.0), &Operand::Value(2.0));
/// assert_eq!(r.unwrap(), 2.0);
/// ```
pub fn conditional(env: &Environment,
                   predicate: &Operand,
                   if_true: &Operand,
                   otherwise: &Operand)
                   -> EvalResult<Value> {
    let predicate = env.lookup(predicate)?;
    let if_true = env.lookup(if_true)?;
    let otherwise = env.lookup(otherwise)?;

    Ok(if is_truthy(predicate) { if_true } else { otherwise })
}
