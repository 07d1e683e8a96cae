use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        lexer::Token,
        value::{Operand, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Environment {
    /// Evaluates a token sequence and returns the resulting value.
    ///
    /// Tokens are consumed left to right. Tokens that do not name an operator
    /// are pushed unresolved. An operator pops as many items as its arity,
    /// keeping their original order, and pushes its result. When the tokens
    /// run out, the top item is resolved and must be the only one left.
    ///
    /// Bindings made by assignments stay in the environment even if a later
    /// token makes the evaluation fail.
    ///
    /// # Errors
    /// - `Arity` if an operator finds fewer items than it consumes.
    /// - `EmptyStack` if the token sequence is empty.
    /// - `MalformedExpression` if more than one item is left at the end.
    /// - Any error raised by lookup or by an operator.
    ///
    /// # Example
    /// ```
    /// use polish::{Environment, RuntimeError, tokenize};
    ///
    /// let mut env = Environment::new();
    ///
    /// assert_eq!(env.eval_tokens(tokenize("3 5 10 + *")).unwrap(), 45.0);
    ///
    /// let err = env.eval_tokens(tokenize("1 2")).unwrap_err();
    /// assert_eq!(err, RuntimeError::MalformedExpression { remaining: 2 });
    /// ```
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_tokens<I>(&mut self, tokens: I) -> EvalResult<Value>
        where I: IntoIterator<Item = Token>
    {
        let mut stack: Vec<Operand> = Vec::new();

        for token in tokens {
            let Some(operator) = token.as_operator() else {
                stack.push(Operand::Token(token));
                continue;
            };

            let arity = operator.arity();
            if stack.len() < arity {
                return Err(RuntimeError::Arity { operator,
                                                 expected: arity,
                                                 found: stack.len() });
            }

            let operands = stack.split_off(stack.len() - arity);
            let result = operator.apply(self, &operands)?;
            stack.push(Operand::Value(result));
        }

        let remaining = stack.len();
        let top = stack.pop()
                       .ok_or(RuntimeError::EmptyStack("nothing to evaluate"))?;

        // The top item is resolved before leftovers are reported.
        let result = self.lookup(&top)?;

        if !stack.is_empty() {
            return Err(RuntimeError::MalformedExpression { remaining });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interpreter::evaluator::operator::Operator, tokenize};

    fn eval(env: &mut Environment, source: &str) -> EvalResult<Value> {
        env.eval_tokens(tokenize(source))
    }

    #[test]
    fn single_literal_evaluates_to_itself() {
        let mut env = Environment::new();
        assert_eq!(eval(&mut env, "1"), Ok(1.0));
    }

    #[test]
    fn operands_keep_left_to_right_order() {
        let mut env = Environment::new();
        assert_eq!(eval(&mut env, "10 4 -"), Ok(6.0));
        assert_eq!(eval(&mut env, "8 2 /"), Ok(4.0));
    }

    #[test]
    fn empty_sequence_is_an_empty_stack() {
        let mut env = Environment::new();
        assert_eq!(env.eval_tokens(Vec::<Token>::new()),
                   Err(RuntimeError::EmptyStack("nothing to evaluate")));
    }

    #[test]
    fn arity_error_reports_operator_and_counts() {
        let mut env = Environment::new();
        assert_eq!(eval(&mut env, "5 +"),
                   Err(RuntimeError::Arity { operator: Operator::Add,
                                             expected: 2,
                                             found:    1, }));
        assert_eq!(eval(&mut env, "1 2 ?"),
                   Err(RuntimeError::Arity { operator: Operator::Conditional,
                                             expected: 3,
                                             found:    2, }));
    }

    #[test]
    fn top_item_is_resolved_before_leftovers_are_reported() {
        let mut env = Environment::new();
        assert_eq!(eval(&mut env, "1 nope"),
                   Err(RuntimeError::UnboundSymbol { name: "nope".to_string() }));
        assert_eq!(eval(&mut env, "nope 1"),
                   Err(RuntimeError::MalformedExpression { remaining: 2 }));
    }

    #[test]
    fn unresolved_leftovers_count_towards_malformed() {
        let mut env = Environment::new();
        assert_eq!(eval(&mut env, "1 2 3 +"),
                   Err(RuntimeError::MalformedExpression { remaining: 2 }));
    }
}
