use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        lexer::Token,
        value::{Operand, Value},
    },
    util::num::parse_real,
};

impl Environment {
    /// Resolves a stack operand to a value.
    ///
    /// Computed values and numeric literals are returned unchanged. Symbols
    /// go through [`Environment::resolve_symbol`].
    ///
    /// # Example
    /// ```
    /// use polish::{Environment, Operand, Token};
    ///
    /// let env = Environment::new();
    ///
    /// assert_eq!(env.lookup(&Operand::Value(2.5)).unwrap(), 2.5);
    /// assert_eq!(env.lookup(&Operand::Token(Token::Symbol("pi".into()))).unwrap(),
    ///            std::f64::consts::PI);
    /// ```
    pub fn lookup(&self, operand: &Operand) -> EvalResult<Value> {
        match operand {
            Operand::Value(value) | Operand::Token(Token::Number(value)) => Ok(*value),
            Operand::Token(Token::Symbol(name)) => self.resolve_symbol(name),
        }
    }

    /// Resolves a symbol's text to a value.
    ///
    /// Resolution takes two explicit steps: the text is first parsed as a
    /// number, and only if that fails is it looked up as a variable name.
    ///
    /// # Errors
    /// `UnboundSymbol` if the text is neither numeric nor bound.
    pub fn resolve_symbol(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = parse_real(name) {
            return Ok(value);
        }

        self.get(name)
            .ok_or_else(|| RuntimeError::UnboundSymbol { name: name.to_string() })
    }
}
