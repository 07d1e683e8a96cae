use std::fmt;

use logos::Logos;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::{Operand, Value},
    },
};

/// Assignment (`=`) and variable-name validation.
pub mod assign;
/// Arithmetic and transcendental operator implementations.
///
/// Each function receives already resolved arguments and enforces the domain
/// of the underlying math primitive.
pub mod builtin;
/// The ternary conditional (`?`).
pub mod conditional;

pub use assign::is_valid_variable_name;

/// Represents one operator of the fixed operator set.
///
/// The `Logos` derive doubles as the name registry: each variant declares the
/// exact text that names it, and [`Operator::from_name`] only accepts text
/// that lexes as a single operator with nothing left over.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tan`
    #[token("tan")]
    Tan,
    /// `exp`
    #[token("exp")]
    Exp,
    /// `log`, the natural logarithm.
    #[token("log")]
    Log,
    /// `=`, binds a variable.
    #[token("=")]
    Assign,
    /// `?`, selects between two values.
    #[token("?")]
    Conditional,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 11] = [Self::Mul,
                                 Self::Div,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Sin,
                                 Self::Cos,
                                 Self::Tan,
                                 Self::Exp,
                                 Self::Log,
                                 Self::Assign,
                                 Self::Conditional];

    /// Looks up the operator named exactly `name`.
    ///
    /// # Example
    /// ```
    /// use polish::Operator;
    ///
    /// assert_eq!(Operator::from_name("+"), Some(Operator::Add));
    /// assert_eq!(Operator::from_name("log"), Some(Operator::Log));
    /// assert_eq!(Operator::from_name("logx"), None);
    /// assert_eq!(Operator::from_name(""), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let mut lexer = Self::lexer(name);

        match lexer.next() {
            Some(Ok(operator)) if lexer.remainder().is_empty() => Some(operator),
            _ => None,
        }
    }

    /// Returns the text that names this operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Assign => "=",
            Self::Conditional => "?",
        }
    }

    /// Returns the number of stack items this operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Exp | Self::Log => 1,
            Self::Mul | Self::Div | Self::Add | Self::Sub | Self::Assign => 2,
            Self::Conditional => 3,
        }
    }

    /// Applies the operator to its operands.
    ///
    /// `operands` holds the popped stack items in their original order. They
    /// are still unresolved: arithmetic and math functions resolve them left
    /// to right, assignment reads its first operand as a name, and the
    /// conditional resolves all three.
    ///
    /// # Errors
    /// `Arity` if the operand count does not match [`Operator::arity`], and
    /// any error raised while resolving operands or by the operation itself.
    ///
    /// # Example
    /// ```
    /// use polish::{Environment, Operand, Operator, Token};
    ///
    /// let mut env = Environment::new();
    /// let operands = [Operand::Token(Token::Number(2.0)), Operand::Value(3.0)];
    ///
    /// assert_eq!(Operator::Mul.apply(&mut env, &operands).unwrap(), 6.0);
    /// ```
    pub fn apply(self, env: &mut Environment, operands: &[Operand]) -> EvalResult<Value> {
        tracing::trace!(operator = %self, ?operands, "applying operator");

        match (self, operands) {
            (Self::Mul, [lhs, rhs]) => Ok(env.lookup(lhs)? * env.lookup(rhs)?),
            (Self::Div, [lhs, rhs]) => Ok(env.lookup(lhs)? / env.lookup(rhs)?),
            (Self::Add, [lhs, rhs]) => Ok(env.lookup(lhs)? + env.lookup(rhs)?),
            (Self::Sub, [lhs, rhs]) => Ok(env.lookup(lhs)? - env.lookup(rhs)?),
            (Self::Sin, [x]) => builtin::sin(env.lookup(x)?),
            (Self::Cos, [x]) => builtin::cos(env.lookup(x)?),
            (Self::Tan, [x]) => builtin::tan(env.lookup(x)?),
            (Self::Exp, [x]) => builtin::exp(env.lookup(x)?),
            (Self::Log, [x]) => builtin::log(env.lookup(x)?),
            (Self::Assign, [target, value]) => assign::assign(env, target, value),
            (Self::Conditional, [predicate, if_true, otherwise]) => {
                conditional::conditional(env, predicate, if_true, otherwise)
            },
            _ => Err(RuntimeError::Arity { operator: self,
                                           expected: self.arity(),
                                           found:    operands.len(), }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
