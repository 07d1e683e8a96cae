use std::fmt;

use crate::{interpreter::evaluator::operator::Operator, util::num::parse_real};

/// Represents a lexical token in the source input.
///
/// A token is one space-delimited piece of the expression. Operator names are
/// not a separate kind: they are symbols that the evaluator recognises.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `-2.5`, `1e-3` or `inf`.
    Number(f64),
    /// Any other piece: variable names, operator names, or unparseable text.
    /// Empty pieces from repeated spaces are kept as `Symbol("")`.
    Symbol(String),
}

impl Token {
    /// Returns the operator this token names, if any.
    ///
    /// Only symbols can name operators; numeric literals never do.
    ///
    /// # Example
    /// ```
    /// use polish::{Operator, Token};
    ///
    /// assert_eq!(Token::Symbol("sin".into()).as_operator(), Some(Operator::Sin));
    /// assert_eq!(Token::Symbol("x".into()).as_operator(), None);
    /// assert_eq!(Token::Number(1.0).as_operator(), None);
    /// ```
    #[must_use]
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Symbol(text) => Operator::from_name(text),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(s) => write!(f, "{s}"),
        }
    }
}

/// Splits an expression into tokens.
///
/// The input is split on every single space character. Repeated, leading or
/// trailing spaces therefore produce empty symbols, which later fail lookup
/// like any other unknown name. Each piece that parses as a float becomes a
/// [`Token::Number`]; everything else becomes a [`Token::Symbol`].
///
/// # Example
/// ```
/// use polish::{Token, tokenize};
///
/// let tokens = tokenize("2 pi *");
/// assert_eq!(tokens,
///            vec![Token::Number(2.0), Token::Symbol("pi".into()), Token::Symbol("*".into())]);
///
/// // Two spaces leave an empty symbol between them.
/// assert_eq!(tokenize("1  2"),
///            vec![Token::Number(1.0), Token::Symbol(String::new()), Token::Number(2.0)]);
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    expression.split(' ')
              .map(|piece| {
                  parse_real(piece).map_or_else(|| Token::Symbol(piece.to_string()), Token::Number)
              })
              .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sym(text: &str) -> Token {
        Token::Symbol(text.to_string())
    }

    #[test]
    fn splits_numbers_symbols_and_operators() {
        assert_eq!(tokenize("3 5 * 2 + 7 -"),
                   vec![Token::Number(3.0),
                        Token::Number(5.0),
                        sym("*"),
                        Token::Number(2.0),
                        sym("+"),
                        Token::Number(7.0),
                        sym("-")]);
    }

    #[test]
    fn keeps_assignment_and_conditional_as_symbols() {
        assert_eq!(tokenize("x 3 ="), vec![sym("x"), Token::Number(3.0), sym("=")]);
        assert_eq!(tokenize("0 1 2 ?"),
                   vec![Token::Number(0.0), Token::Number(1.0), Token::Number(2.0), sym("?")]);
    }

    #[test]
    fn parses_signed_and_exponent_literals() {
        assert_eq!(tokenize("-4 +2.5 1e3 .5"),
                   vec![Token::Number(-4.0),
                        Token::Number(2.5),
                        Token::Number(1000.0),
                        Token::Number(0.5)]);
    }

    #[test]
    fn minus_alone_is_a_symbol() {
        assert_eq!(tokenize("-"), vec![sym("-")]);
    }

    #[test]
    fn repeated_spaces_produce_empty_symbols() {
        assert_eq!(tokenize(" 1  2 "),
                   vec![sym(""), Token::Number(1.0), sym(""), Token::Number(2.0), sym("")]);
    }

    #[test]
    fn empty_input_is_one_empty_symbol() {
        assert_eq!(tokenize(""), vec![sym("")]);
    }

    #[test]
    fn tabs_are_not_separators() {
        assert_eq!(tokenize("1\t2"), vec![sym("1\t2")]);
        assert_eq!(tokenize("1\t 2"), vec![Token::Number(1.0), Token::Number(2.0)]);
    }

    #[test]
    fn malformed_numbers_become_symbols() {
        assert_eq!(tokenize("1.2.3 12abc"), vec![sym("1.2.3"), sym("12abc")]);
    }

    #[test]
    fn special_float_names_are_numbers() {
        let tokens = tokenize("inf -Infinity");
        assert_eq!(tokens, vec![Token::Number(f64::INFINITY), Token::Number(f64::NEG_INFINITY)]);

        let nan = tokenize("NaN");
        assert!(matches!(nan.as_slice(), [Token::Number(n)] if n.is_nan()));
    }

    #[test]
    fn digit_groups_are_numbers() {
        assert_eq!(tokenize("1_000 1_0.5"), vec![Token::Number(1000.0), Token::Number(10.5)]);
    }

    #[test]
    fn misplaced_underscores_become_symbols() {
        assert_eq!(tokenize("_1 1__0 1_"), vec![sym("_1"), sym("1__0"), sym("1_")]);
    }
}
