//! Property tests for the evaluator.

use polish::{Environment, Operator, evaluate, util::num::parse_real};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

/// Names that tokenize as symbols and are accepted as assignment targets.
fn variable_name() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_filter("must not be an operator or a number", |name| {
                                    Operator::from_name(name).is_none()
                                    && parse_real(name).is_none()
                                })
}

proptest! {
    #[test]
    fn binary_arithmetic_matches_f64(a in finite(), b in finite()) {
        let mut env = Environment::new();

        prop_assert_eq!(evaluate(&format!("{a} {b} +"), &mut env).unwrap(), a + b);
        prop_assert_eq!(evaluate(&format!("{a} {b} -"), &mut env).unwrap(), a - b);
        prop_assert_eq!(evaluate(&format!("{a} {b} *"), &mut env).unwrap(), a * b);

        prop_assume!(b != 0.0);
        prop_assert_eq!(evaluate(&format!("{a} {b} /"), &mut env).unwrap(), a / b);
    }

    #[test]
    fn assigned_values_can_be_read_back(name in variable_name(), value in finite()) {
        let mut env = Environment::new();

        prop_assert_eq!(evaluate(&format!("{name} {value} ="), &mut env).unwrap(), value);
        prop_assert_eq!(evaluate(&name, &mut env).unwrap(), value);
    }

    #[test]
    fn pure_expressions_are_repeatable(a in finite(), b in finite(), p in finite()) {
        let mut env = Environment::new();
        let expr = format!("{p} {a} sin {b} cos ? {a} *");

        let first = evaluate(&expr, &mut env).unwrap();
        let second = evaluate(&expr, &mut env).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(env, Environment::new());
    }

    #[test]
    fn conditional_depends_only_on_truthiness(p in finite(), a in finite(), b in finite()) {
        let mut env = Environment::new();
        let expected = if p == 0.0 { b } else { a };

        prop_assert_eq!(evaluate(&format!("{p} {a} {b} ?"), &mut env).unwrap(), expected);
    }
}
