use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, operator::Operator},
        value::Value,
    },
};

/// Generates a trigonometric builtin.
///
/// The generated function applies the `f64` method of the same name to its
/// argument (in radians). An infinite argument has no defined result and
/// produces a `Domain` error instead of `NaN`; a `NaN` argument propagates.
///
/// # Example
/// ```
/// use polish::interpreter::evaluator::operator::builtin::sin;
///
/// let r = sin(std::f64::consts::FRAC_PI_2).unwrap();
/// assert!((r - 1.0).abs() < 1e-15);
/// assert!(sin(f64::INFINITY).is_err());
/// ```
macro_rules! trig_builtin {
    ($fname:ident, $operator:expr) => {
        pub fn $fname(x: Value) -> EvalResult<Value> {
            if x.is_infinite() {
                return Err(RuntimeError::Domain { operator: $operator,
                                                  argument: x, });
            }

            Ok(x.$fname())
        }
    };
}

trig_builtin!(sin, Operator::Sin);
trig_builtin!(cos, Operator::Cos);
trig_builtin!(tan, Operator::Tan);

/// Computes `e^x`.
///
/// A finite argument whose result does not fit in an `f64` is reported as an
/// `Overflow` rather than silently becoming infinity. Infinite arguments map
/// to infinity and zero as usual.
///
/// # Example
/// ```
/// use polish::interpreter::evaluator::operator::builtin::exp;
///
/// assert_eq!(exp(0.0).unwrap(), 1.0);
/// assert_eq!(exp(f64::NEG_INFINITY).unwrap(), 0.0);
/// assert!(exp(1000.0).is_err());
/// ```
pub fn exp(x: Value) -> EvalResult<Value> {
    let result = x.exp();

    if x.is_finite() && result.is_infinite() {
        return Err(RuntimeError::Overflow { operator: Operator::Exp,
                                            argument: x, });
    }

    Ok(result)
}

/// Computes the natural logarithm.
///
/// The logarithm is only defined for positive arguments; zero and negative
/// numbers produce a `Domain` error. `NaN` propagates.
///
/// # Example
/// ```
/// use polish::{RuntimeError, Operator, interpreter::evaluator::operator::builtin::log};
///
/// assert_eq!(log(1.0).unwrap(), 0.0);
/// assert_eq!(log(0.0).unwrap_err(),
///            RuntimeError::Domain { operator: Operator::Log,
///                                   argument: 0.0, });
/// ```
pub fn log(x: Value) -> EvalResult<Value> {
    if x <= 0.0 {
        return Err(RuntimeError::Domain { operator: Operator::Log,
                                          argument: x, });
    }

    Ok(x.ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trig_at_zero() {
        assert_eq!(sin(0.0), Ok(0.0));
        assert_eq!(cos(0.0), Ok(1.0));
        assert_eq!(tan(0.0), Ok(0.0));
    }

    #[test]
    fn trig_rejects_infinity() {
        assert!(matches!(cos(f64::NEG_INFINITY),
                         Err(RuntimeError::Domain { operator: Operator::Cos, .. })));
        assert!(matches!(tan(f64::INFINITY),
                         Err(RuntimeError::Domain { operator: Operator::Tan, .. })));
    }

    #[test]
    fn trig_propagates_nan() {
        assert!(sin(f64::NAN).is_ok_and(f64::is_nan));
    }

    #[test]
    fn log_domain() {
        assert!(log(std::f64::consts::E).is_ok_and(|r| (r - 1.0).abs() < 1e-15));
        assert_eq!(log(f64::INFINITY), Ok(f64::INFINITY));
        assert!(matches!(log(-2.0), Err(RuntimeError::Domain { .. })));
        assert!(log(f64::NAN).is_ok_and(f64::is_nan));
    }

    #[test]
    fn exp_overflow_and_limits() {
        assert_eq!(exp(f64::INFINITY), Ok(f64::INFINITY));
        assert_eq!(exp(-1000.0), Ok(0.0));
        assert_eq!(exp(710.0),
                   Err(RuntimeError::Overflow { operator: Operator::Exp,
                                                argument: 710.0, }));
    }
}
