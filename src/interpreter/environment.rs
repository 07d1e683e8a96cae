use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Names bound in every fresh environment, with their values.
pub const BUILTIN_CONSTANTS: &[(&str, Value)] =
    &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Stores the variables of one evaluation session.
///
/// ## Usage
///
/// An `Environment` is created once per session and passed to every
/// evaluation. Bindings made by `=` are visible to all later evaluations that
/// use the same environment; independent sessions simply use independent
/// environments.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    symbols: HashMap<String, Value>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the built-in constants `pi` and
    /// `e`.
    ///
    /// # Example
    /// ```
    /// use polish::Environment;
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.get("pi"), Some(std::f64::consts::PI));
    /// assert_eq!(env.get("e"), Some(std::f64::consts::E));
    /// assert_eq!(env.len(), 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: BUILTIN_CONSTANTS.iter()
                                         .map(|&(name, value)| (name.to_string(), value))
                                         .collect(), }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.symbols.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// Returns the value that was bound before, if there was one. Built-in
    /// constants are ordinary bindings and can be replaced too.
    ///
    /// # Example
    /// ```
    /// use polish::Environment;
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.bind("x", 3.0), None);
    /// assert_eq!(env.bind("x", 4.0), Some(3.0));
    /// assert_eq!(env.get("x"), Some(4.0));
    /// ```
    pub fn bind(&mut self, name: &str, value: Value) -> Option<Value> {
        tracing::debug!(name, value, "binding variable");
        self.symbols.insert(name.to_string(), value)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Returns the number of bindings, constants included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns all bindings sorted by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, Value)> {
        let mut bindings = self.symbols
                               .iter()
                               .map(|(name, value)| (name.as_str(), *value))
                               .collect::<Vec<_>>();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_with_constants_only() {
        let env = Environment::default();
        assert_eq!(env.bindings(), vec![("e", std::f64::consts::E), ("pi", std::f64::consts::PI)]);
        assert!(!env.is_empty());
    }

    #[test]
    fn constants_can_be_rebound() {
        let mut env = Environment::new();
        assert_eq!(env.bind("pi", 3.0), Some(std::f64::consts::PI));
        assert_eq!(env.get("pi"), Some(3.0));
    }

    #[test]
    fn environments_are_independent() {
        let mut a = Environment::new();
        let b = Environment::new();
        a.bind("x", 1.0);
        assert!(a.contains("x"));
        assert!(!b.contains("x"));
        assert_eq!(a.len(), b.len() + 1);
    }
}
