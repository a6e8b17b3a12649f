use std::{collections::HashMap, fmt};

use log::trace;

use crate::interpreter::evaluator::{
    core::{EvalResult, Operands},
    function::core::{Arity, BUILTIN_CONSTANTS, BUILTIN_TABLE, BuiltinFn},
};

/// An operator implementation.
///
/// The function receives the unevaluated operands of the node it is applied
/// to. It decides which operand counts it accepts and evaluates the operands
/// it needs through [`Operands`].
pub type OperatorFn = Box<dyn Fn(&Operands<'_>) -> EvalResult<f64>>;

/// The table of operators and constants that names resolve against.
///
/// The registry is built before any expression is evaluated. Parsing and
/// evaluation only ever borrow it immutably, so it cannot change while an
/// expression is being processed.
///
/// # Example
/// ```
/// use prefixa::{Config, evaluate, interpreter::registry::Registry};
///
/// let mut registry = Registry::with_defaults();
/// registry.define_constant("answer", 42.0);
/// registry.define_operator("first", |ops| ops.value(0));
///
/// let value = evaluate("(first answer 1 2)", &registry, &Config::default()).unwrap();
/// assert_eq!(value, 42.0);
/// ```
#[derive(Default)]
pub struct Registry {
    operators: HashMap<String, OperatorFn>,
    constants: HashMap<String, f64>,
}

impl Registry {
    /// Creates a registry with no operators and no constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the builtin operators and constants.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for def in BUILTIN_TABLE {
            registry.define_checked(def.name, def.arity, def.func);
        }
        for (name, value) in BUILTIN_CONSTANTS {
            registry.define_constant(*name, *value);
        }
        registry
    }

    /// Registers an operator, replacing any previous one with the same name.
    pub fn define_operator<F>(&mut self, name: impl Into<String>, func: F)
        where F: Fn(&Operands<'_>) -> EvalResult<f64> + 'static
    {
        self.operators.insert(name.into(), Box::new(func));
    }

    /// Registers an operator that accepts the operand counts described by
    /// `arity` and computes its result from the evaluated operands.
    ///
    /// Operands are evaluated left to right, each exactly once, after the
    /// operand count has been checked.
    pub fn define_checked(&mut self, name: impl Into<String>, arity: Arity, func: BuiltinFn) {
        self.define_operator(name, move |ops| {
                                ops.expect(arity)?;
                                let values = ops.values()?;
                                trace!("{} applied to {values:?}", ops.name());
                                Ok(func(&values))
                            });
    }

    /// Registers a constant, replacing any previous one with the same name.
    pub fn define_constant(&mut self, name: impl Into<String>, value: f64) {
        self.constants.insert(name.into(), value);
    }

    /// Removes an operator and a constant of the given name.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let operator = self.operators.remove(name).is_some();
        let constant = self.constants.remove(name).is_some();
        operator || constant
    }

    /// Looks up an operator by name.
    #[must_use]
    pub fn operator(&self, name: &str) -> Option<&OperatorFn> {
        self.operators.get(name)
    }

    /// Looks up the value of a constant by name.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Whether an operator of this name is registered.
    #[must_use]
    pub fn is_operator(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Whether a constant of this name is registered.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Returns the names of all operators in sorted order.
    #[must_use]
    pub fn operator_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the names of all constants in sorted order.
    #[must_use]
    pub fn constant_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constants.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
         .field("operators", &self.operator_names())
         .field("constants", &self.constant_names())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_contain_required_names() {
        let registry = Registry::with_defaults();
        for name in ["+", "-", "*", "/", "^", "ln", "sin", "cos"] {
            assert!(registry.is_operator(name), "missing operator {name}");
        }
        assert_eq!(registry.constant("pi"), Some(std::f64::consts::PI));
        assert_eq!(registry.constant("e"), Some(std::f64::consts::E));
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.operator_names().is_empty());
        assert!(registry.constant_names().is_empty());
    }

    #[test]
    fn definitions_replace_earlier_ones() {
        let mut registry = Registry::new();
        registry.define_constant("k", 1.0);
        registry.define_constant("k", 2.0);
        assert_eq!(registry.constant("k"), Some(2.0));
    }

    #[test]
    fn remove_reports_whether_anything_was_removed() {
        let mut registry = Registry::with_defaults();
        assert!(registry.remove("sin"));
        assert!(!registry.is_operator("sin"));
        assert!(!registry.remove("sin"));
    }

    #[test]
    fn loosely_checked_builtin_does_not_panic() {
        use crate::{Config, evaluate, interpreter::evaluator::function::arithmetic};

        let mut registry = Registry::new();
        registry.define_checked("pw", Arity::AtLeast(0), arithmetic::power);

        let value = evaluate("(pw 2)", &registry, &Config::default()).unwrap();
        assert!(value.is_nan());
        assert_eq!(evaluate("(pw 2 3)", &registry, &Config::default()), Ok(8.0));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = Registry::new();
        registry.define_constant("b", 1.0);
        registry.define_constant("a", 2.0);
        assert_eq!(registry.constant_names(), ["a", "b"]);
    }
}
