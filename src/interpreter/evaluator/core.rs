use log::trace;

use crate::{
    ast::{Node, NodeTag},
    error::RuntimeError,
    interpreter::{evaluator::function::core::Arity, registry::Registry},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks a syntax tree and computes its value.
///
/// The evaluator holds nothing but a borrowed registry, so evaluating the
/// same tree twice always gives the same result.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'r> {
    registry: &'r Registry,
}

impl<'r> Evaluator<'r> {
    /// Creates an evaluator resolving names against `registry`.
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Evaluates a node and returns its value.
    ///
    /// - Number literals are converted from their text.
    /// - Constants are looked up in the registry.
    /// - Operators are looked up in the registry and called with the node's
    ///   children, which they evaluate themselves.
    ///
    /// Floating point edge cases such as division by zero are not errors;
    /// they produce infinities or NaN as usual.
    pub fn eval(&self, node: &Node) -> EvalResult<f64> {
        let value = match &node.tag {
            NodeTag::Number(text) => Self::eval_number(text)?,
            NodeTag::Constant(name) => self.eval_constant(name)?,
            NodeTag::Operator(name) => self.eval_operator(name, &node.children)?,
        };
        trace!("{node} = {value}");
        Ok(value)
    }

    fn eval_number(text: &str) -> EvalResult<f64> {
        text.parse()
            .map_err(|_| RuntimeError::NumericParse { literal: text.to_string() })
    }

    fn eval_constant(&self, name: &str) -> EvalResult<f64> {
        self.registry
            .constant(name)
            .ok_or_else(|| RuntimeError::UnknownConstant { name: name.to_string() })
    }

    fn eval_operator(&self, name: &str, children: &[Node]) -> EvalResult<f64> {
        let func = self.registry
                       .operator(name)
                       .ok_or_else(|| RuntimeError::UnknownOperator { name: name.to_string() })?;

        func(&Operands { evaluator: self,
                         name,
                         nodes: children })
    }
}

/// The operands of one operator application.
///
/// Operands are handed over unevaluated. Each call to [`Operands::value`]
/// evaluates one child, so an operator that wants every operand exactly once
/// should call [`Operands::values`] once.
#[derive(Debug, Clone, Copy)]
pub struct Operands<'a> {
    evaluator: &'a Evaluator<'a>,
    name:      &'a str,
    nodes:     &'a [Node],
}

impl<'a> Operands<'a> {
    /// The name the operator was invoked under.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The number of operands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the operator was applied to no operands at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The unevaluated operand nodes.
    #[must_use]
    pub const fn nodes(&self) -> &'a [Node] {
        self.nodes
    }

    /// Evaluates the operand at `index`.
    ///
    /// # Errors
    /// Returns an arity error if there is no such operand, or any error raised
    /// while evaluating it.
    pub fn value(&self, index: usize) -> EvalResult<f64> {
        let node = self.nodes
                       .get(index)
                       .ok_or_else(|| self.arity_error(Arity::AtLeast(index + 1)))?;
        self.evaluator.eval(node)
    }

    /// Evaluates all operands left to right, stopping at the first error.
    pub fn values(&self) -> EvalResult<Vec<f64>> {
        self.nodes.iter().map(|node| self.evaluator.eval(node)).collect()
    }

    /// Fails unless the operand count is accepted by `arity`.
    pub fn expect(&self, arity: Arity) -> EvalResult<()> {
        if arity.check(self.len()) {
            Ok(())
        } else {
            Err(self.arity_error(arity))
        }
    }

    /// Builds the error reported when this operator gets the wrong number of
    /// operands.
    #[must_use]
    pub fn arity_error(&self, arity: Arity) -> RuntimeError {
        RuntimeError::Arity { operator: self.name.to_string(),
                              expected: arity.describe(),
                              found:    self.len(), }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn eval(node: &Node) -> EvalResult<f64> {
        Evaluator::new(&Registry::with_defaults()).eval(node)
    }

    #[test]
    fn numbers_are_parsed_when_evaluated() {
        assert_eq!(eval(&Node::number("-2.5")), Ok(-2.5));
    }

    #[test]
    fn invalid_literal_is_a_numeric_parse_error() {
        assert_eq!(eval(&Node::number("1.2.3")),
                   Err(RuntimeError::NumericParse { literal: "1.2.3".to_string() }));
    }

    #[test]
    fn constants_come_from_the_registry() {
        assert_eq!(eval(&Node::constant("pi")), Ok(std::f64::consts::PI));
        assert_eq!(eval(&Node::constant("nope")),
                   Err(RuntimeError::UnknownConstant { name: "nope".to_string() }));
    }

    #[test]
    fn missing_operator_is_reported() {
        let tree = Node::operator("frob", vec![Node::number("1")]);
        assert_eq!(eval(&tree),
                   Err(RuntimeError::UnknownOperator { name: "frob".to_string() }));
    }

    #[test]
    fn errors_from_nested_operators_abort_the_whole_tree() {
        let tree = Node::operator("+",
                                  vec![Node::number("1"),
                                       Node::operator("^", vec![Node::number("2")]),]);
        assert!(matches!(eval(&tree), Err(RuntimeError::Arity { operator, .. }) if operator == "^"));
    }

    #[test]
    fn each_operand_is_evaluated_once_in_order() {
        let seen = Rc::new(Cell::new(0_u32));
        let mut registry = Registry::with_defaults();
        let counter = Rc::clone(&seen);
        registry.define_operator("tick", move |_| {
                                     counter.set(counter.get() + 1);
                                     Ok(f64::from(counter.get()))
                                 });

        let tick = || Node::operator("tick", Vec::new());
        let tree = Node::operator("-", vec![tick(), tick(), tick()]);
        let value = Evaluator::new(&registry).eval(&tree);

        assert_eq!(value, Ok(1.0 - 2.0 - 3.0));
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn custom_operators_see_their_invocation_name() {
        let mut registry = Registry::new();
        registry.define_operator("only_one", |ops| {
                                     ops.expect(Arity::Exact(1))?;
                                     ops.value(0)
                                 });
        let tree = Node::operator("only_one", Vec::new());
        let err = Evaluator::new(&registry).eval(&tree).unwrap_err();
        assert_eq!(err.to_string(),
                   "Operator 'only_one': exactly one parameter required, got 0.");
    }

    #[test]
    fn value_out_of_range_is_an_arity_error() {
        let mut registry = Registry::new();
        registry.define_operator("second", |ops| ops.value(1));
        let tree = Node::operator("second", vec![Node::number("1")]);
        let err = Evaluator::new(&registry).eval(&tree).unwrap_err();
        assert_eq!(err.to_string(),
                   "Operator 'second': at least two parameters required, got 1.");
    }
}
