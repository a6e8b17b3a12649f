use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operator received a number of operands it does not accept.
    #[error("Operator '{operator}': {expected}, got {found}.")]
    Arity {
        /// Name of the operator.
        operator: String,
        /// Human-readable description of the accepted counts, e.g.
        /// `exactly two parameters required`.
        expected: String,
        /// The number of operands actually supplied.
        found:    usize,
    },
    /// A number literal could not be converted to a double.
    #[error("Invalid number literal '{literal}'.")]
    NumericParse {
        /// The literal text.
        literal: String,
    },
    /// A constant node refers to a name missing from the registry.
    #[error("Unknown constant '{name}'.")]
    UnknownConstant {
        /// The constant name.
        name: String,
    },
    /// An operator node refers to a name missing from the registry.
    #[error("Unknown operator '{name}'.")]
    UnknownOperator {
        /// The operator name.
        name: String,
    },
}
