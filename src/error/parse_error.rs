use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or tree building.
///
/// Columns are 1-based character positions within the input line.
pub enum ParseError {
    /// A run of characters that matches no token pattern.
    #[error("Error at column {column}: Malformed token '{token}'.")]
    Malformed {
        /// The offending text.
        token:  String,
        /// Column of the first character.
        column: usize,
    },
    /// Input ended while a `(` was still open.
    #[error("Error at column {column}: '(' is never closed.")]
    UnbalancedParen {
        /// Column of the unmatched `(`.
        column: usize,
    },
    /// A `)` appeared with no open `(` in scope.
    #[error("Error at column {column}: ')' has no matching '('.")]
    UnexpectedCloseParen {
        /// Column of the stray `)`.
        column: usize,
    },
    /// A group did not start with an operator.
    #[error("Error at column {column}: An operator is required after '(', found '{found}'.")]
    OperatorRequired {
        /// The token found in operator position, or `)` for an empty group.
        found:  String,
        /// Column of that token.
        column: usize,
    },
    /// An operator appeared somewhere other than directly after `(`.
    #[error("Error at column {column}: Operator '{operator}' must directly follow '('.")]
    MisplacedOperator {
        /// The operator name.
        operator: String,
        /// Column of the operator.
        column:   usize,
    },
    /// The operator heading a group is not registered.
    #[error("Error at column {column}: Unknown operator '{name}'.")]
    UnknownOperator {
        /// The unresolved name.
        name:   String,
        /// Column of the name.
        column: usize,
    },
    /// An operand is a name that is neither a registered constant nor an
    /// operator.
    #[error("Error at column {column}: Unknown constant or name '{name}'.")]
    UnknownName {
        /// The unresolved name.
        name:   String,
        /// Column of the name.
        column: usize,
    },
    /// The line contained no expression at all.
    #[error("Empty expression.")]
    EmptyExpression,
    /// More than one top-level expression was given.
    #[error("Error at column {column}: Extra tokens after expression, starting at '{token}'.")]
    TrailingTokens {
        /// First token of the second expression.
        token:  String,
        /// Column of that token.
        column: usize,
    },
    /// Parentheses nest deeper than the configured limit.
    #[error("Error at column {column}: Expression nests deeper than the limit of {limit}.")]
    DepthExceeded {
        /// The configured maximum depth.
        limit:  usize,
        /// Column of the `(` that crossed the limit.
        column: usize,
    },
}
