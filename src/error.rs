/// Parsing errors.
///
/// Defines all error types that can occur while turning a line of text into
/// a syntax tree: malformed tokens, unbalanced parentheses, misplaced or
/// unknown operators and empty input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a syntax
/// tree, such as operand count mismatches or invalid numeric literals.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while processing one expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line could not be turned into a syntax tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The syntax tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
