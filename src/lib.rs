//! # prefixa
//!
//! prefixa evaluates single-line, fully parenthesized prefix arithmetic
//! expressions such as `(+ 1 (* 2 pi))`, producing a double precision result
//! or a descriptive error.
//!
//! Evaluation runs in three steps: the lexer splits the line into tokens, the
//! parser builds a syntax tree, and the evaluator walks it. Operators and
//! constants come from a [`Registry`] that the caller builds up front and
//! passes in explicitly.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::interpreter::{
    evaluator::core::Evaluator,
    lexer::tokenize,
    parser::core::parse,
};
pub use crate::{config::Config, error::Error, interpreter::registry::Registry};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` type, the tree the parser builds and the
/// evaluator walks. A fresh tree is built for every expression.
pub mod ast;
/// Settings that apply to every evaluation, such as the nesting limit and
/// the printed precision.
pub mod config;
/// Provides error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating an expression, each with enough context (token, column,
/// operator name) to explain the failure to a user.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and registry.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;
/// General utilities, currently numeric output formatting.
pub mod util;

/// Evaluates one expression against the given registry.
///
/// The line is tokenized, parsed into a syntax tree and evaluated. Nothing is
/// kept between calls, so evaluating the same text twice gives the same
/// result.
///
/// # Errors
/// Returns a parse error if the line is not a single well-formed expression
/// over known names, or a runtime error if evaluation fails.
///
/// # Examples
/// ```
/// use prefixa::{Config, Registry, evaluate};
///
/// let registry = Registry::with_defaults();
/// let config = Config::default();
///
/// let value = evaluate("(+ (* 2 3) (- 10 4))", &registry, &config).unwrap();
/// assert_eq!(value, 12.0);
///
/// // Wrong number of operands for `^`.
/// assert!(evaluate("(^ 2)", &registry, &config).is_err());
/// ```
pub fn evaluate(source: &str, registry: &Registry, config: &Config) -> Result<f64, Error> {
    let tokens = tokenize(source);
    debug!("tokens: {:?}",
           tokens.iter().map(|t| (t.kind, t.text)).collect::<Vec<_>>());

    let tree = parse(&tokens, registry, config.max_depth)?;
    let value = Evaluator::new(registry).eval(&tree)?;

    debug!("result: {value}");
    Ok(value)
}
