/// The evaluator module walks syntax trees and computes results.
///
/// The evaluator resolves operators and constants against the registry,
/// hands each operator its unevaluated operands and propagates the first
/// failure out of the whole expression.
///
/// # Responsibilities
/// - Converts number literals, looks up constants, dispatches operators.
/// - Provides the builtin operators and their operand count rules.
/// - Reports runtime errors such as wrong operand counts.
pub mod evaluator;
/// The lexer module tokenizes one line of input for further parsing.
///
/// The lexer reads the raw text and produces a stream of classified tokens:
/// parentheses, names, numbers, operator symbols and malformed text.
///
/// # Responsibilities
/// - Converts the input characters into tokens with their positions.
/// - Resolves the leading minus ambiguity by longest match.
/// - Keeps unrecognized text as tokens so it can be reported.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser enforces balanced parentheses, requires every group to start
/// with an operator and resolves names against the registry.
///
/// # Responsibilities
/// - Converts tokens into a single rooted tree of nodes.
/// - Validates structure, reporting errors with column information.
/// - Bounds the nesting depth of groups.
pub mod parser;
/// The registry of operators and constants.
///
/// Holds the name to behavior and name to value tables that parsing and
/// evaluation resolve names against. It is populated before use and only
/// read while expressions are processed.
pub mod registry;
