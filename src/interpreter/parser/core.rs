use log::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::group::TreeBuilder,
        registry::Registry,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds the syntax tree of one expression from its tokens.
///
/// The token stream must hold exactly one expression: a number, a constant
/// or a parenthesized operator application. Names are resolved against
/// `registry`; operand counts are not checked here. Groups may nest at most
/// `max_depth` levels deep.
///
/// # Errors
/// - `Malformed` for the first token that matched no pattern.
/// - `EmptyExpression` when there are no tokens.
/// - `TrailingTokens` or `UnexpectedCloseParen` for anything left over
///   after the first expression.
/// - Any error raised while building the expression itself.
///
/// # Example
/// ```
/// use prefixa::interpreter::{lexer::tokenize, parser::core::parse, registry::Registry};
///
/// let registry = Registry::with_defaults();
/// let tree = parse(&tokenize("(+ 1 (* 2 pi))"), &registry, 64).unwrap();
/// assert_eq!(tree.to_string(), "(+ 1 (* 2 pi))");
/// ```
pub fn parse(tokens: &[Token<'_>], registry: &Registry, max_depth: usize) -> ParseResult<Node> {
    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Malformed) {
        return Err(ParseError::Malformed { token:  bad.text.to_string(),
                                           column: bad.column, });
    }

    let mut iter = tokens.iter().peekable();
    if iter.peek().is_none() {
        return Err(ParseError::EmptyExpression);
    }

    let builder = TreeBuilder::new(registry, max_depth);
    let tree = builder.parse_operand(&mut iter, 0)?;

    match iter.next() {
        None => {},
        Some(tok) if tok.kind == TokenKind::RightParen => {
            return Err(ParseError::UnexpectedCloseParen { column: tok.column });
        },
        Some(tok) => {
            return Err(ParseError::TrailingTokens { token:  tok.text.to_string(),
                                                    column: tok.column, });
        },
    }

    debug!("syntax tree ({} levels): {tree}", tree.depth());
    Ok(tree)
}
