use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        registry::Registry,
    },
};

/// Builds syntax trees from a token stream, resolving names against a
/// registry.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'r> {
    registry:  &'r Registry,
    max_depth: usize,
}

impl<'r> TreeBuilder<'r> {
    /// Creates a builder that allows groups to nest `max_depth` levels deep.
    #[must_use]
    pub const fn new(registry: &'r Registry, max_depth: usize) -> Self {
        Self { registry,
               max_depth }
    }

    /// Parses one operand: a number, a constant or a parenthesized group.
    ///
    /// `depth` is the number of groups already open around this operand.
    ///
    /// # Errors
    /// - `UnexpectedCloseParen` if the operand position holds a `)` with no
    ///   open group, e.g. a lone `)`.
    /// - `MisplacedOperator` for an operator outside operator position.
    /// - `UnknownName` for a name that is neither constant nor operator.
    /// - Any error from [`TreeBuilder::parse_group`].
    pub fn parse_operand<'a, 'src: 'a, I>(&self,
                                          tokens: &mut Peekable<I>,
                                          depth: usize)
                                          -> ParseResult<Node>
        where I: Iterator<Item = &'a Token<'src>>
    {
        let Some(tok) = tokens.next() else {
            return Err(ParseError::EmptyExpression);
        };

        match tok.kind {
            TokenKind::LeftParen => self.parse_group(tokens, tok, depth + 1),
            TokenKind::RightParen => Err(ParseError::UnexpectedCloseParen { column: tok.column }),
            TokenKind::Number => Ok(Node::number(tok.text)),
            TokenKind::Name if self.registry.is_constant(tok.text) => Ok(Node::constant(tok.text)),
            TokenKind::Name | TokenKind::OperatorSymbol => Err(self.misplaced_or_unknown(tok)),
            TokenKind::Malformed => Err(ParseError::Malformed { token:  tok.text.to_string(),
                                                                column: tok.column, }),
        }
    }

    /// Parses the contents of a group whose `(` has just been consumed, up to
    /// and including the matching `)`.
    ///
    /// Grammar:
    /// ```text
    ///     group := "(" operator operand* ")"
    ///            | "(" constant ")"
    /// ```
    /// A group holding a single constant stands for that constant.
    ///
    /// # Errors
    /// - `DepthExceeded` if `depth` is greater than the configured maximum.
    /// - `UnbalancedParen` if the input ends before the closing `)`.
    /// - `OperatorRequired` if the group does not start with an operator.
    /// - `UnknownOperator` if the leading name is not registered.
    pub fn parse_group<'a, 'src: 'a, I>(&self,
                                        tokens: &mut Peekable<I>,
                                        open: &Token<'_>,
                                        depth: usize)
                                        -> ParseResult<Node>
        where I: Iterator<Item = &'a Token<'src>>
    {
        if depth > self.max_depth {
            return Err(ParseError::DepthExceeded { limit:  self.max_depth,
                                                   column: open.column, });
        }

        let head = tokens.next()
                         .ok_or(ParseError::UnbalancedParen { column: open.column })?;

        let operator = match head.kind {
            TokenKind::Name if self.registry.is_constant(head.text) => {
                return self.finish_constant_group(tokens, open, head);
            },
            TokenKind::Name | TokenKind::OperatorSymbol if self.registry.is_operator(head.text) => {
                head.text
            },
            TokenKind::Name | TokenKind::OperatorSymbol => {
                return Err(ParseError::UnknownOperator { name:   head.text.to_string(),
                                                         column: head.column, });
            },
            TokenKind::Malformed => {
                return Err(ParseError::Malformed { token:  head.text.to_string(),
                                                   column: head.column, });
            },
            TokenKind::LeftParen | TokenKind::RightParen | TokenKind::Number => {
                return Err(ParseError::OperatorRequired { found:  head.text.to_string(),
                                                          column: head.column, });
            },
        };

        let mut children = Vec::new();
        loop {
            match tokens.peek() {
                None => return Err(ParseError::UnbalancedParen { column: open.column }),
                Some(tok) if tok.kind == TokenKind::RightParen => {
                    tokens.next();
                    return Ok(Node::operator(operator, children));
                },
                Some(_) => children.push(self.parse_operand(tokens, depth)?),
            }
        }
    }

    /// Finishes a `(constant)` group, which must close right after the name.
    fn finish_constant_group<'a, 'src: 'a, I>(&self,
                                              tokens: &mut Peekable<I>,
                                              open: &Token<'_>,
                                              head: &Token<'_>)
                                              -> ParseResult<Node>
        where I: Iterator<Item = &'a Token<'src>>
    {
        match tokens.next() {
            Some(tok) if tok.kind == TokenKind::RightParen => Ok(Node::constant(head.text)),
            Some(_) => Err(ParseError::OperatorRequired { found:  head.text.to_string(),
                                                          column: head.column, }),
            None => Err(ParseError::UnbalancedParen { column: open.column }),
        }
    }

    /// Classifies an operator-like token met in operand position.
    fn misplaced_or_unknown(&self, tok: &Token<'_>) -> ParseError {
        if self.registry.is_operator(tok.text) {
            ParseError::MisplacedOperator { operator: tok.text.to_string(),
                                            column:   tok.column, }
        } else {
            ParseError::UnknownName { name:   tok.text.to_string(),
                                      column: tok.column, }
        }
    }
}
