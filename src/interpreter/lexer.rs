use std::ops::Range;

use logos::Logos;

/// The token patterns recognized by the scanner.
///
/// Logos picks the longest match at each position, so `-5` becomes a single
/// negative number while `- 5` is an operator symbol followed by a number.
/// Whitespace between tokens is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Names of operators or constants, such as `sin` or `pi`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
    /// Number literals such as `42`, `-3` or `2.5`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
    /// Single character operator symbols.
    #[regex(r"[+\-*/^%]")]
    Symbol,
}

/// The classification of a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// An identifier: a letter or underscore followed by letters, digits or
    /// underscores.
    Name,
    /// A number literal with an optional leading minus and fraction.
    Number,
    /// One of `+ - * / ^ %`.
    OperatorSymbol,
    /// Text that matches no other pattern. Reported by the parser.
    Malformed,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::LParen => Self::LeftParen,
            RawToken::RParen => Self::RightParen,
            RawToken::Name => Self::Name,
            RawToken::Number => Self::Number,
            RawToken::Symbol => Self::OperatorSymbol,
        }
    }
}

/// Represents a lexical token in the source line.
///
/// A token is a classified slice of the input together with its position.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The raw text of the token.
    pub text:   &'src str,
    /// Byte range of the token within the line.
    pub span:   Range<usize>,
    /// 1-based character column of the first character.
    pub column: usize,
}

/// Splits one line of text into tokens, left to right, skipping whitespace.
///
/// Tokenizing never fails. Characters that fit no pattern are collected into
/// [`TokenKind::Malformed`] tokens, adjacent ones merged into a single token,
/// so that the parser can report them with their position.
///
/// A malformed run ends where the next valid token starts, not at the next
/// whitespace: in `1.x` only the `.` is malformed, and `1` and `x` are lexed
/// as a number and a name.
///
/// # Example
/// ```
/// use prefixa::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("(+ 1 -2)").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::LeftParen,
///             TokenKind::OperatorSymbol,
///             TokenKind::Number,
///             TokenKind::Number,
///             TokenKind::RightParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let kind = raw.map_or(TokenKind::Malformed, TokenKind::from);

        if kind == TokenKind::Malformed
           && let Some(last) = tokens.last_mut()
           && last.kind == TokenKind::Malformed
           && last.span.end == span.start
        {
            last.span.end = span.end;
            last.text = &source[last.span.clone()];
            continue;
        }

        let column = source[..span.start].chars().count() + 1;
        tokens.push(Token { kind,
                            text: &source[span.clone()],
                            span,
                            column });
    }

    tokens
}
