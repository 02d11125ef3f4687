use logos::Logos;
use std::ops::Range;

/// The kinds of tokens in an expression.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("*")]
    Mul,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    /// A run of letters, naming a variable.
    #[regex(r"[a-zA-Z]+")]
    Name,

    /// Any character that cannot start another token, such as `-` or `^`.
    #[regex(r".", priority = 0)]
    Unrecognized,
}

impl TokenKind {
    /// Returns a short description of the token kind, for use in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Add => "`+`",
            TokenKind::Mul => "`*`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Int | TokenKind::Float => "a number",
            TokenKind::Name => "a variable",
            TokenKind::Unrecognized => "an unrecognized character",
        }
    }
}

/// A token, borrowing its lexeme from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    pub span: Range<usize>,
    pub kind: TokenKind,
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token is whitespace, which the parser skips.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
