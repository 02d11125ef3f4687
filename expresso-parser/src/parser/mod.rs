pub mod ast;
pub mod error;
pub mod token;

use error::{kind, Error};
use expresso_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The deepest parentheses may be nested. Each level of nesting is parsed recursively.
pub const MAX_NESTING: usize = 256;

/// A backtracking parser over the tokens of one expression.
///
/// The source is tokenized up front; parsing only moves a cursor over the tokens, so a
/// speculative parse can be undone by restoring the cursor (see [`Parser::try_parse`]).
#[derive(Debug)]
pub struct Parser<'source> {
    tokens: Box<[Token<'source>]>,

    /// Index of the next token to consume.
    cursor: usize,

    /// Number of parentheses open around the cursor.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Tokenizes the source and places the cursor at its start.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
        }
    }

    /// Creates an error pointing at the token under the cursor.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// The empty span just past the last token.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// The span of the token under the cursor, or [`Parser::eof_span`] past the last token.
    pub fn span(&self) -> Range<usize> {
        self.current_token().map_or_else(|| self.eof_span(), |token| token.span.clone())
    }

    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    fn remaining(&self) -> &[Token<'source>] {
        self.tokens.get(self.cursor..).unwrap_or_default()
    }

    pub fn advance_past_whitespace(&mut self) {
        while self.current_token().is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns true if nothing but whitespace is left.
    pub fn is_eof(&self) -> bool {
        self.remaining().iter().all(Token::is_whitespace)
    }

    /// Consumes and returns the next token that is not whitespace.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.advance_past_whitespace();
        let token = self.current_token().cloned().ok_or_else(|| self.error(kind::UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Returns the next token that is not whitespace, without consuming anything.
    pub fn peek_token(&self) -> Result<Token<'source>, Error> {
        self.remaining()
            .iter()
            .find(|token| !token.is_whitespace())
            .cloned()
            .ok_or_else(|| Error::new(vec![self.eof_span()], kind::UnexpectedEof))
    }

    /// Parses a `T` without consuming anything, whether or not it succeeds.
    pub fn peek<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        let result = T::parse(self);
        self.cursor = start;
        result
    }

    /// Parses a `T`, restoring the cursor if it fails.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Runs the given parsing function, restoring the cursor if it fails.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.cursor;
        let result = f(self);
        if result.is_err() {
            self.cursor = start;
        }
        result
    }

    /// Runs the given parsing function one level of parentheses deeper. Fails with
    /// [`kind::NestingTooDeep`], pointing at `open_span`, if that exceeds [`MAX_NESTING`].
    pub fn nested<T, F>(&mut self, open_span: Range<usize>, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(vec![open_span], kind::NestingTooDeep { limit: MAX_NESTING }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Parses a `T` that must span the rest of the source, apart from trailing whitespace.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.advance_past_whitespace();

        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(kind::UnclosedParenthesis { opening: false }))
            },
            Some(token) => Err(Error::new(
                vec![token.span.start..self.eof_span().end],
                kind::ExpectedEof,
            )),
        }
    }
}

/// A syntax tree node that can be parsed from tokens.
pub trait Parse: Sized {
    /// Parses a value, advancing the parser past it. On failure the cursor may be left anywhere;
    /// call through [`Parser::try_parse`] to have it restored.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}
