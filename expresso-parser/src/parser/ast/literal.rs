use crate::{
    parser::{
        error::{kind, Error},
        token::{Float, Int, Name},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// A nonnegative number, written as digits with an optional fractional part (`3`, `2.50`).
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    pub value: f64,
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = match input.try_parse::<Int>() {
            Ok(int) => (int.lexeme, int.span),
            Err(_) => input.try_parse::<Float>().map(|float| (float.lexeme, float.span))?,
        };

        // digits always parse, but enough of them overflow to infinity
        match lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self { value, span }),
            _ => Err(Error::new(vec![span], kind::InvalidNumber { lexeme })),
        }
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A variable: one or more ASCII letters. Case is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct LitVar {
    pub name: String,
    pub span: Range<usize>,
}

impl Parse for LitVar {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<Name>().map(|name| Self { name: name.lexeme, span: name.span })
    }
}

impl fmt::Display for LitVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A leaf of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(LitNum),
    Variable(LitVar),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Variable(var) => var.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.peek_token()?;
        match token.kind {
            TokenKind::Int | TokenKind::Float => input.try_parse().map(Literal::Number),
            TokenKind::Name => input.try_parse().map(Literal::Variable),
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Float, TokenKind::Name],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Variable(var) => var.fmt(f),
        }
    }
}
