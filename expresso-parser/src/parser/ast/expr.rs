use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal, paren::Paren},
        error::{kind, Error},
        token::{op::Precedence, CloseParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// A sum of products of numbers, variables, and parenthesized sums.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number or a variable.
    Literal(Literal),

    /// An expression in parentheses, such as `(x + 1)`.
    Paren(Paren),

    /// Two operands joined by `+` or `*`, such as `2 * x`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Strips any number of enclosing parentheses from the expression.
    pub fn innermost(&self) -> &Expr {
        match self {
            Expr::Paren(paren) => paren.innermost(),
            expr => expr,
        }
    }

    /// Parses an operand of a binary operator: a number, a variable, or a parenthesized
    /// expression.
    pub fn parse_operand(input: &mut Parser) -> Result<Self, Error> {
        let token = input.peek_token()?;
        match token.kind {
            TokenKind::OpenParen => input.try_parse().map(Expr::Paren),
            TokenKind::Int | TokenKind::Float | TokenKind::Name => input.try_parse().map(Expr::Literal),
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Float, TokenKind::Name, TokenKind::OpenParen],
                found: token.kind,
            })),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // a stray `)` would otherwise be reported as an unexpected token
        if let Ok(close_paren) = input.peek::<CloseParen>() {
            return Err(Error::new(vec![close_paren.span], kind::UnclosedParenthesis { opening: false }));
        }

        let lhs = input.try_parse_with_fn(Expr::parse_operand)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}
