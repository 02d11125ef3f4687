use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// An expression in parentheses. The span covers both parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    pub expr: Box<Expr>,
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the expression inside all nested parentheses, so `((x))` gives `x`.
    pub fn innermost(&self) -> &Expr {
        self.expr.innermost()
    }

    /// Consumes the parentheses, returning the expression inside all of them.
    pub fn into_innermost(self) -> Expr {
        match *self.expr {
            Expr::Paren(inner) => inner.into_innermost(),
            expr => expr,
        }
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;
        input.nested(open_paren.span.clone(), |input| Self::parse_enclosed(input, open_paren))
    }
}

impl Paren {
    /// Parses the rest of a parenthesized expression, after its opening parenthesis.
    fn parse_enclosed(input: &mut Parser, open_paren: OpenParen) -> Result<Self, Error> {
        if let Ok(close_paren) = input.try_parse::<CloseParen>() {
            return Err(Error::new(
                vec![open_paren.span.start..close_paren.span.end],
                kind::EmptyParenthesis,
            ));
        }

        let expr = input.try_parse::<Expr>()?;
        let close_paren = input.try_parse::<CloseParen>().map_err(|err| {
            if input.is_eof() {
                Error::new(vec![open_paren.span.clone()], kind::UnclosedParenthesis { opening: true })
            } else {
                // something other than an operator or `)` follows the inner expression
                Error::new(err.spans, kind::UnexpectedToken {
                    expected: &[TokenKind::Add, TokenKind::Mul, TokenKind::CloseParen],
                    found: input.peek_token().map_or(TokenKind::Unrecognized, |token| token.kind),
                })
            }
        })?;

        Ok(Self {
            expr: Box::new(expr),
            span: open_paren.span.start..close_paren.span.end,
        })
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
