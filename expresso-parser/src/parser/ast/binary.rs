use crate::parser::{
    ast::expr::Expr,
    error::Error,
    token::op::{BinOp, Precedence},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Consumes the next token if it is a binary operator with at least the given precedence.
    fn next_op(input: &mut Parser, min: Precedence) -> Option<BinOp> {
        input.peek::<BinOp>().ok().filter(|op| op.precedence() >= min)?;
        input.try_parse::<BinOp>().ok()
    }

    /// If the operator after the cursor binds its left operand more tightly than `op` binds its
    /// right operand, returns that operator's precedence. Nothing is consumed.
    ///
    /// In `1 + 2 * 3`, the `*` takes `2` away from the `+`. Operators of equal precedence never
    /// do, since both are left-associative.
    fn takes_rhs_of(input: &mut Parser, op: &BinOp) -> Option<Precedence> {
        let next = input.peek::<BinOp>().ok()?;
        (next.precedence() > op.precedence()).then(|| next.precedence())
    }

    /// Parses the operators and operands following `lhs`, for as long as each operator has at
    /// least the given precedence, and returns the resulting expression.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, min: Precedence) -> Result<Expr, Error> {
        while let Some(op) = Self::next_op(input, min) {
            let mut rhs = input.try_parse_with_fn(Expr::parse_operand)?;
            while let Some(precedence) = Self::takes_rhs_of(input, &op) {
                rhs = Self::parse_expr(input, rhs, precedence)?;
            }

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lhs.fmt(f)?;
        self.op.fmt(f)?;
        self.rhs.fmt(f)
    }
}
