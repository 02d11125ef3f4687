//! Simplification and differentiation of polynomial expressions written as text.
//!
//! Expressions are made of nonnegative numbers, variables (strings of letters, case sensitive),
//! addition `+`, multiplication `*`, and parentheses. For example:
//!
//! ```
//! assert_eq!(expresso::simplify("x*(x + 1) + 2*x").unwrap(), "x * x + 3 * x");
//! assert_eq!(expresso::differentiate("x*(x + 1) + 2*x", "x").unwrap(), "2 * x + 3");
//! ```
//!
//! # Limits
//!
//! Parentheses may be nested at most [`MAX_NESTING`] levels deep; deeper input is rejected as
//! [`Error::InvalidInput`]. Chains of operators have no limit, but a chain of n operators is a
//! tree n levels deep, and trees are walked recursively. Sums or products of more than a few
//! thousand operands need a correspondingly larger stack.
//!
//! The `expresso` binary provides an interactive console on top of these functions; see the
//! [`repl`] module.

pub mod error;
pub mod repl;

pub use error::Error;
pub use expresso_compute::symbolic::{Expression, Variable};
pub use expresso_parser::parser::MAX_NESTING;

use expresso_compute::symbolic;
use expresso_parser::parser::{ast::Expr, Parser};

/// Parses the input into an [`Expression`], keeping the shape it was written with.
pub fn parse(input: &str) -> Result<Expression, Error> {
    let ast = Parser::new(input)
        .try_parse_full::<Expr>()
        .map_err(|error| Error::InvalidInput { input: input.to_owned(), error })?;
    Ok(ast.into())
}

/// Parses, expands, and simplifies the input, returning the canonical form as text.
pub fn simplify(input: &str) -> Result<String, Error> {
    let expr = parse(input)?;
    Ok(symbolic::simplify(&expr.expand()).to_string())
}

/// Parses and simplifies the input, then differentiates it with respect to the given variable,
/// returning the canonical form of the derivative as text.
///
/// The input is parsed before the variable is checked, so an input that is not an expression is
/// reported as [`Error::InvalidInput`] even if the variable is also invalid.
pub fn differentiate(input: &str, variable: &str) -> Result<String, Error> {
    let expr = parse(input)?;
    let variable = Variable::try_new(variable)
        .ok_or_else(|| Error::InvalidVariable { variable: variable.to_owned() })?;

    let simplified = symbolic::simplify(&expr.expand());
    Ok(symbolic::differentiate(&simplified, &variable).to_string())
}
