//! Algebraic manipulation of polynomial expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expression`] nodes. Unlike the
//! [`expresso_parser::parser::ast::Expr`] nodes produced by [`expresso_parser`], an
//! [`Expression`] has no parentheses and no span information; its operands are shared immutable
//! subtrees.
//!
//! If you have an [`expresso_parser::parser::ast::Expr`], you can convert it to an
//! [`Expression`] using the [`From`] trait. The tree keeps the shape it was parsed with, so
//! `x + y + z` becomes `(x + y) + z`:
//!
//! ```
//! use expresso_compute::symbolic::expr::Expression;
//! use expresso_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x + (y + z)");
//! let ast_expr = parser.try_parse_full::<Expr>().unwrap();
//!
//! let expr: Expression = ast_expr.into();
//! assert_eq!(expr, Expression::variable("x") + (Expression::variable("y") + Expression::variable("z")));
//! ```
//!
//! # Transformations
//!
//! - [`Expression::expand`] distributes multiplication over addition.
//! - [`simplify()`] collects an expanded expression into a canonical sum of monomials. See the
//!   [`mod@simplify`] module.
//! - [`differentiate`] differentiates a simplified expression with respect to a variable.
//!
//! All of them are pure functions of immutable trees, and can be used from any thread.

pub mod derivative;
pub mod expand;
pub mod expr;
pub mod simplify;

pub use derivative::differentiate;
pub use expr::{Constant, Expression, Variable};
pub use simplify::{simplify, simplify_with_steps, Step, StepCollector};
