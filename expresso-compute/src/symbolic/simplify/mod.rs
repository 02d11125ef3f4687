//! Simplification of expressions into a canonical sum of monomials.
//!
//! An expression is simplified by collecting it into a [`Polynomial`]: the sum is flattened into
//! terms, each term is flattened into factors, constant factors are multiplied into a coefficient,
//! and variable factors are counted into an exponent [`Signature`]. Terms with the same signature
//! are combined by summing their coefficients, and terms whose coefficient is zero are dropped.
//!
//! The terms are then ordered by largest exponent (highest first), with ties broken by comparing
//! the signatures, and rebuilt into an expression. The result is in canonical form, so
//! simplifying it again returns the same expression:
//!
//! ```
//! use expresso_compute::symbolic::{expr::Expression, simplify};
//! use expresso_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("4 + 3*x + 2*x*x + 1*x*x*x");
//! let expr: Expression = parser.try_parse_full::<Expr>().unwrap().into();
//!
//! let simplified = simplify(&expr.expand());
//! assert_eq!(simplified.to_string(), "x * x * x + 2 * x * x + 3 * x + 4");
//! assert_eq!(simplify(&simplified), simplified);
//! ```

pub mod polynomial;
pub mod step;

use super::expr::Expression;
pub use polynomial::{Monomial, Polynomial, Signature};
pub use step::{Step, StepCollector};
use tracing::trace;

/// Simplifies an expanded expression into a canonical sum of monomials.
///
/// A term that still contains an addition is expanded before it is collected.
pub fn simplify(expr: &Expression) -> Expression {
    inner_simplify(expr, &mut ())
}

/// Simplifies an expanded expression into a canonical sum of monomials, returning the steps taken
/// alongside the result.
pub fn simplify_with_steps(expr: &Expression) -> (Expression, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify(expr, &mut steps);
    (simplified, steps)
}

fn inner_simplify(expr: &Expression, step_collector: &mut dyn StepCollector) -> Expression {
    let simplified = Polynomial::from_expression(expr, step_collector).to_expression();
    trace!(%expr, %simplified, "simplified");
    simplified
}

#[cfg(test)]
mod tests {
    use expresso_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(input: &str) -> Expression {
        Parser::new(input).try_parse_full::<Expr>().unwrap().into()
    }

    /// Expands and simplifies the input, then renders it.
    fn simplified(input: &str) -> String {
        simplify(&parse(input).expand()).to_string()
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplified("3 + 2.4"), "5.4");
        assert_eq!(simplified("2 * 3 * 4"), "24");
        assert_eq!(simplified("4.0*2.0 + 3.4"), "11.4");
    }

    #[test]
    fn like_terms() {
        assert_eq!(simplified("x + x"), "2 * x");
        assert_eq!(simplified("x*y + y*x"), "2 * x * y");
        assert_eq!(simplified("x + x + 1.5 * x"), "3.5 * x");
    }

    #[test]
    fn like_factors() {
        assert_eq!(simplified("y * x * y"), "x * y * y");
        assert_eq!(simplified("x * 2 * x * 3"), "6 * x * x");
    }

    #[test]
    fn zero_terms_are_dropped() {
        assert_eq!(simplified("0 * x + y"), "y");
        assert_eq!(simplified("x + 0"), "x");
        assert_eq!(simplified("0 * x * y"), "0");
        assert_eq!(simplified("0"), "0");
    }

    #[test]
    fn unit_coefficient_is_implicit() {
        assert_eq!(simplified("1 * x"), "x");
        assert_eq!(simplified("0.5 * x + 0.5 * x"), "x");
        assert_eq!(simplified("1"), "1");
    }

    #[test]
    fn ordering() {
        assert_eq!(simplified("4 + 3*x + 2*x*x + 1*x*x*x"), "x * x * x + 2 * x * x + 3 * x + 4");
        assert_eq!(simplified("1 + x*y + x*x"), "x * x + x * y + 1");
        assert_eq!(simplified("b + a + c*c"), "c * c + a + b");
    }

    #[test]
    fn expansion_before_collection() {
        assert_eq!(simplified("(x + 1) * (x + 1)"), "x * x + 2 * x + 1");
        assert_eq!(simplified("x * (y + z) + y * x"), "2 * x * y + x * z");
    }

    #[test]
    fn unexpanded_input_is_expanded() {
        assert_eq!(simplify(&parse("x * (x + 1)")).to_string(), "x * x + x");
        assert_eq!(simplify(&parse("2 * (3 + x * (x + 1))")).to_string(), "2 * x * x + 2 * x + 6");
    }

    #[test]
    fn canonical_tree_shape() {
        let x = || Expression::variable("x");
        let expected = Expression::constant(2.0) * x() * x() + x() + Expression::constant(1.0);

        assert_eq!(simplify(&parse("x + 1 + x * x * 2")), expected);
    }

    #[test]
    fn idempotent() {
        for input in ["x + x", "(a + b) * (a + b) * c", "3 + 2.4", "0 * x", "y * x + x * y * 0.25"] {
            let once = simplify(&parse(input).expand());
            assert_eq!(simplify(&once), once);
        }
    }

    #[test]
    fn raw_and_simplified_equality() {
        let a = parse("4.0*2.0 + 3.4");
        let b = parse("3.4 + 4.0*2.0");

        assert_ne!(a, b);
        assert_eq!(simplify(&a.expand()), simplify(&b.expand()));
    }

    #[test]
    fn steps() {
        let (result, steps) = simplify_with_steps(&parse("3 + 1 * x + x"));

        assert_eq!(result.to_string(), "2 * x + 3");
        assert_eq!(steps, vec![Step::DropUnitCoefficient, Step::CombineLikeTerms, Step::SortTerms]);
    }

    #[test]
    fn canonical_input_takes_no_steps() {
        let (_, steps) = simplify_with_steps(&parse("2 * x + 3 * x * y + 1"));
        assert!(steps.is_empty());

        // repeated factors are how exponents are written, so they are always collected
        let (_, steps) = simplify_with_steps(&parse("x * x + 1"));
        assert_eq!(steps, vec![Step::CombineLikeFactors]);
    }
}
