//! Symbolic differentiation of polynomial expressions.

use super::{
    expr::{Expression, Variable},
    simplify::{simplify, Polynomial},
};
use tracing::debug;

/// Differentiates a simplified expression with respect to the given variable.
///
/// Each term is differentiated with the power rule, `d/dx c*x^k*m = (c*k)*x^(k-1)*m`; terms
/// without the variable vanish. The sum of the differentiated terms is then simplified, so the
/// result is in canonical form.
///
/// ```
/// use expresso_compute::symbolic::{derivative::differentiate, expr::{Expression, Variable}};
///
/// let x = Expression::variable("x");
/// let expr = Expression::constant(3.0) * x.clone() * x.clone() + x;
///
/// let derivative = differentiate(&expr, &Variable::new("x"));
/// assert_eq!(derivative.to_string(), "6 * x + 1");
/// ```
pub fn differentiate(expr: &Expression, variable: &Variable) -> Expression {
    // `(f + g)' = f' + g'`
    let raw = Polynomial::from_expression(expr, &mut ())
        .derivative(variable)
        .to_expression();

    debug!(%expr, %variable, %raw, "differentiated terms");
    simplify(&raw)
}

#[cfg(test)]
mod tests {
    use expresso_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses, expands, simplifies, then differentiates the input, and renders the result.
    fn derivative(input: &str, variable: &str) -> String {
        let expr: Expression = Parser::new(input).try_parse_full::<Expr>().unwrap().into();
        let simplified = simplify(&expr.expand());
        differentiate(&simplified, &Variable::new(variable)).to_string()
    }

    #[test]
    fn constant_rule() {
        assert_eq!(derivative("5", "x"), "0");
        assert_eq!(derivative("2.5 * 4 + 1", "x"), "0");
    }

    #[test]
    fn self_derivative() {
        assert_eq!(derivative("x", "x"), "1");
        assert_eq!(derivative("x", "y"), "0");
    }

    #[test]
    fn power_rule() {
        assert_eq!(derivative("x * x * x", "x"), "3 * x * x");
        assert_eq!(derivative("2 * x * x", "x"), "4 * x");
    }

    #[test]
    fn other_variables_are_constants() {
        assert_eq!(derivative("x * x * y + y * y + x", "x"), "2 * x * y + 1");
        assert_eq!(derivative("x * x * y + y * y + x", "y"), "x * x + 2 * y");
        assert_eq!(derivative("x * x * y + y * y + x", "z"), "0");
    }

    #[test]
    fn variables_are_case_sensitive() {
        assert_eq!(derivative("X * x", "x"), "X");
        assert_eq!(derivative("X * x", "X"), "x");
    }

    #[test]
    fn derivative_of_product_of_sums() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        assert_eq!(derivative("(x + 1) * (x + 2)", "x"), "2 * x + 3");
    }

    #[test]
    fn unsimplified_input_is_collected_first() {
        let x = Expression::variable("x");
        let expr = x.clone() * Expression::constant(2.0) + x.clone() * x.clone() + x.clone() * x;
        assert_eq!(differentiate(&expr, &Variable::new("x")).to_string(), "4 * x + 2");
    }

    #[test]
    fn matches_polynomial_derivative() {
        let expr: Expression = Parser::new("x * x * y + 3 * x + y").try_parse_full::<Expr>().unwrap().into();
        let x = Variable::new("x");
        let expected = Polynomial::from_expression(&expr, &mut ()).derivative(&x).to_expression();
        assert_eq!(differentiate(&expr, &x), expected);
    }

    #[test]
    fn linearity() {
        for (a, b) in [("x * x", "3 * x * y"), ("x * x * x + 2", "x * (y + 1)"), ("7", "y")] {
            let of_sum = derivative(&format!("({}) + ({})", a, b), "x");

            let sum_of = format!("{} + {}", derivative(a, "x"), derivative(b, "x"));
            let sum_of: Expression = Parser::new(&sum_of).try_parse_full::<Expr>().unwrap().into();

            assert_eq!(of_sum, simplify(&sum_of).to_string());
        }
    }
}
