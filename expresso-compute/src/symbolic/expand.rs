//! Distribution of multiplication over addition.
//!
//! [`Expression::expand`] rewrites `a * (b + c)` into `a * b + a * c` and `(a + b) * c` into
//! `a * c + b * c`, everywhere in the tree, until no multiplication has an addition as an
//! operand. Subtrees that need no distribution are shared with the input instead of copied.

use super::expr::Expression;
use std::sync::Arc;
use tracing::trace;

impl Expression {
    /// Distributes every multiplication over its addition operands.
    ///
    /// The result is a fixed point (`e.expand().expand() == e.expand()`) and satisfies
    /// [`Expression::is_expanded`].
    ///
    /// ```
    /// use expresso_compute::symbolic::expr::Expression;
    ///
    /// let x = Expression::variable("x");
    /// let y = Expression::variable("y");
    /// let z = Expression::variable("z");
    ///
    /// let expr = x.clone() * (y.clone() + z.clone());
    /// assert_eq!(expr.expand(), x.clone() * y + x * z);
    /// ```
    pub fn expand(&self) -> Expression {
        expand_node(self).unwrap_or_else(|| self.clone())
    }
}

/// Expands the given node, returning [`None`] if it is already expanded.
fn expand_node(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::Constant(_) | Expression::Variable(_) => None,
        Expression::Addition(lhs, rhs) => {
            let (new_lhs, new_rhs) = (expand_shared(lhs), expand_shared(rhs));
            if Arc::ptr_eq(&new_lhs, lhs) && Arc::ptr_eq(&new_rhs, rhs) {
                None
            } else {
                Some(Expression::Addition(new_lhs, new_rhs))
            }
        },
        Expression::Multiplication(lhs, rhs) => {
            let (new_lhs, new_rhs) = (expand_shared(lhs), expand_shared(rhs));
            if new_lhs.is_addition() || new_rhs.is_addition() {
                Some(distribute(&new_lhs, &new_rhs))
            } else if Arc::ptr_eq(&new_lhs, lhs) && Arc::ptr_eq(&new_rhs, rhs) {
                None
            } else {
                Some(Expression::Multiplication(new_lhs, new_rhs))
            }
        },
    }
}

/// Expands a shared operand, reusing the same allocation if nothing changes.
fn expand_shared(expr: &Arc<Expression>) -> Arc<Expression> {
    match expand_node(expr) {
        Some(expanded) => Arc::new(expanded),
        None => Arc::clone(expr),
    }
}

/// Builds the expanded product of two already expanded operands.
///
/// `a * (b + c) = a*b + a*c`
/// `(a + b) * c = a*c + b*c`
///
/// A sum on the right is distributed first. The partial products are distributed again, since
/// the operand on the other side may itself be a sum.
fn distribute(lhs: &Arc<Expression>, rhs: &Arc<Expression>) -> Expression {
    match (lhs.as_ref(), rhs.as_ref()) {
        (_, Expression::Addition(b, c)) => {
            trace!(%lhs, %rhs, "distributing over right sum");
            Expression::Addition(Arc::new(distribute(lhs, b)), Arc::new(distribute(lhs, c)))
        },
        (Expression::Addition(a, b), _) => {
            trace!(%lhs, %rhs, "distributing over left sum");
            Expression::Addition(Arc::new(distribute(a, rhs)), Arc::new(distribute(b, rhs)))
        },
        _ => Expression::Multiplication(Arc::clone(lhs), Arc::clone(rhs)),
    }
}

#[cfg(test)]
mod tests {
    use expresso_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(input: &str) -> Expression {
        Parser::new(input).try_parse_full::<Expr>().unwrap().into()
    }

    #[test]
    fn leaves_are_unchanged() {
        assert_eq!(parse("x").expand(), parse("x"));
        assert_eq!(parse("2.5").expand(), parse("2.5"));
    }

    #[test]
    fn distribute_right_sum() {
        assert_eq!(parse("a * (b + c)").expand(), parse("a * b + a * c"));
    }

    #[test]
    fn distribute_left_sum() {
        assert_eq!(parse("(a + b) * c").expand(), parse("a * c + b * c"));
    }

    #[test]
    fn distribute_both_sums() {
        assert_eq!(
            parse("(a + b) * (c + d)").expand(),
            parse("(a * c + b * c) + (a * d + b * d)"),
        );
    }

    #[test]
    fn distribute_nested_sums() {
        let expr = parse("x * (y * (z + 1) + 2)");
        let expanded = expr.expand();

        assert!(expanded.is_expanded());
        assert_eq!(expanded, parse("x * (y * z) + x * (y * 1) + x * 2"));
    }

    #[test]
    fn sum_produced_by_operand() {
        // the left operand only becomes a sum once expanded
        let expanded = parse("((a + b) * c) * d").expand();
        assert!(expanded.is_expanded());
        assert_eq!(expanded, parse("a * c * d + b * c * d"));
    }

    #[test]
    fn fixed_point() {
        for input in ["x * (y + z) * (x + 1)", "(a + b) * (a + b) * (a + b)", "3 + 4 * x", "x"] {
            let once = parse(input).expand();
            assert_eq!(once.expand(), once);
            assert!(once.is_expanded());
        }
    }

    #[test]
    fn unchanged_subtrees_are_shared() {
        let expr = parse("x * y + z * (x + 1)");
        let expanded = expr.expand();

        match (&expr, &expanded) {
            (Expression::Addition(before, _), Expression::Addition(after, _)) => {
                assert!(Arc::ptr_eq(before, after));
            },
            other => panic!("expected two sums, got {:?}", other),
        }
    }

    #[test]
    fn expanded_input_is_shared() {
        let expr = parse("x * y + 2");
        match (&expr, &expr.expand()) {
            (Expression::Addition(l1, r1), Expression::Addition(l2, r2)) => {
                assert!(Arc::ptr_eq(l1, l2));
                assert!(Arc::ptr_eq(r1, r2));
            },
            other => panic!("expected two sums, got {:?}", other),
        }
    }
}
