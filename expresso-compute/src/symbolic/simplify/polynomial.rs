//! The collected form of an expanded expression: a sum of monomials.

use crate::symbolic::{
    expr::{Expression, Variable},
    simplify::step::{Step, StepCollector},
};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
    fmt,
    iter,
};
use tracing::{debug, warn};

/// Replaces a coefficient that overflowed to infinity with the largest finite value, so that it
/// can still be represented as a [`Constant`](crate::symbolic::expr::Constant).
fn saturate(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(value, "coefficient overflowed, saturating to the largest finite value");
        f64::MAX
    }
}

/// The exponent signature of a monomial: a map from each variable in the monomial to the number
/// of times it occurs.
///
/// Signatures are ordered by comparing their `(variable, exponent)` pairs lexicographically, in
/// variable name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(BTreeMap<Variable, u32>);

impl Signature {
    /// Returns the largest exponent in the signature, or `0` for the signature of a constant.
    pub fn degree(&self) -> u32 {
        self.0.values().copied().max().unwrap_or(0)
    }

    /// Returns the exponent of the given variable, which is `0` if it does not occur.
    pub fn exponent(&self, variable: &Variable) -> u32 {
        self.0.get(variable).copied().unwrap_or(0)
    }

    /// Returns true if no variables occur in the signature.
    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the variables and their exponents, in variable name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, u32)> + '_ {
        self.0.iter().map(|(variable, exponent)| (variable, *exponent))
    }

    /// Multiplies the signature by one occurrence of the given variable. Returns true if the
    /// variable already occurred.
    fn multiply(&mut self, variable: Variable) -> bool {
        let exponent = self.0.entry(variable).or_insert(0);
        *exponent += 1;
        *exponent > 1
    }

    /// Divides the signature by one occurrence of the given variable, removing it if its exponent
    /// reaches zero.
    fn divide(&mut self, variable: &Variable) {
        if let Some(exponent) = self.0.get_mut(variable) {
            *exponent -= 1;
            if *exponent == 0 {
                self.0.remove(variable);
            }
        }
    }
}

/// A product of a nonnegative coefficient and powers of variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    coefficient: f64,
    signature: Signature,
}

impl Monomial {
    /// Collects a product of constants and variables into a monomial. Returns [`None`] if the
    /// product contains an addition.
    pub fn from_product(expr: &Expression, step_collector: &mut dyn StepCollector) -> Option<Self> {
        let mut coefficient = 1.0;
        let mut constants = 0;
        let mut signature = Signature::default();
        let mut repeated = false;

        let mut stack = vec![expr];
        while let Some(factor) = stack.pop() {
            match factor {
                Expression::Constant(constant) => {
                    coefficient = saturate(coefficient * constant.value());
                    constants += 1;
                },
                Expression::Variable(variable) => {
                    repeated |= signature.multiply(variable.clone());
                },
                Expression::Multiplication(lhs, rhs) => {
                    stack.push(rhs.as_ref());
                    stack.push(lhs.as_ref());
                },
                Expression::Addition(..) => return None,
            }
        }

        if constants > 1 {
            step_collector.push(Step::FoldConstants);
        }
        if repeated {
            step_collector.push(Step::CombineLikeFactors);
        }
        if constants > 0 && coefficient == 1.0 && !signature.is_constant() {
            step_collector.push(Step::DropUnitCoefficient);
        }

        Some(Self { coefficient, signature })
    }

    /// Returns the coefficient of the monomial.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the exponent signature of the monomial.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns the largest exponent in the monomial.
    pub fn degree(&self) -> u32 {
        self.signature.degree()
    }

    /// Returns the derivative of the monomial with respect to the given variable, or [`None`] if
    /// the derivative is zero.
    ///
    /// `d/dx c*x^k*m = (c*k)*x^(k-1)*m`
    pub fn derivative(&self, variable: &Variable) -> Option<Self> {
        let exponent = self.signature.exponent(variable);
        if exponent == 0 {
            return None;
        }

        let mut signature = self.signature.clone();
        signature.divide(variable);
        Some(Self {
            coefficient: saturate(self.coefficient * f64::from(exponent)),
            signature,
        })
    }

    /// Builds the expression for this monomial: the coefficient (omitted if it is `1`), then each
    /// variable repeated by its exponent, as a left-leaning chain of multiplications.
    pub fn to_expression(&self) -> Expression {
        let coefficient = (self.coefficient != 1.0 || self.signature.is_constant())
            .then(|| Expression::constant(self.coefficient));
        let mut factors = coefficient.into_iter().chain(
            self.signature
                .iter()
                .flat_map(|(variable, exponent)| iter::repeat(variable).take(exponent as usize))
                .map(|variable| Expression::Variable(variable.clone())),
        );

        // a monomial always has a coefficient or at least one variable
        let first = factors.next().unwrap_or_else(|| Expression::constant(1.0));
        factors.fold(first, Expression::mul)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_expression().fmt(f)
    }
}

/// Compares two monomials by their position in a canonical sum: largest exponent first, then by
/// signature. The constant term is always last.
fn canonical_order(a: &Monomial, b: &Monomial) -> Ordering {
    b.degree()
        .cmp(&a.degree())
        .then_with(|| a.signature.cmp(&b.signature))
}

/// A sum of monomials in canonical form: no two terms share a signature, no term has a zero
/// coefficient, and terms are in canonical order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Monomial>,
}

impl Polynomial {
    /// Collects an expression into a polynomial.
    ///
    /// The expression should already be expanded. If a term still contains an addition, that term
    /// is expanded first.
    pub fn from_expression(expr: &Expression, step_collector: &mut dyn StepCollector) -> Self {
        let mut terms = Vec::new();

        // terms are owned since terms that need expanding are created here
        let mut stack = vec![expr.clone()];
        while let Some(term) = stack.pop() {
            match term {
                Expression::Addition(lhs, rhs) => {
                    stack.push(rhs.as_ref().clone());
                    stack.push(lhs.as_ref().clone());
                },
                term => match Monomial::from_product(&term, step_collector) {
                    Some(monomial) => terms.push(monomial),
                    None => {
                        debug!(%term, "term is not expanded, expanding it before collecting");
                        stack.push(term.expand());
                    },
                },
            }
        }

        Self::from_monomials(terms, step_collector)
    }

    /// Builds a polynomial from monomials in any order, combining like terms, dropping zero terms,
    /// and sorting the result.
    pub fn from_monomials(
        monomials: impl IntoIterator<Item = Monomial>,
        step_collector: &mut dyn StepCollector,
    ) -> Self {
        let mut combined: Vec<(Monomial, bool)> = Vec::new();
        let mut positions = HashMap::new();

        for monomial in monomials {
            match positions.get(&monomial.signature) {
                Some(&position) => {
                    let (existing, merged): &mut (Monomial, bool) = &mut combined[position];
                    debug!(term = %monomial, into = %existing, "combining like terms");
                    existing.coefficient = saturate(existing.coefficient + monomial.coefficient);
                    *merged = true;
                    step_collector.push(Step::CombineLikeTerms);
                },
                None => {
                    positions.insert(monomial.signature.clone(), combined.len());
                    combined.push((monomial, false));
                },
            }
        }

        let mut terms = Vec::with_capacity(combined.len());
        for (monomial, merged) in combined {
            if monomial.coefficient == 0.0 {
                step_collector.push(Step::DropZeroTerm);
                continue;
            }
            if merged && monomial.coefficient == 1.0 && !monomial.signature.is_constant() {
                step_collector.push(Step::DropUnitCoefficient);
            }
            terms.push(monomial);
        }

        let sorted = terms
            .windows(2)
            .all(|pair| canonical_order(&pair[0], &pair[1]) != Ordering::Greater);
        if !sorted {
            terms.sort_by(canonical_order);
            step_collector.push(Step::SortTerms);
        }

        Self { terms }
    }

    /// Returns the terms of the polynomial, in canonical order.
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// Returns true if the polynomial has no terms.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the largest exponent of any term, or `0` if the polynomial is constant.
    pub fn degree(&self) -> u32 {
        // terms are sorted by degree
        self.terms.first().map_or(0, Monomial::degree)
    }

    /// Returns the derivative of the polynomial with respect to the given variable.
    pub fn derivative(&self, variable: &Variable) -> Self {
        Self::from_monomials(
            self.terms.iter().filter_map(|term| term.derivative(variable)),
            &mut (),
        )
    }

    /// Builds the canonical expression for this polynomial: the terms as a left-leaning chain of
    /// additions, or the constant `0` if there are no terms.
    pub fn to_expression(&self) -> Expression {
        let mut terms = self.terms.iter().map(Monomial::to_expression);
        match terms.next() {
            Some(first) => terms.fold(first, Expression::add),
            None => Expression::constant(0.0),
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_expression().fmt(f)
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

    fn collect(input: &str) -> Polynomial {
        Polynomial::from_expression(&parse(input).expand(), &mut ())
    }

    fn var(name: &str) -> Variable {
        Variable::new(name)
    }

    #[test]
    fn signature_of_product() {
        let monomial = Monomial::from_product(&parse("x * 2 * y * x * 3"), &mut ()).unwrap();

        assert_eq!(monomial.coefficient(), 6.0);
        assert_eq!(monomial.signature().exponent(&var("x")), 2);
        assert_eq!(monomial.signature().exponent(&var("y")), 1);
        assert_eq!(monomial.signature().exponent(&var("z")), 0);
        assert_eq!(monomial.degree(), 2);
    }

    #[test]
    fn product_with_sum_is_rejected() {
        assert_eq!(Monomial::from_product(&parse("x * (y + 1)"), &mut ()), None);
    }

    #[test]
    fn monomial_expression_shape() {
        let monomial = Monomial::from_product(&parse("y * 4 * x * x"), &mut ()).unwrap();
        let x = || Expression::variable("x");

        assert_eq!(
            monomial.to_expression(),
            Expression::constant(4.0) * x() * x() * Expression::variable("y"),
        );
        assert_eq!(monomial.to_string(), "4 * x * x * y");
    }

    #[test]
    fn unit_coefficient_is_omitted() {
        let monomial = Monomial::from_product(&parse("1 * x"), &mut ()).unwrap();
        assert_eq!(monomial.to_expression(), Expression::variable("x"));

        let constant = Monomial::from_product(&parse("1"), &mut ()).unwrap();
        assert_eq!(constant.to_expression(), Expression::constant(1.0));
    }

    #[test]
    fn like_terms_combine() {
        let polynomial = collect("x * y + 2 * y * x + 3");

        assert_eq!(polynomial.terms().len(), 2);
        assert_eq!(polynomial.to_string(), "3 * x * y + 3");
    }

    #[test]
    fn zero_polynomial() {
        let polynomial = collect("0 * x + 0");

        assert!(polynomial.is_zero());
        assert_eq!(polynomial.degree(), 0);
        assert_eq!(polynomial.to_expression(), Expression::constant(0.0));
    }

    #[test]
    fn canonical_order_of_terms() {
        let polynomial = collect("4 + 3*x + 2*x*x + 1*x*x*x");
        assert_eq!(polynomial.degree(), 3);
        assert_eq!(polynomial.to_string(), "x * x * x + 2 * x * x + 3 * x + 4");

        assert_eq!(collect("y + x").to_string(), "x + y");
        assert_eq!(collect("x * y + y * y + x * x").to_string(), "x * x + y * y + x * y");
        assert_eq!(collect("x * y + x").to_string(), "x + x * y");
    }

    #[test]
    fn derivative_power_rule() {
        let polynomial = collect("3 * x * x * y + x + y + 7");

        assert_eq!(polynomial.derivative(&var("x")).to_string(), "6 * x * y + 1");
        assert_eq!(polynomial.derivative(&var("y")).to_string(), "3 * x * x + 1");
        assert!(polynomial.derivative(&var("z")).is_zero());
    }

    #[test]
    fn overflow_saturates() {
        let big = "9".repeat(300);
        let polynomial = collect(&format!("{big} * {big} * x"));

        assert_eq!(polynomial.terms()[0].coefficient(), f64::MAX);
    }

    #[test]
    fn steps_are_collected() {
        let mut steps = Vec::new();
        Polynomial::from_expression(&parse("3 + x * 2 * 1 * x + 0 * y + 2 * x * x"), &mut steps);

        assert_eq!(steps, vec![
            Step::FoldConstants,
            Step::CombineLikeFactors,
            Step::CombineLikeFactors,
            Step::CombineLikeTerms,
            Step::DropZeroTerm,
            Step::SortTerms,
        ]);
    }
}
