pub mod iter;
pub mod leaf;

use expresso_parser::parser::{
    ast::{Expr, Literal},
    token::op::BinOpKind,
};
use iter::ExprIter;
pub use leaf::{Constant, Variable};
use std::{fmt, ops::{Add, Mul}, sync::Arc};

/// The kind of an [`Expression`] node, without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Constant,
    Variable,
    Addition,
    Multiplication,
}

/// The operands of an [`Expression`] node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands<'a> {
    /// The node is a [`Constant`] or [`Variable`] and has no operands.
    Leaf,

    /// The node is an addition or multiplication with the given left and right operands.
    Binary(&'a Expression, &'a Expression),
}

/// An immutable polynomial expression tree.
///
/// Operands are shared with [`Arc`], so cloning an expression or reusing one of its subtrees
/// never copies the tree, and trees can be sent across threads.
///
/// Equality is **structural**: two expressions are equal only if they have the same shape, with
/// operands in the same order. `x + y` and `y + x` are different expressions, as are `(x * y) * z`
/// and `x * (y * z)`. Use [`simplify`](crate::symbolic::simplify()) to compare expressions up to
/// algebraic equivalence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A nonnegative number.
    Constant(Constant),

    /// A variable.
    Variable(Variable),

    /// The sum of two expressions.
    Addition(Arc<Expression>, Arc<Expression>),

    /// The product of two expressions.
    Multiplication(Arc<Expression>, Arc<Expression>),
}

impl Expression {
    /// Creates a constant expression.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative, infinite, or NaN.
    pub fn constant(value: f64) -> Self {
        Self::Constant(Constant::new(value))
    }

    /// Creates a variable expression.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or contains anything other than ASCII letters.
    pub fn variable(name: &str) -> Self {
        Self::Variable(Variable::new(name))
    }

    /// Creates the sum `left + right`, without simplifying it.
    pub fn add(left: Expression, right: Expression) -> Self {
        Self::Addition(Arc::new(left), Arc::new(right))
    }

    /// Creates the product `left * right`, without simplifying it.
    pub fn mul(left: Expression, right: Expression) -> Self {
        Self::Multiplication(Arc::new(left), Arc::new(right))
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Self::Constant(_) => ExpressionKind::Constant,
            Self::Variable(_) => ExpressionKind::Variable,
            Self::Addition(..) => ExpressionKind::Addition,
            Self::Multiplication(..) => ExpressionKind::Multiplication,
        }
    }

    /// Returns the operands of this node.
    pub fn operands(&self) -> Operands<'_> {
        match self {
            Self::Constant(_) | Self::Variable(_) => Operands::Leaf,
            Self::Addition(lhs, rhs) | Self::Multiplication(lhs, rhs) => Operands::Binary(lhs, rhs),
        }
    }

    /// Returns the left operand of an addition or multiplication, or the node itself if it is a
    /// constant or variable.
    pub fn left(&self) -> &Expression {
        match self.operands() {
            Operands::Leaf => self,
            Operands::Binary(lhs, _) => lhs,
        }
    }

    /// Returns the right operand of an addition or multiplication, or the node itself if it is a
    /// constant or variable.
    pub fn right(&self) -> &Expression {
        match self.operands() {
            Operands::Leaf => self,
            Operands::Binary(_, rhs) => rhs,
        }
    }

    /// Returns the binary operator of this node, if it is an addition or multiplication.
    pub fn op_kind(&self) -> Option<BinOpKind> {
        match self {
            Self::Constant(_) | Self::Variable(_) => None,
            Self::Addition(..) => Some(BinOpKind::Add),
            Self::Multiplication(..) => Some(BinOpKind::Mul),
        }
    }

    /// Returns true if this node is an addition.
    pub fn is_addition(&self) -> bool {
        matches!(self, Self::Addition(..))
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns true if no multiplication in the tree has an addition as an immediate operand,
    /// which is the form produced by [`Expression::expand`].
    pub fn is_expanded(&self) -> bool {
        self.post_order_iter().all(|expr| match expr {
            Self::Multiplication(lhs, rhs) => !lhs.is_addition() && !rhs.is_addition(),
            _ => true,
        })
    }

    /// Renders the expression. This is the same as the [`fmt::Display`] output, and can be parsed
    /// back into an equal expression.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

impl From<Constant> for Expression {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

/// Lowers a parsed expression. Parentheses and spans are dropped; the shape of the tree is
/// otherwise kept as parsed.
impl From<Expr> for Expression {
    fn from(expr: Expr) -> Self {
        match expr {
            // the tokenizer only produces digits and letters for these literals
            Expr::Literal(Literal::Number(num)) => Self::constant(num.value),
            Expr::Literal(Literal::Variable(var)) => Self::variable(&var.name),
            Expr::Paren(paren) => paren.into_innermost().into(),
            Expr::Binary(binary) => {
                let lhs = Self::from(*binary.lhs);
                let rhs = Self::from(*binary.rhs);
                match binary.op.kind {
                    BinOpKind::Add => Self::add(lhs, rhs),
                    BinOpKind::Mul => Self::mul(lhs, rhs),
                }
            },
        }
    }
}

impl Add for Expression {
    type Output = Expression;

    fn add(self, rhs: Self) -> Self::Output {
        Expression::add(self, rhs)
    }
}

impl Mul for Expression {
    type Output = Expression;

    fn mul(self, rhs: Self) -> Self::Output {
        Expression::mul(self, rhs)
    }
}

/// Writes an operand of a binary node, wrapping it in parentheses if it would otherwise parse
/// into a different tree.
fn fmt_operand(f: &mut fmt::Formatter<'_>, operand: &Expression, parent: BinOpKind, is_rhs: bool) -> fmt::Result {
    let needs_parens = operand.op_kind().is_some_and(|kind| {
        // both operators are left-associative
        kind.precedence() < parent.precedence() || (is_rhs && kind == parent)
    });

    if needs_parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(constant) => write!(f, "{}", constant),
            Self::Variable(variable) => write!(f, "{}", variable),
            Self::Addition(lhs, rhs) => {
                fmt_operand(f, lhs, BinOpKind::Add, false)?;
                write!(f, " + ")?;
                fmt_operand(f, rhs, BinOpKind::Add, true)
            },
            Self::Multiplication(lhs, rhs) => {
                fmt_operand(f, lhs, BinOpKind::Mul, false)?;
                write!(f, " * ")?;
                fmt_operand(f, rhs, BinOpKind::Mul, true)
            },
        }
    }
}
