use super::Expression;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expression::post_order_iter`].
pub struct ExprIter<'a> {
    /// Expressions waiting to be visited, each with whether its operands were already pushed.
    ///
    /// Both operands of a node may be the same shared node, so completion is tracked per stack
    /// entry rather than by comparing against the last visited node.
    stack: Vec<(&'a Expression, bool)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expression) -> Self {
        Self {
            stack: vec![(expr, false)],
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expression;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, pushed) = self.stack.pop()?;
            match expr {
                Expression::Addition(lhs, rhs) | Expression::Multiplication(lhs, rhs) if !pushed => {
                    self.stack.push((expr, true));
                    self.stack.push((rhs.as_ref(), false));
                    self.stack.push((lhs.as_ref(), false));
                },
                _ => return Some(expr),
            }
        }
    }
}
