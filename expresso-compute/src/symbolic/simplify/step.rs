/// A step taken while simplifying an expression into a sum of monomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `2*x*3 = 6*x`
    FoldConstants,

    /// `x*y*x = x*x*y`
    CombineLikeFactors,

    /// `2*x + 3*x = 5*x`
    CombineLikeTerms,

    /// `0*x + y = y`
    DropZeroTerm,

    /// `1*x = x`
    DropUnitCoefficient,

    /// `3 + x = x + 3`
    SortTerms,
}

/// Receives the [`Step`]s taken while simplifying, in the order they are taken.
///
/// Pass `&mut ()` to discard them, or a `Vec<Step>` to record them.
pub trait StepCollector {
    fn push(&mut self, step: Step);
}

impl StepCollector for () {
    fn push(&mut self, _: Step) {}
}

impl StepCollector for Vec<Step> {
    fn push(&mut self, step: Step) {
        Vec::push(self, step);
    }
}
