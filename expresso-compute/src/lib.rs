//! Expansion, canonical simplification, and differentiation of polynomial expressions.
//!
//! See the [`symbolic`] module for the expression tree and the transformations defined on it.

pub mod symbolic;

mod proptests;
