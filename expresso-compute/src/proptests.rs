//! Property-based tests for expansion, simplification, and differentiation.
