//! Validated leaf values of an [`Expression`](super::Expression).

use std::{fmt, hash::{Hash, Hasher}, sync::Arc};

/// A nonnegative, finite number.
///
/// Constants compare by numeric value, so `1` and `1.00000` are the same constant, and so are
/// `0` and `-0`.
#[derive(Debug, Clone, Copy)]
pub struct Constant(f64);

impl Constant {
    /// Creates a new constant.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative, infinite, or NaN.
    pub fn new(value: f64) -> Self {
        assert!(
            value.is_finite() && value >= 0.0,
            "constant must be finite and nonnegative, got {}",
            value,
        );
        // `-0.0 + 0.0` is `0.0`
        Self(value + 0.0)
    }

    /// Creates a new constant, returning [`None`] if the value is negative, infinite, or NaN.
    pub fn try_new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then(|| Self(value + 0.0))
    }

    /// Returns the value of the constant.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // NaN is unrepresentable and `-0.0` is normalized, so equal values have equal bits
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A variable, named by a nonempty string of ASCII letters. Names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Creates a new variable.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or contains anything other than ASCII letters.
    pub fn new(name: &str) -> Self {
        assert!(Self::is_valid_name(name), "invalid variable name `{}`", name);
        Self(Arc::from(name))
    }

    /// Creates a new variable, returning [`None`] if the name is empty or contains anything other
    /// than ASCII letters.
    pub fn try_new(name: &str) -> Option<Self> {
        Self::is_valid_name(name).then(|| Self(Arc::from(name)))
    }

    /// Returns true if the given string is a valid variable name.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Returns the name of the variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use super::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn constants_compare_by_value() {
        assert_eq!(Constant::new(1.0), Constant::new(1.00000));
        assert_ne!(Constant::new(1.0), Constant::new(1.5));
    }

    #[test]
    fn negative_zero_is_zero() {
        let zero = Constant::new(0.0);
        let negative_zero = Constant::new(-0.0);

        assert_eq!(zero, negative_zero);
        assert_eq!(hash_of(&zero), hash_of(&negative_zero));
        assert_eq!(negative_zero.to_string(), "0");
    }

    #[test]
    fn invalid_constants() {
        assert_eq!(Constant::try_new(-1.0), None);
        assert_eq!(Constant::try_new(f64::INFINITY), None);
        assert_eq!(Constant::try_new(f64::NAN), None);
        assert_eq!(Constant::try_new(2.5).map(|c| c.value()), Some(2.5));
    }

    #[test]
    #[should_panic(expected = "constant must be finite and nonnegative")]
    fn negative_constant_panics() {
        Constant::new(-3.0);
    }

    #[test]
    fn variable_names() {
        assert!(Variable::try_new("x").is_some());
        assert!(Variable::try_new("Foo").is_some());
        assert!(Variable::try_new("").is_none());
        assert!(Variable::try_new("x1").is_none());
        assert!(Variable::try_new("x y").is_none());
        assert!(Variable::try_new("é").is_none());
    }

    #[test]
    fn variables_are_case_sensitive() {
        assert_ne!(Variable::new("x"), Variable::new("X"));
        assert_eq!(Variable::new("foo"), Variable::new("foo"));
    }

    #[test]
    #[should_panic(expected = "invalid variable name")]
    fn invalid_variable_panics() {
        Variable::new("4x");
    }
}
