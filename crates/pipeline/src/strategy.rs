//! Filter strategies for the number pipeline.
//!
//! A closed set of predicates over a single integer value. Dispatch is an
//! exhaustive match, so a variant without a predicate cannot compile.

/// A predicate over one integer value, selected at run time.
///
/// Strategies are immutable once constructed; `GreaterThan` captures its
/// threshold at construction and never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStrategy {
    /// Keeps even numbers.
    Even,
    /// Keeps odd numbers.
    Odd,
    /// Keeps numbers strictly greater than the captured threshold.
    GreaterThan(i64),
}

impl FilterStrategy {
    /// Returns the name of this strategy (for logging/debugging)
    pub fn name(&self) -> &'static str {
        match self {
            FilterStrategy::Even => "even",
            FilterStrategy::Odd => "odd",
            FilterStrategy::GreaterThan(_) => "greater-than",
        }
    }

    /// Evaluate the predicate for `value`.
    pub fn accepts(&self, value: i64) -> bool {
        match self {
            FilterStrategy::Even => value % 2 == 0,
            FilterStrategy::Odd => value % 2 != 0,
            FilterStrategy::GreaterThan(threshold) => value > *threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_and_odd_are_complements() {
        for n in [-7, -2, -1, 0, 1, 2, 41, 100] {
            assert_eq!(
                FilterStrategy::Even.accepts(n),
                !FilterStrategy::Odd.accepts(n),
                "complement property failed for {n}"
            );
        }
    }

    #[test]
    fn test_even_accepts_negatives_and_zero() {
        assert!(FilterStrategy::Even.accepts(0));
        assert!(FilterStrategy::Even.accepts(-4));
        assert!(!FilterStrategy::Even.accepts(-3));
    }

    #[test]
    fn test_greater_than_matches_comparison() {
        for t in [-10, -1, 0, 5, 15] {
            for n in [-20, -10, -1, 0, 5, 6, 15, 16, 100] {
                assert_eq!(
                    FilterStrategy::GreaterThan(t).accepts(n),
                    n > t,
                    "gt property failed for n={n}, t={t}"
                );
            }
        }
    }

    #[test]
    fn test_greater_than_is_strict() {
        assert!(!FilterStrategy::GreaterThan(15).accepts(15));
        assert!(FilterStrategy::GreaterThan(15).accepts(16));
    }
}
