//! Open integer interval on a single axis.

use std::fmt::Display;

/// Open integer range `(low, high)`: matches every `v` with `low < v < high`.
///
/// Bounds may be given in any order. A constraint whose bounds leave no
/// integer strictly between them is *empty*; every empty constraint denotes
/// the same (empty) set of values, and [`Constraint::EMPTY`] is the shared
/// representative produced by the algebra when it normalises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    low: i64,
    high: i64,
}

impl Constraint {
    /// Shared empty representative.
    pub const EMPTY: Constraint = Constraint { low: 0, high: 0 };

    /// Creates the open interval `(low, high)`.
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Interval matching exactly the values `first..=last`.
    pub const fn inclusive(first: i64, last: i64) -> Self {
        Self::new(first.saturating_sub(1), last.saturating_add(1))
    }

    pub const fn low(&self) -> i64 {
        self.low
    }

    pub const fn high(&self) -> i64 {
        self.high
    }

    /// Returns true if `low < value < high`.
    pub const fn matches(&self, value: i64) -> bool {
        self.low < value && value < self.high
    }

    /// Number of integers strictly between the bounds, floored at zero.
    pub const fn size(&self) -> u64 {
        let span = self.high as i128 - self.low as i128 - 1;
        if span <= 0 {
            0
        } else if span > u64::MAX as i128 {
            u64::MAX
        } else {
            span as u64
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Values matched by both `self` and `other`. The result may be
    /// degenerate (size zero) without being [`Constraint::EMPTY`].
    pub fn intersection(&self, other: &Constraint) -> Constraint {
        Constraint::new(self.low.max(other.low), self.high.min(other.high))
    }

    /// Values in `self` but not in `other`, as at most two disjoint pieces.
    ///
    /// Pieces come out in ascending order: the part below the overlap first,
    /// then the part above it.
    pub fn minus(&self, other: &Constraint) -> Vec<Constraint> {
        super::operations::constraint_difference(self, other)
    }

    /// Canonical form: empty constraints collapse to [`Constraint::EMPTY`].
    pub fn normalized(self) -> Constraint {
        if self.is_empty() {
            Constraint::EMPTY
        } else {
            self
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

impl From<(i64, i64)> for Constraint {
    fn from((low, high): (i64, i64)) -> Self {
        Constraint::new(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(low: i64, high: i64) -> Constraint {
        Constraint::new(low, high)
    }

    #[test]
    fn size_counts_interior_integers() {
        assert_eq!(c(0, 4001).size(), 4000);
        assert_eq!(c(2, 10).size(), 7);
        assert_eq!(c(2, 4).size(), 1);
    }

    #[test]
    fn size_floors_at_zero() {
        assert_eq!(c(1, 1).size(), 0);
        assert_eq!(c(1, 0).size(), 0);
        assert_eq!(c(1, 2).size(), 0);
        assert_eq!(c(10, -10).size(), 0);
        assert!(c(5, 3).is_empty());
    }

    #[test]
    fn size_does_not_overflow_at_extremes() {
        assert_eq!(c(i64::MIN, i64::MAX).size(), u64::MAX - 1);
        assert_eq!(c(i64::MAX, i64::MIN).size(), 0);
    }

    #[test]
    fn matches_is_exclusive() {
        let range = c(2, 6);
        assert!(!range.matches(2));
        assert!(range.matches(3));
        assert!(range.matches(5));
        assert!(!range.matches(6));
    }

    #[test]
    fn inclusive_constructor() {
        let range = Constraint::inclusive(1, 4000);
        assert_eq!(range, c(0, 4001));
        assert_eq!(range.size(), 4000);
    }

    #[test]
    fn intersection_touching_is_degenerate() {
        let overlap = c(2, 10).intersection(&c(10, 25));
        assert_eq!(overlap, c(10, 10));
        assert_eq!(overlap.size(), 0);
        assert_eq!(overlap.normalized(), Constraint::EMPTY);
    }

    #[test]
    fn intersection_overlapping() {
        assert_eq!(c(2, 10).intersection(&c(4, 25)), c(4, 10));
        assert_eq!(c(4, 25).intersection(&c(2, 10)), c(4, 10));
    }

    #[test]
    fn normalized_keeps_non_empty() {
        assert_eq!(c(2, 10).normalized(), c(2, 10));
    }

    #[test]
    fn display_format() {
        assert_eq!(c(3, 7).to_string(), "(3, 7)");
    }
}
