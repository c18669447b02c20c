//! Single-axis threshold rules.

use std::fmt::Display;

use super::destination::Destination;
use crate::constraints::{Constraint, ConstraintError, Constraints};
use crate::solution_space::{Axes, Axis};

/// Strict comparison applied between an axis value and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparator {
    /// `value < threshold`
    Less,
    /// `value > threshold`
    Greater,
}

impl Comparator {
    pub const fn test(self, value: i64, threshold: i64) -> bool {
        match self {
            Comparator::Less => value < threshold,
            Comparator::Greater => value > threshold,
        }
    }

    /// Splits `range` into the values passing the comparison and the rest.
    ///
    /// Either half may come back empty.
    pub fn split(self, range: Constraint, threshold: i64) -> (Constraint, Constraint) {
        match self {
            Comparator::Less => (
                Constraint::new(range.low(), range.high().min(threshold)),
                Constraint::new(range.low().max(threshold.saturating_sub(1)), range.high()),
            ),
            Comparator::Greater => (
                Constraint::new(range.low().max(threshold), range.high()),
                Constraint::new(range.low(), range.high().min(threshold.saturating_add(1))),
            ),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Comparator::Less => '<',
            Comparator::Greater => '>',
        }
    }
}

/// `axis <op> threshold`, sending matching tuples to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    axis: Axis,
    comparator: Comparator,
    threshold: i64,
    destination: Destination,
}

impl Rule {
    pub fn new(
        axis: impl Into<Axis>,
        comparator: Comparator,
        threshold: i64,
        destination: Destination,
    ) -> Self {
        Self {
            axis: axis.into(),
            comparator,
            threshold,
            destination,
        }
    }

    /// `axis < threshold`
    pub fn less(axis: impl Into<Axis>, threshold: i64, destination: Destination) -> Self {
        Self::new(axis, Comparator::Less, threshold, destination)
    }

    /// `axis > threshold`
    pub fn greater(axis: impl Into<Axis>, threshold: i64, destination: Destination) -> Self {
        Self::new(axis, Comparator::Greater, threshold, destination)
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Returns true if `point` (ordered by `axes`) satisfies the comparison.
    pub fn matches(&self, axes: &Axes, point: &[i64]) -> Result<bool, ConstraintError> {
        let index = axes.index_of(self.axis.name())?;
        let value = point.get(index).copied().ok_or(ConstraintError::AxisMismatch {
            expected: axes.len(),
            actual: point.len(),
        })?;
        Ok(self.comparator.test(value, self.threshold))
    }

    /// Splits `region` on the rule's axis into `(matched, remainder)`.
    pub fn split(&self, region: &Constraints) -> Result<(Constraints, Constraints), ConstraintError> {
        let index = region.axes().index_of(self.axis.name())?;
        let (matched, remainder) = self
            .comparator
            .split(region.bounds()[index], self.threshold);
        Ok((
            region.with_index(index, matched),
            region.with_index(index, remainder),
        ))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}:{}",
            self.axis,
            self.comparator.symbol(),
            self.threshold,
            self.destination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xmas() -> Axes {
        Axes::new(['x', 'm', 'a', 's'])
    }

    #[test]
    fn less_split_on_full_range() {
        let (matched, rest) = Comparator::Less.split(Constraint::new(0, 4001), 1351);
        assert_eq!(matched, Constraint::new(0, 1351));
        assert_eq!(rest, Constraint::new(1350, 4001));
        assert_eq!(matched.size() + rest.size(), 4000);
    }

    #[test]
    fn greater_split_on_full_range() {
        let (matched, rest) = Comparator::Greater.split(Constraint::new(0, 4001), 2770);
        assert_eq!(matched, Constraint::new(2770, 4001));
        assert_eq!(rest, Constraint::new(0, 2771));
        assert_eq!(matched.size(), 1230);
        assert_eq!(rest.size(), 2770);
    }

    #[test]
    fn split_threshold_outside_range() {
        let (matched, rest) = Comparator::Less.split(Constraint::new(10, 20), 5);
        assert!(matched.is_empty());
        assert_eq!(rest, Constraint::new(10, 20));

        let (matched, rest) = Comparator::Greater.split(Constraint::new(10, 20), 5);
        assert_eq!(matched, Constraint::new(10, 20));
        assert!(rest.is_empty());
    }

    #[test]
    fn split_halves_agree_with_test() {
        let range = Constraint::new(-3, 9);
        for comparator in [Comparator::Less, Comparator::Greater] {
            for threshold in -5..12 {
                let (matched, rest) = comparator.split(range, threshold);
                for v in -2..9 {
                    assert_eq!(matched.matches(v), comparator.test(v, threshold));
                    assert_eq!(rest.matches(v), !comparator.test(v, threshold));
                }
            }
        }
    }

    #[test]
    fn rule_split_narrows_one_axis() {
        let all = Constraints::universal(&xmas(), Constraint::new(0, 4001));
        let rule = Rule::less('a', 2006, Destination::workflow("qkq"));
        let (matched, rest) = rule.split(&all).unwrap();
        assert_eq!(matched.get("a"), Some(Constraint::new(0, 2006)));
        assert_eq!(rest.get("a"), Some(Constraint::new(2005, 4001)));
        assert_eq!(matched.get("x"), Some(Constraint::new(0, 4001)));
        assert_eq!(matched.size() + rest.size(), all.size());
    }

    #[test]
    fn rule_on_unknown_axis_is_error() {
        let all = Constraints::universal(&xmas(), Constraint::new(0, 4001));
        let rule = Rule::greater('q', 10, Destination::Accept);
        assert_eq!(
            rule.split(&all),
            Err(ConstraintError::UnknownAxis("q".to_string()))
        );
    }

    #[test]
    fn rule_matches_point() {
        let rule = Rule::greater('m', 2090, Destination::Accept);
        assert_eq!(rule.matches(&xmas(), &[787, 2655, 1222, 2876]), Ok(true));
        assert_eq!(rule.matches(&xmas(), &[1679, 44, 2067, 496]), Ok(false));
        assert!(rule.matches(&xmas(), &[1]).is_err());
    }

    #[test]
    fn display_matches_rule_syntax() {
        let rule = Rule::less('a', 2006, Destination::workflow("qkq"));
        assert_eq!(rule.to_string(), "a<2006:qkq");
        let rule = Rule::greater('m', 2090, Destination::Accept);
        assert_eq!(rule.to_string(), "m>2090:A");
    }
}
