//! Axis-aligned hyper-box over a fixed axis order.

use std::fmt::Display;

use super::constraint::Constraint;
use super::error::ConstraintError;
use crate::solution_space::{Axes, Axis, ConstraintSet};

/// One [`Constraint`] per axis: the box of tuples matching all of them.
///
/// The box is empty as soon as any axis is empty. Operations that discover an
/// empty result return the canonical empty box for the same axes (every axis
/// [`Constraint::EMPTY`]), so empty results compare equal to each other.
///
/// # Example
///
/// ```rust
/// use rangeflow::constraints::{Constraint, Constraints};
/// use rangeflow::solution_space::Axes;
///
/// let axes = Axes::new(['x', 'm', 'a', 's']);
/// let all = Constraints::universal(&axes, Constraint::inclusive(1, 4000));
/// assert_eq!(all.size(), 4000u128.pow(4));
///
/// let low_s = all.with("s", Constraint::new(0, 1351)).unwrap();
/// assert_eq!(low_s.size(), 4000u128.pow(3) * 1350);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Constraints {
    axes: Axes,
    bounds: Vec<Constraint>,
}

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl Constraints {
    /// Creates a box from one constraint per axis, in axis order.
    pub fn new(axes: &Axes, bounds: Vec<Constraint>) -> Result<Self, ConstraintError> {
        if bounds.len() != axes.len() {
            return Err(ConstraintError::AxisMismatch {
                expected: axes.len(),
                actual: bounds.len(),
            });
        }
        Ok(Self {
            axes: axes.clone(),
            bounds,
        })
    }

    /// Creates a box from `(low, high)` pairs, in axis order.
    pub fn from_bounds<I>(axes: &Axes, bounds: I) -> Result<Self, ConstraintError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self::new(axes, bounds.into_iter().map(Constraint::from).collect())
    }

    /// Box constraining every axis to the same `range`.
    pub fn universal(axes: &Axes, range: Constraint) -> Self {
        Self {
            axes: axes.clone(),
            bounds: vec![range; axes.len()],
        }
    }

    /// Canonical empty box for `axes`.
    pub fn empty(axes: &Axes) -> Self {
        Self::universal(axes, Constraint::EMPTY)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Accessors
// ─────────────────────────────────────────────────────────────────────

impl Constraints {
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Per-axis constraints, in axis order.
    pub fn bounds(&self) -> &[Constraint] {
        &self.bounds
    }

    /// Constraint on the named axis.
    pub fn get(&self, axis: &str) -> Option<Constraint> {
        self.axes.position(axis).map(|i| self.bounds[i])
    }

    /// Iterates `(axis, constraint)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (&Axis, &Constraint)> {
        self.axes.iter().zip(self.bounds.iter())
    }

    /// Number of tuples in the box (product of axis sizes, saturating).
    pub fn size(&self) -> u128 {
        self.bounds
            .iter()
            .fold(1u128, |acc, c| acc.saturating_mul(c.size() as u128))
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.iter().any(Constraint::is_empty)
    }

    /// Returns true if `point` (one value per axis, in axis order) lies in the box.
    pub fn contains(&self, point: &[i64]) -> bool {
        point.len() == self.bounds.len()
            && self.bounds.iter().zip(point).all(|(c, &v)| c.matches(v))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Algebra
// ─────────────────────────────────────────────────────────────────────

impl Constraints {
    /// Per-axis intersection; the canonical empty box if any axis ends up empty.
    ///
    /// # Panics
    ///
    /// Panics if the two boxes are over different axes.
    pub fn intersection(&self, other: &Constraints) -> Constraints {
        self.assert_same_axes(other);
        let mut bounds = Vec::with_capacity(self.bounds.len());
        for (own, theirs) in self.bounds.iter().zip(&other.bounds) {
            let overlap = own.intersection(theirs);
            if overlap.is_empty() {
                return Constraints::empty(&self.axes);
            }
            bounds.push(overlap);
        }
        Constraints {
            axes: self.axes.clone(),
            bounds,
        }
    }

    /// Returns true if the two boxes share at least one tuple.
    ///
    /// # Panics
    ///
    /// Panics if the two boxes are over different axes.
    pub fn overlaps(&self, other: &Constraints) -> bool {
        self.assert_same_axes(other);
        self.bounds
            .iter()
            .zip(&other.bounds)
            .all(|(own, theirs)| !own.intersection(theirs).is_empty())
    }

    /// Copy of this box with the named axis replaced by `constraint`.
    pub fn with(&self, axis: &str, constraint: Constraint) -> Result<Constraints, ConstraintError> {
        let index = self.axes.index_of(axis)?;
        Ok(self.with_index(index, constraint))
    }

    /// Copy of this box with the axis at `index` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the axis order.
    pub fn with_index(&self, index: usize, constraint: Constraint) -> Constraints {
        let mut bounds = self.bounds.clone();
        bounds[index] = constraint;
        Constraints {
            axes: self.axes.clone(),
            bounds,
        }
    }

    /// Tuples of `self` not in `other`, as pairwise-disjoint boxes.
    ///
    /// When the boxes intersect, the result is the ordered-axis
    /// decomposition: the piece for axis `i` keeps the overlap on axes
    /// before `i`, one side of the difference on axis `i`, and `self`'s
    /// bounds on the axes after it.
    ///
    /// When the boxes do not intersect as a whole, every axis is split
    /// independently and the result is [`exclude_per_axis`](Self::exclude_per_axis).
    ///
    /// # Panics
    ///
    /// Panics if the two boxes are over different axes.
    pub fn minus(&self, other: &Constraints) -> ConstraintSet {
        let pieces = if self.overlaps(other) {
            super::operations::region_difference(self, other)
        } else {
            super::operations::per_axis_exclusion(self, other)
        };
        ConstraintSet::from_disjoint_unchecked(pieces)
    }

    /// Boxes formed by the product of the per-axis differences
    /// `self[a].minus(other[a])`.
    ///
    /// An axis on which `other` does not touch `self` is kept whole; every
    /// other axis is cut down to the values outside `other`.
    ///
    /// # Panics
    ///
    /// Panics if the two boxes are over different axes.
    pub fn exclude_per_axis(&self, other: &Constraints) -> ConstraintSet {
        self.assert_same_axes(other);
        ConstraintSet::from_disjoint_unchecked(super::operations::per_axis_exclusion(self, other))
    }
}

impl Constraints {
    fn assert_same_axes(&self, other: &Constraints) {
        assert!(
            self.axes == other.axes,
            "boxes over different axes: {} and {}",
            self.axes,
            other.axes
        );
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Constraints {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            axes: Axes,
            bounds: Vec<Constraint>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(&raw.axes, raw.bounds).map_err(serde::de::Error::custom)
    }
}

impl Display for Constraints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (axis, constraint)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", axis, constraint)?;
        }
        write!(f, "}}")
    }
}
