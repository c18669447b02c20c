//! A union of pairwise-disjoint boxes.
//!
//! [`ConstraintSet`] wraps a `BTreeSet<Constraints>` and guarantees the
//! **disjointness invariant** at all times: no two members share a tuple.
//! This makes [`size`](ConstraintSet::size) an exact count (a plain sum over
//! members) and lets every operation work member by member.
//!
//! All set operations return new sets; the receiver is left untouched.

use std::collections::BTreeSet;
use std::fmt::Display;

use crate::constraints::operations::assertions::is_pairwise_disjoint;
use crate::constraints::Constraints;

/// Set of pairwise-disjoint [`Constraints`] boxes.
///
/// Equality is set equality over the concrete boxes, not over the tuples they
/// denote: two different decompositions of the same region compare unequal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConstraintSet(BTreeSet<Constraints>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl ConstraintSet {
    /// The empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Builds a set from boxes the caller guarantees to be pairwise disjoint.
    ///
    /// Empty boxes are dropped. The invariant is checked in debug builds only.
    pub fn from_disjoint_unchecked<I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = Constraints>,
    {
        let set: BTreeSet<Constraints> = boxes.into_iter().filter(|b| !b.is_empty()).collect();
        debug_assert!(
            is_pairwise_disjoint(&set),
            "ConstraintSet::from_disjoint_unchecked called with overlapping boxes"
        );
        Self(set)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Accessors
// ─────────────────────────────────────────────────────────────────────

impl ConstraintSet {
    /// Number of member boxes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tuples covered by the set.
    pub fn size(&self) -> u128 {
        self.0
            .iter()
            .fold(0u128, |acc, b| acc.saturating_add(b.size()))
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, Constraints> {
        self.0.iter()
    }

    /// Returns true if some member contains `point`.
    pub fn contains(&self, point: &[i64]) -> bool {
        self.0.iter().any(|b| b.contains(point))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl ConstraintSet {
    /// Removes every tuple of `region` from the set.
    ///
    /// Members that intersect `region` are replaced by their pieces outside
    /// it; members that do not are kept whole.
    pub fn minus(&self, region: &Constraints) -> ConstraintSet {
        let mut out = BTreeSet::new();
        for member in &self.0 {
            if member.overlaps(region) {
                out.extend(member.minus(region));
            } else {
                out.insert(member.clone());
            }
        }
        ConstraintSet::from_disjoint_unchecked(out)
    }

    /// Adds the tuples of `region` that the set does not already cover.
    ///
    /// Existing members are left untouched; `region` is cut against every
    /// member it overlaps and only the remainder is inserted.
    pub fn plus(&self, region: &Constraints) -> ConstraintSet {
        let mut out = self.clone();
        out.absorb(region);
        out
    }

    /// Tuple-set union.
    pub fn union(&self, other: &ConstraintSet) -> ConstraintSet {
        let mut out = self.clone();
        for region in &other.0 {
            out.absorb(region);
        }
        out
    }

    /// Tuples of the set that also lie in `region`.
    pub fn intersection(&self, region: &Constraints) -> ConstraintSet {
        ConstraintSet::from_disjoint_unchecked(self.0.iter().map(|member| member.intersection(region)))
    }

    /// Tuples of the set that lie in no member of `other`.
    pub fn difference(&self, other: &ConstraintSet) -> ConstraintSet {
        other.0.iter().fold(self.clone(), |acc, region| acc.minus(region))
    }

    /// Adds `region` in place; same result as [`plus`](Self::plus).
    pub(crate) fn absorb(&mut self, region: &Constraints) {
        if region.is_empty() {
            return;
        }

        let mut fresh = vec![region.clone()];
        for existing in &self.0 {
            if fresh.is_empty() {
                return;
            }
            fresh = fresh
                .into_iter()
                .flat_map(|piece| {
                    if piece.overlaps(existing) {
                        piece.minus(existing).into_iter().collect()
                    } else {
                        vec![piece]
                    }
                })
                .collect();
        }

        self.0.extend(fresh);
        debug_assert!(is_pairwise_disjoint(&self.0));
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Constraints> for ConstraintSet {
    fn from(region: Constraints) -> Self {
        ConstraintSet::from_disjoint_unchecked([region])
    }
}

impl FromIterator<Constraints> for ConstraintSet {
    /// Unions the boxes one by one; overlapping input is allowed.
    fn from_iter<I: IntoIterator<Item = Constraints>>(iter: I) -> Self {
        let mut set = ConstraintSet::new();
        for region in iter {
            set.absorb(&region);
        }
        set
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ConstraintSet {
    /// Members are unioned one by one, so overlapping input still yields a
    /// disjoint set.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let members = Vec::<Constraints>::deserialize(deserializer)?;
        Ok(members.into_iter().collect())
    }
}

impl IntoIterator for ConstraintSet {
    type Item = Constraints;
    type IntoIter = std::collections::btree_set::IntoIter<Constraints>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraints;
    type IntoIter = std::collections::btree_set::Iter<'a, Constraints>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for ConstraintSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, region) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", region)?;
        }
        write!(f, "}}")
    }
}
