//! Debug-only invariant checks for box collections.

use crate::constraints::Constraints;

/// Returns true if no two boxes share a tuple.
pub fn is_pairwise_disjoint<'a, I>(boxes: I) -> bool
where
    I: IntoIterator<Item = &'a Constraints>,
    I::IntoIter: Clone,
{
    let iter = boxes.into_iter();
    iter.clone()
        .enumerate()
        .all(|(i, a)| iter.clone().skip(i + 1).all(|b| !a.overlaps(b)))
}
