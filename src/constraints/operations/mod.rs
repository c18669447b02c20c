mod difference;

pub use difference::{constraint_difference, per_axis_exclusion, region_difference};

#[cfg(debug_assertions)]
pub mod assertions;

#[cfg(not(debug_assertions))]
pub mod assertions {
    use crate::constraints::Constraints;

    pub fn is_pairwise_disjoint<'a, I>(_boxes: I) -> bool
    where
        I: IntoIterator<Item = &'a Constraints>,
        I::IntoIter: Clone,
    {
        true
    }
}
