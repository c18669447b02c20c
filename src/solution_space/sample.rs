//! Uniform sampling of tuples from a constraint set.

use rand::Rng;

use super::ConstraintSet;
use crate::constraints::Constraints;

impl Constraints {
    /// Draws a tuple uniformly from the box, or `None` if it is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<i64>> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.bounds()
                .iter()
                .map(|c| rng.gen_range(c.low() + 1..c.high()))
                .collect(),
        )
    }
}

impl ConstraintSet {
    /// Draws a tuple uniformly from the whole set.
    ///
    /// Members are picked with probability proportional to their size, so
    /// every covered tuple is equally likely.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<i64>> {
        let total = self.size();
        if total == 0 {
            return None;
        }

        let mut target = rng.gen_range(0..total);
        for member in self.iter() {
            let size = member.size();
            if target < size {
                return member.sample(rng);
            }
            target -= size;
        }
        None
    }
}
