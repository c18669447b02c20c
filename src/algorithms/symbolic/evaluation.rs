//! Result of one symbolic evaluation.

use crate::constraints::Constraints;
use crate::solution_space::ConstraintSet;

/// Accepted and rejected regions, plus traversal statistics.
///
/// Every tuple of the starting box ends in exactly one of the two sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    accepted: ConstraintSet,
    rejected: ConstraintSet,
    steps: usize,
    peak_pending: usize,
}

impl Evaluation {
    pub fn accepted(&self) -> &ConstraintSet {
        &self.accepted
    }

    pub fn rejected(&self) -> &ConstraintSet {
        &self.rejected
    }

    /// Number of boxes taken off the worklist.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Largest worklist length seen.
    pub fn peak_pending(&self) -> usize {
        self.peak_pending
    }

    /// Number of accepted tuples.
    pub fn accepted_count(&self) -> u128 {
        self.accepted.size()
    }

    pub fn into_accepted(self) -> ConstraintSet {
        self.accepted
    }

    pub(crate) fn accept(&mut self, region: &Constraints) {
        self.accepted.absorb(region);
    }

    pub(crate) fn reject(&mut self, region: &Constraints) {
        self.rejected.absorb(region);
    }

    pub(crate) fn record_step(&mut self) {
        self.steps += 1;
    }

    pub(crate) fn record_peak(&mut self, peak: usize) {
        self.peak_pending = self.peak_pending.max(peak);
    }
}
