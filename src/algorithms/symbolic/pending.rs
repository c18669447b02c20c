//! Worklist of boxes still travelling through the workflow graph.

use std::collections::VecDeque;

use super::config::TraversalOrder;
use crate::constraints::Constraints;
use crate::workflow::Workflow;

/// A box waiting to be tested against `workflow.rules()[rule]`.
///
/// `rule == workflow.rules().len()` means every rule missed and the box
/// takes the fallback.
#[derive(Debug, Clone)]
pub(crate) struct Pending<'a> {
    pub workflow: &'a Workflow,
    pub rule: usize,
    pub region: Constraints,
}

impl<'a> Pending<'a> {
    /// Box entering `workflow` at its first rule.
    pub fn entering(workflow: &'a Workflow, region: Constraints) -> Self {
        Self {
            workflow,
            rule: 0,
            region,
        }
    }

    /// Same workflow, next rule.
    pub fn advance(&self, region: Constraints) -> Self {
        Self {
            workflow: self.workflow,
            rule: self.rule + 1,
            region,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Worklist<'a> {
    items: VecDeque<Pending<'a>>,
    order: TraversalOrder,
    peak: usize,
}

impl<'a> Worklist<'a> {
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            items: VecDeque::new(),
            order,
            peak: 0,
        }
    }

    pub fn push(&mut self, item: Pending<'a>) {
        self.items.push_back(item);
        self.peak = self.peak.max(self.items.len());
    }

    pub fn pop(&mut self) -> Option<Pending<'a>> {
        match self.order {
            TraversalOrder::DepthFirst => self.items.pop_back(),
            TraversalOrder::BreadthFirst => self.items.pop_front(),
        }
    }

    /// Largest number of boxes queued at once.
    pub fn peak(&self) -> usize {
        self.peak
    }
}
