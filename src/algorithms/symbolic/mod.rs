//! Symbolic execution of a workflow catalog over boxes of tuples.
//!
//! Instead of routing tuples one at a time, the evaluator routes whole boxes.
//! Each rule splits the box it sees into the part that satisfies the rule
//! (sent to the rule's destination) and the part that does not (tested against
//! the next rule, or sent to the fallback after the last one):
//!
//! ```text
//!   in{s<1351:px,qqz}     (x, m, a, s ∈ 1..=4000)
//!        │
//!        ├── s ∈ 1..=1350    ──▶ px{a<2006:A,R}
//!        │                         ├── a ∈ 1..=2005    ──▶ A
//!        │                         └── a ∈ 2006..=4000 ──▶ R
//!        └── s ∈ 1351..=4000 ──▶ qqz{s>2770:A,R}
//!                                  ├── s ∈ 2771..=4000 ──▶ A
//!                                  └── s ∈ 1351..=2770 ──▶ R
//! ```
//!
//! Boxes reaching Accept are unioned into the result [`ConstraintSet`]; boxes
//! reaching Reject are collected separately so that the two together always
//! cover the starting box exactly once.
//!
//! # Module Structure
//!
//! - [`config`] - Start workflow, traversal order, validation and step budget
//! - `pending` - Worklist of boxes still in flight
//! - [`evaluation`] - Accepted/rejected regions and traversal statistics

pub mod config;
pub mod evaluation;
mod pending;

pub use config::{EvaluatorConfig, TraversalOrder};
pub use evaluation::Evaluation;

use log::{debug, trace};

use crate::constraints::Constraints;
use crate::solution_space::ConstraintSet;
use crate::workflow::{Catalog, Destination, Workflow, WorkflowError};
use pending::{Pending, Worklist};

/// Routes boxes through a [`Catalog`] and collects what gets accepted.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
    config: EvaluatorConfig,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with the default configuration (start at `in`).
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, EvaluatorConfig::default())
    }

    pub fn with_config(catalog: &'a Catalog, config: EvaluatorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Region of `universe` the catalog accepts.
    pub fn evaluate(&self, universe: &Constraints) -> Result<ConstraintSet, WorkflowError> {
        self.run(universe).map(Evaluation::into_accepted)
    }

    /// Number of tuples of `universe` the catalog accepts.
    pub fn count_accepted(&self, universe: &Constraints) -> Result<u128, WorkflowError> {
        self.run(universe).map(|evaluation| evaluation.accepted_count())
    }

    /// Full evaluation: accepted and rejected regions plus statistics.
    pub fn run(&self, universe: &Constraints) -> Result<Evaluation, WorkflowError> {
        if self.config.validate {
            self.catalog.validate(&self.config.start)?;
        }
        let start = self.catalog.get(&self.config.start)?;
        debug!(
            "evaluating {} tuples from `{}` ({:?})",
            universe.size(),
            start.name(),
            self.config.order
        );

        let mut evaluation = Evaluation::default();
        let mut worklist = Worklist::new(self.config.order);
        if !universe.is_empty() {
            worklist.push(Pending::entering(start, universe.clone()));
        }

        while let Some(item) = worklist.pop() {
            if let Some(limit) = self.config.max_steps {
                if evaluation.steps() >= limit {
                    return Err(WorkflowError::StepLimitExceeded(limit));
                }
            }
            evaluation.record_step();
            self.step(item, &mut worklist, &mut evaluation)?;
        }
        evaluation.record_peak(worklist.peak());

        debug!(
            "accepted {} tuples in {} boxes after {} steps",
            evaluation.accepted_count(),
            evaluation.accepted().len(),
            evaluation.steps()
        );
        Ok(evaluation)
    }

    /// Tests one pending box against its current rule.
    fn step(
        &self,
        item: Pending<'a>,
        worklist: &mut Worklist<'a>,
        evaluation: &mut Evaluation,
    ) -> Result<(), WorkflowError> {
        let workflow = item.workflow;
        let Some(rule) = workflow.rules().get(item.rule) else {
            trace!("{}: fallback {} <- {}", workflow.name(), workflow.fallback(), item.region);
            return self.dispatch(workflow, workflow.fallback(), item.region, worklist, evaluation);
        };

        let (matched, remainder) = rule.split(&item.region)?;
        trace!("{}: {} splits {}", workflow.name(), rule, item.region);
        if !remainder.is_empty() {
            worklist.push(item.advance(remainder));
        }
        if !matched.is_empty() {
            self.dispatch(workflow, rule.destination(), matched, worklist, evaluation)?;
        }
        Ok(())
    }

    /// Sends `region` to `destination`; the only place results accumulate.
    fn dispatch(
        &self,
        from: &'a Workflow,
        destination: &Destination,
        region: Constraints,
        worklist: &mut Worklist<'a>,
        evaluation: &mut Evaluation,
    ) -> Result<(), WorkflowError> {
        match destination {
            Destination::Workflow(name) => {
                let next = self.catalog.resolve(from.name(), name)?;
                worklist.push(Pending::entering(next, region));
            }
            Destination::Accept => {
                trace!("accept {}", region);
                evaluation.accept(&region);
            }
            Destination::Reject => {
                trace!("reject {}", region);
                evaluation.reject(&region);
            }
        }
        Ok(())
    }
}
