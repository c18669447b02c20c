//! rangeflow - range-constraint algebra and symbolic workflow evaluation
//!
//! Represents sets of integer tuples as unions of disjoint axis-aligned boxes
//! and uses them to compute, without enumerating tuples, exactly which part of
//! an input space a catalog of threshold-routing workflows accepts.

pub mod algorithms;
pub mod constraints;
pub mod solution_space;
pub mod workflow;

pub use algorithms::{Evaluator, EvaluatorConfig};
pub use constraints::{Constraint, Constraints};
pub use solution_space::{Axes, ConstraintSet};
pub use workflow::{Catalog, Destination, Rule, Workflow, WorkflowError};
