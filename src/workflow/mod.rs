//! The routing rule language: rules, workflows and the catalog that links them.

pub mod catalog;
pub mod definition;
pub mod destination;
pub mod error;
pub mod rule;

pub use catalog::{Catalog, RoutingGraph};
pub use definition::Workflow;
pub use destination::{Destination, Outcome};
pub use error::WorkflowError;
pub use rule::{Comparator, Rule};
