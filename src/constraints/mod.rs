//! Interval algebra: single-axis [`Constraint`]s and the boxes built from them.

pub mod constraint;
pub mod error;
pub mod operations;
pub mod region;

pub use constraint::Constraint;
pub use error::ConstraintError;
pub use region::Constraints;
