//! Solution space: unions of disjoint boxes over a named axis order.
//!
//! [`Axes`] fixes the dimensions, [`ConstraintSet`] holds the boxes. Sampling
//! helpers for boxes and sets live in `sample`.

mod axes;
mod constraint_set;
mod sample;

pub use axes::{Axes, Axis};
pub use constraint_set::ConstraintSet;
