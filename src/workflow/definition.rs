//! Named, ordered rule lists.

use std::fmt::Display;

use super::destination::Destination;
use super::rule::Rule;
use crate::constraints::ConstraintError;
use crate::solution_space::Axes;

/// Ordered rules tried in turn; tuples matching none go to `fallback`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workflow {
    name: String,
    rules: Vec<Rule>,
    fallback: Destination,
}

impl Workflow {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>, fallback: Destination) -> Self {
        Self {
            name: name.into(),
            rules,
            fallback,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &Destination {
        &self.fallback
    }

    /// Every destination this workflow can route to, rules first.
    pub fn destinations(&self) -> impl Iterator<Item = &Destination> {
        self.rules
            .iter()
            .map(Rule::destination)
            .chain(std::iter::once(&self.fallback))
    }

    /// Destination of a single tuple: the first matching rule's, or the fallback.
    pub fn route(&self, axes: &Axes, point: &[i64]) -> Result<&Destination, ConstraintError> {
        for rule in &self.rules {
            if rule.matches(axes, point)? {
                return Ok(rule.destination());
            }
        }
        Ok(&self.fallback)
    }
}

impl Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{{", self.name)?;
        for rule in &self.rules {
            write!(f, "{},", rule)?;
        }
        write!(f, "{}}}", self.fallback)
    }
}
