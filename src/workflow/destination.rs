//! Where a rule or a workflow sends the tuples it matches.

use std::fmt::Display;

/// Target of a rule: another workflow, or one of the two terminal outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Destination {
    Workflow(String),
    Accept,
    Reject,
}

impl Destination {
    pub fn workflow(name: impl Into<String>) -> Self {
        Destination::Workflow(name.into())
    }

    /// Returns the terminal outcome, or `None` for a workflow reference.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Destination::Workflow(_) => None,
            Destination::Accept => Some(Outcome::Accepted),
            Destination::Reject => Some(Outcome::Rejected),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Destination::Workflow(_))
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Workflow(name) => f.write_str(name),
            Destination::Accept => f.write_str("A"),
            Destination::Reject => f.write_str("R"),
        }
    }
}

/// Final verdict for a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Accepted,
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_outcomes() {
        assert_eq!(Destination::Accept.outcome(), Some(Outcome::Accepted));
        assert_eq!(Destination::Reject.outcome(), Some(Outcome::Rejected));
        assert_eq!(Destination::workflow("px").outcome(), None);
        assert!(Destination::Accept.is_terminal());
        assert!(!Destination::workflow("px").is_terminal());
    }

    #[test]
    fn display_uses_short_names() {
        assert_eq!(Destination::Accept.to_string(), "A");
        assert_eq!(Destination::Reject.to_string(), "R");
        assert_eq!(Destination::workflow("qqz").to_string(), "qqz");
    }
}
