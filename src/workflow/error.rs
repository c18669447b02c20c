use thiserror::Error;

use crate::constraints::ConstraintError;

/// Errors raised while resolving or evaluating a workflow catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Unknown workflow: {0}")]
    UnknownWorkflow(String),

    #[error("Workflow `{workflow}` routes to unknown workflow `{destination}`")]
    UnknownDestination {
        workflow: String,
        destination: String,
    },

    #[error("Workflow already defined: {0}")]
    DuplicateWorkflow(String),

    #[error("Routing graph contains a cycle through workflow `{0}`")]
    Cycle(String),

    #[error("Evaluation exceeded the step budget of {0}")]
    StepLimitExceeded(usize),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_destination_display() {
        let e = WorkflowError::UnknownDestination {
            workflow: "in".to_string(),
            destination: "qqz".to_string(),
        };
        assert_eq!(e.to_string(), "Workflow `in` routes to unknown workflow `qqz`");
    }

    #[test]
    fn cycle_display() {
        let e = WorkflowError::Cycle("px".to_string());
        assert_eq!(
            e.to_string(),
            "Routing graph contains a cycle through workflow `px`"
        );
    }

    #[test]
    fn constraint_error_is_transparent() {
        let e: WorkflowError = ConstraintError::UnknownAxis("q".to_string()).into();
        assert_eq!(e.to_string(), "Unknown axis: q");
    }
}
