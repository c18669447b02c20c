use thiserror::Error;

/// Errors raised when a box is built or addressed inconsistently with its axes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Unknown axis: {0}")]
    UnknownAxis(String),

    #[error("Expected one bound per axis ({expected}), got {actual}")]
    AxisMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_axis_display() {
        let e = ConstraintError::UnknownAxis("q".to_string());
        assert_eq!(e.to_string(), "Unknown axis: q");
    }

    #[test]
    fn axis_mismatch_display() {
        let e = ConstraintError::AxisMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(e.to_string(), "Expected one bound per axis (4), got 3");
    }
}
