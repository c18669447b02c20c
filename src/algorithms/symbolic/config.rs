//! Configuration for symbolic workflow evaluation.

/// Order in which pending boxes are taken off the worklist.
///
/// The accepted region does not depend on the order; it only changes how
/// large the worklist grows and the order boxes are logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Last pushed, first processed.
    #[default]
    DepthFirst,
    /// First pushed, first processed.
    BreadthFirst,
}

/// Configuration for [`Evaluator`](super::Evaluator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Workflow every evaluation starts from.
    pub start: String,
    /// Worklist discipline.
    pub order: TraversalOrder,
    /// Check the routing graph (dangling routes, cycles) before running.
    pub validate: bool,
    /// Abort after this many processed boxes. Only needed when `validate` is
    /// off and the catalog may loop.
    pub max_steps: Option<usize>,
}

impl EvaluatorConfig {
    /// Default start workflow name.
    pub const DEFAULT_START: &'static str = "in";

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START.to_string(),
            order: TraversalOrder::DepthFirst,
            validate: true,
            max_steps: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EvaluatorConfig::default();
        assert_eq!(cfg.start, "in");
        assert_eq!(cfg.order, TraversalOrder::DepthFirst);
        assert!(cfg.validate);
        assert_eq!(cfg.max_steps, None);
    }

    #[test]
    fn builder_overrides() {
        let cfg = EvaluatorConfig::default()
            .with_start("root")
            .with_order(TraversalOrder::BreadthFirst)
            .with_validation(false)
            .with_max_steps(64);
        assert_eq!(cfg.start, "root");
        assert_eq!(cfg.order, TraversalOrder::BreadthFirst);
        assert!(!cfg.validate);
        assert_eq!(cfg.max_steps, Some(64));
    }
}
