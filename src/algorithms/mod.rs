pub mod symbolic;

pub use symbolic::{Evaluation, Evaluator, EvaluatorConfig, TraversalOrder};
