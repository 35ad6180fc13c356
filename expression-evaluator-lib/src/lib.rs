pub mod interpreter;

pub use interpreter::error::EvaluationError;
pub use interpreter::evaluate;
