use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("Invalid character '{character}' in expression at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid expression")]
    InvalidExpression,
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
