pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod normalizer;
pub mod operator;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::evaluator::evaluate_tokens;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// Juxtaposed values are multiplied, so `2(3)`, `(1)(2)` and `(2)3` are all
/// products. Every pair of adjacent digits counts as such a juxtaposition,
/// which makes `23` evaluate to `2 * 3`.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, or why it could not be evaluated.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::evaluate;
/// # use expression_evaluator::interpreter::error::EvaluationError;
///
/// let value = evaluate("(2 + 3)(4 + 5)")?;
/// assert_eq!(value, 45.0);
/// # Ok::<(), EvaluationError>(())
/// ```
pub fn evaluate(expression: &str) -> std::result::Result<f64, EvaluationError> {
    let result = lexer::tokenize(expression).and_then(|tokens| {
        debug!("Tokenized {:?} into {:?}", expression, tokens);
        evaluate_tokens(tokens)
    });
    if let Err(error) = &result {
        debug!("Failed to evaluate {:?}: {:?}", expression, error);
    }
    result
}

/// Pretty-prints the given tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::tokens_to_string;
/// use expression_evaluator::interpreter::operator::BinaryOperator;
/// use expression_evaluator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number(2.0),
///     Token::Operator(BinaryOperator::Exponentiate),
///     Token::Number(-1.5),
/// ];
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "2^-1.5");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(operator) if operator.precedence() < 3 => {
                builder.append(" ");
                builder.append(operator.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}
