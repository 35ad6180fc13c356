use crate::interpreter::error::{EvaluationError, Result};
use itertools::Itertools;

const ALLOWED_SYMBOLS: [char; 8] = ['+', '-', '*', '/', '^', '(', ')', '.'];

/// Rewrites a raw expression into the form the lexer expects: no whitespace,
/// every implicit multiplication made explicit and only known characters.
///
/// # Arguments
///
/// * `expression`: The raw, user-supplied expression.
///
/// returns: The normalized expression.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::normalizer::normalize;
/// # use expression_evaluator::interpreter::error::EvaluationError;
///
/// assert_eq!(normalize("(1 + 2)(3)")?, "(1+2)*(3)");
/// # Ok::<(), EvaluationError>(())
/// ```
pub fn normalize(expression: &str) -> Result<String> {
    let compact = strip_whitespace(expression);
    let explicit = insert_implicit_multiplication(&compact);
    validate_characters(&explicit)?;
    Ok(explicit)
}

fn strip_whitespace(expression: &str) -> String {
    expression
        .chars()
        .filter(|character| !character.is_whitespace())
        .collect()
}

/// A single forward pass over every adjacent pair of characters. Inserted
/// operators are never re-examined, and every digit pair is split, so a
/// multi-digit run such as `234` becomes `2*3*4`.
fn insert_implicit_multiplication(expression: &str) -> String {
    let mut rewritten = String::with_capacity(expression.len() * 2);
    for (current, next) in expression.chars().tuple_windows() {
        rewritten.push(current);
        if is_implicit_multiplication(current, next) {
            rewritten.push('*');
        }
    }
    if let Some(last) = expression.chars().last() {
        rewritten.push(last);
    }
    rewritten
}

fn is_implicit_multiplication(current: char, next: char) -> bool {
    let value_before_parenthesis = (current.is_ascii_digit() || current == ')') && next == '(';
    let parenthesis_before_digit = current == ')' && next.is_ascii_digit();
    let digit_before_digit = current.is_ascii_digit() && next.is_ascii_digit();
    value_before_parenthesis || parenthesis_before_digit || digit_before_digit
}

fn validate_characters(expression: &str) -> Result<()> {
    match expression
        .chars()
        .enumerate()
        .find(|(_, character)| !is_allowed(*character))
    {
        Some((position, character)) => Err(EvaluationError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

fn is_allowed(character: char) -> bool {
    character.is_ascii_digit() || ALLOWED_SYMBOLS.contains(&character)
}
