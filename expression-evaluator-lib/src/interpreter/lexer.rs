use crate::interpreter::error::Result;
use crate::interpreter::normalizer::normalize;
use crate::interpreter::token::Token;
use std::mem;

/// Characters after which a `-` negates the following literal instead of
/// subtracting.
const NEGATION_CONTEXT: [char; 6] = ['+', '-', '*', '/', '(', '^'];

/// Converts the given expression into a sequence of tokens.
///
/// # Arguments
///
/// * `expression`: The raw expression, before normalization.
///
/// returns: The tokens of the normalized expression, in infix order.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::lexer::tokenize;
/// use expression_evaluator::interpreter::token::Token;
/// # use expression_evaluator::interpreter::error::EvaluationError;
///
/// let tokens = tokenize("-2(3)")?;
/// assert_eq!(tokens[0], Token::Number(-2.0));
/// assert_eq!(tokens.len(), 5);
/// # Ok::<(), EvaluationError>(())
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let normalized = normalize(expression)?;
    split_lexemes(&normalized)
        .iter()
        .map(|lexeme| lexeme.parse::<Token>())
        .collect()
}

fn split_lexemes(expression: &str) -> Vec<String> {
    let mut lexemes: Vec<String> = Vec::new();
    let mut literal = String::new();
    let mut previous: Option<char> = None;

    for character in expression.chars() {
        if is_literal_character(character) {
            literal.push(character);
        } else {
            if character == '-' && previous == Some('-') {
                // A run of minus signs after a value never chains into
                // subtraction of a negative literal: the preceding minus is
                // replaced by the new literal, leaving two adjacent operands.
                if literal.is_empty() {
                    lexemes.pop();
                } else if lexemes.last().map_or(false, |lexeme| ends_with_value(lexeme)) {
                    literal.clear();
                }
            }
            if !literal.is_empty() {
                lexemes.push(mem::take(&mut literal));
            }
            if character == '-' && starts_negative_literal(previous) {
                literal.push(character);
            } else {
                lexemes.push(character.to_string());
            }
        }
        previous = Some(character);
    }

    if !literal.is_empty() {
        lexemes.push(literal);
    }
    lexemes
}

fn ends_with_value(lexeme: &str) -> bool {
    lexeme
        .chars()
        .last()
        .map_or(false, |character| is_literal_character(character) || character == ')')
}

fn is_literal_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn starts_negative_literal(previous: Option<char>) -> bool {
    match previous {
        None => true,
        Some(character) => NEGATION_CONTEXT.contains(&character),
    }
}
