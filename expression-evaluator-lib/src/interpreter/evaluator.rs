use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Reduces a sequence of infix tokens into a single value, using an operand
/// stack and an operator stack (shunting-yard).
///
/// # Arguments
///
/// * `tokens`: The tokens to evaluate, in infix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::evaluator::evaluate_tokens;
/// use expression_evaluator::interpreter::operator::BinaryOperator;
/// use expression_evaluator::interpreter::token::Token;
/// # use expression_evaluator::interpreter::error::EvaluationError;
///
/// let tokens = vec![
///     Token::Number(2.0),
///     Token::Operator(BinaryOperator::Exponentiate),
///     Token::Number(10.0),
/// ];
/// assert_eq!(evaluate_tokens(tokens)?, 1024.0);
/// # Ok::<(), EvaluationError>(())
/// ```
pub fn evaluate_tokens(tokens: Vec<Token>) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::LeftParenthesis => operators.push(token),
            Token::RightParenthesis => {
                reduce_parenthesised_group(&mut operands, &mut operators)?
            }
            Token::Operator(operator) => {
                reduce_before_operator(&mut operands, &mut operators, operator)?
            }
        };
    }

    reduce_leftover_operators(&mut operands, &mut operators)?;

    match operands.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvaluationError::InvalidExpression),
    }
}

fn reduce_parenthesised_group(operands: &mut Vec<f64>, operators: &mut Vec<Token>) -> Result<()> {
    loop {
        match operators.last().copied() {
            None => return Err(EvaluationError::MismatchedParentheses),
            Some(Token::LeftParenthesis) => break,
            Some(_) => apply_top_operator(operands, operators)?,
        }
    }
    // Discard the open parenthesis.
    operators.pop();
    Ok(())
}

fn reduce_before_operator(
    operands: &mut Vec<f64>,
    operators: &mut Vec<Token>,
    operator: BinaryOperator,
) -> Result<()> {
    while let Some(&Token::Operator(top_of_operator_stack)) = operators.last() {
        if !operator.yields_to(&top_of_operator_stack) {
            break;
        }
        apply_top_operator(operands, operators)?;
    }
    operators.push(Token::Operator(operator));
    Ok(())
}

fn reduce_leftover_operators(operands: &mut Vec<f64>, operators: &mut Vec<Token>) -> Result<()> {
    while let Some(&top_of_operator_stack) = operators.last() {
        if top_of_operator_stack.is_parenthesis() {
            return Err(EvaluationError::MismatchedParentheses);
        }
        apply_top_operator(operands, operators)?;
    }
    Ok(())
}

fn apply_top_operator(operands: &mut Vec<f64>, operators: &mut Vec<Token>) -> Result<()> {
    let operator = match operators.pop() {
        Some(Token::Operator(operator)) => operator,
        Some(other) => return Err(EvaluationError::InvalidToken(other.to_string())),
        None => return Err(EvaluationError::InvalidExpression),
    };
    let right = operands.pop().ok_or(EvaluationError::InvalidExpression)?;
    let left = operands.pop().ok_or(EvaluationError::InvalidExpression)?;
    let result = operator.apply(left, right)?;
    trace!("{} {} {} = {}", left, operator, right, result);
    operands.push(result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    fn operator(symbol: char) -> Token {
        Token::Operator(BinaryOperator::from_symbol(symbol).unwrap())
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        // 2 + 3 * 4
        let infix = vec![number(2.0), operator('+'), number(3.0), operator('*'), number(4.0)];

        assert_eq!(evaluate_tokens(infix).unwrap(), 14.0)
    }

    #[test]
    fn subtraction_is_left_associative() {
        // 10 - 4 - 3
        let infix = vec![number(10.0), operator('-'), number(4.0), operator('-'), number(3.0)];

        assert_eq!(evaluate_tokens(infix).unwrap(), 3.0)
    }

    #[test]
    fn exponentiation_is_right_associative() {
        // 2 ^ 3 ^ 2
        let infix = vec![number(2.0), operator('^'), number(3.0), operator('^'), number(2.0)];

        assert_eq!(evaluate_tokens(infix).unwrap(), 512.0)
    }

    #[test]
    fn nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = vec![
            number(1.0),
            operator('+'),
            Token::LeftParenthesis,
            Token::LeftParenthesis,
            number(2.0),
            operator('+'),
            number(3.0),
            Token::RightParenthesis,
            operator('*'),
            number(4.0),
            Token::RightParenthesis,
        ];

        assert_eq!(evaluate_tokens(infix).unwrap(), 21.0)
    }

    #[test]
    fn unopened_closing_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = vec![
            Token::LeftParenthesis,
            number(1.0),
            operator('+'),
            number(2.0),
            Token::RightParenthesis,
            Token::RightParenthesis,
        ];

        let error = evaluate_tokens(infix).expect_err("Should return Err");
        assert_eq!(error, EvaluationError::MismatchedParentheses)
    }

    #[test]
    fn unclosed_parenthesis_should_return_err() {
        // (1
        let infix = vec![Token::LeftParenthesis, number(1.0)];

        let error = evaluate_tokens(infix).expect_err("Should return Err");
        assert_eq!(error, EvaluationError::MismatchedParentheses)
    }

    #[test]
    fn adjacent_operands_should_return_err() {
        let infix = vec![number(1.0), number(2.0)];

        let error = evaluate_tokens(infix).expect_err("Should return Err");
        assert_eq!(error, EvaluationError::InvalidExpression)
    }

    #[test]
    fn operator_without_left_operand_should_return_err() {
        // * 2
        let infix = vec![operator('*'), number(2.0)];

        let error = evaluate_tokens(infix).expect_err("Should return Err");
        assert_eq!(error, EvaluationError::InvalidExpression)
    }

    #[test]
    fn empty_parentheses_should_return_err() {
        let infix = vec![Token::LeftParenthesis, Token::RightParenthesis];

        let error = evaluate_tokens(infix).expect_err("Should return Err");
        assert_eq!(error, EvaluationError::InvalidExpression)
    }

    #[test]
    fn no_tokens_should_return_err() {
        let error = evaluate_tokens(Vec::new()).expect_err("Should return Err");
        assert_eq!(error, EvaluationError::InvalidExpression)
    }

    #[test]
    fn division_by_zero_inside_parentheses_should_return_err() {
        // 1 / (2 - 2)
        let infix = vec![
            number(1.0),
            operator('/'),
            Token::LeftParenthesis,
            number(2.0),
            operator('-'),
            number(2.0),
            Token::RightParenthesis,
        ];

        let error = evaluate_tokens(infix).expect_err("Should return Err");
        assert_eq!(error, EvaluationError::DivisionByZero)
    }
}
