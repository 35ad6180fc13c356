use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParenthesis | Token::RightParenthesis)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = EvaluationError;

    /// Classifies a single lexeme. A lone `-` is the subtraction operator,
    /// anything that is not an operator or parenthesis has to be a number.
    fn from_str(lexeme: &str) -> Result<Token, Self::Err> {
        let mut characters = lexeme.chars();
        if let (Some(symbol), None) = (characters.next(), characters.next()) {
            match symbol {
                '(' => return Ok(Token::LeftParenthesis),
                ')' => return Ok(Token::RightParenthesis),
                _ => {
                    if let Some(operator) = BinaryOperator::from_symbol(symbol) {
                        return Ok(operator.token());
                    }
                }
            }
        }
        lexeme
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvaluationError::InvalidToken(lexeme.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    lexeme = { "+", "-", "*", "/", "^", "(", ")", "7", "-2", "5.", ".5", "-0.25" },
    expected = {
    Token::Operator(BinaryOperator::Add),
    Token::Operator(BinaryOperator::Subtract),
    Token::Operator(BinaryOperator::Multiply),
    Token::Operator(BinaryOperator::Divide),
    Token::Operator(BinaryOperator::Exponentiate),
    Token::LeftParenthesis,
    Token::RightParenthesis,
    Token::Number(7.0),
    Token::Number(-2.0),
    Token::Number(5.0),
    Token::Number(0.5),
    Token::Number(-0.25),
    }
    )]
    fn lexeme_parses_into_token(lexeme: &str, expected: Token) {
        assert_eq!(lexeme.parse::<Token>().unwrap(), expected);
    }

    #[parameterized(lexeme = { "1.2.3", ".", "-.", "--", "" })]
    fn malformed_lexeme_is_invalid_token(lexeme: &str) {
        let error = lexeme.parse::<Token>().unwrap_err();
        assert_eq!(error, EvaluationError::InvalidToken(lexeme.to_string()));
    }

    #[test]
    fn token_displays_as_its_source_text() {
        assert_eq!(Token::Number(2.5).to_string(), "2.5");
        assert_eq!(Token::Number(-3.0).to_string(), "-3");
        assert_eq!(BinaryOperator::Exponentiate.token().to_string(), "^");
        assert_eq!(Token::LeftParenthesis.to_string(), "(");
    }
}
