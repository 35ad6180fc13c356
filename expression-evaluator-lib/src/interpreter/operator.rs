use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '^' => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub(crate) fn precedence_lt(&self, other: &Self) -> bool {
        self.precedence().lt(&other.precedence())
    }

    pub(crate) fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }

    /// Whether an `other` operator already waiting on the operator stack
    /// has to be applied before this one can be pushed.
    pub(crate) fn yields_to(&self, other: &Self) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence_le(other),
            Associativity::Right => self.precedence_lt(other),
        }
    }

    /// Applies the operator to its operands, `a` being the left-hand side.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_evaluator::interpreter::operator::BinaryOperator;
    /// # use expression_evaluator::interpreter::error::EvaluationError;
    ///
    /// assert_eq!(BinaryOperator::Exponentiate.apply(2.0, 0.5)?, 2f64.sqrt());
    /// assert!(BinaryOperator::Divide.apply(1.0, 0.0).is_err());
    /// # Ok::<(), EvaluationError>(())
    /// ```
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, EvaluationError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide if b == 0.0 => Err(EvaluationError::DivisionByZero),
            BinaryOperator::Divide => Ok(a / b),
            BinaryOperator::Exponentiate => Ok(a.powf(b)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
