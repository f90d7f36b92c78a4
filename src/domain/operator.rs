//! The four arithmetic operations

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Closed set of supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The conventional symbol for this operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// A zero divisor is rejected before dividing, so a successful division
    /// never yields an IEEE infinity from a zero denominator.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        let value = match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b == 0.0 {
                    return Err(DomainError::DivideByZero);
                }
                a / b
            }
        };
        Ok(value)
    }
}

impl FromStr for Operator {
    type Err = DomainError;

    /// Accepts the symbol or a word alias; anything else is an unknown
    /// operator. `x` is accepted for multiplication since `*` globs in
    /// most shells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "add" | "plus" => Ok(Operator::Add),
            "-" | "sub" | "subtract" | "minus" => Ok(Operator::Subtract),
            "*" | "x" | "mul" | "multiply" | "times" => Ok(Operator::Multiply),
            "/" | "div" | "divide" => Ok(Operator::Divide),
            other => Err(DomainError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
