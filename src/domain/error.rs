//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the calculator's input rules.
/// These are independent of CLI and configuration concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("please enter a number")]
    EmptyInput,

    #[error("invalid number format: {0:?}")]
    MalformedNumber(String),

    #[error("cannot divide by zero")]
    DivideByZero,

    #[error("invalid operator: {0:?}")]
    UnknownOperator(String),

    #[error("math error: result is not a finite number")]
    NonFiniteResult,
}
