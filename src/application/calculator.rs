//! Calculation service
//!
//! Orchestrates the domain logic: validate both raw inputs, parse them,
//! apply the operator, format the result into a labeled display line.

use tracing::debug;

use crate::application::error::ApplicationResult;
use crate::domain::{format_value, parse_number, DomainError, Operator};

/// Default prefix attached to every successful result line.
pub const DEFAULT_RESULT_LABEL: &str = "Result: ";

/// Service that turns two raw input strings and an operator into a
/// display-ready result line.
#[derive(Debug, Clone)]
pub struct CalculatorService {
    label: String,
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_LABEL)
    }
}

impl CalculatorService {
    /// Create a service with a custom result label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Validate both inputs, apply the operator, format the result.
    ///
    /// Both fields are checked for emptiness before either is parsed, so an
    /// empty first field is reported even when the second field is garbage.
    /// A successful outcome never carries a non-finite value: zero divisors
    /// are rejected before dividing and overflow-produced infinities are
    /// caught after the arithmetic.
    pub fn compute(&self, raw_a: &str, raw_b: &str, op: Operator) -> ApplicationResult<String> {
        if raw_a.trim().is_empty() || raw_b.trim().is_empty() {
            return Err(DomainError::EmptyInput.into());
        }

        let a = parse_number(raw_a)?;
        let b = parse_number(raw_b)?;

        let value = op.apply(a, b)?;
        debug!("{} {} {} = {}", a, op, b, value);

        if !value.is_finite() {
            return Err(DomainError::NonFiniteResult.into());
        }

        Ok(format!("{}{}", self.label, format_value(value)))
    }
}
