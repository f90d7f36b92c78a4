//! Raw input normalization and number parsing

use tracing::debug;

use crate::domain::error::DomainError;

/// Parse a raw input string into a finite number.
///
/// Leading/trailing whitespace is ignored and thousands-separator commas are
/// stripped before the string is read as a base-10 float literal (optional
/// sign, optional fractional part, optional exponent).
///
/// The emptiness check runs on the trimmed string *before* commas are
/// removed: input consisting only of commas proceeds to the numeric parse
/// and fails as malformed, not empty.
///
/// `f64::from_str` also accepts `inf`/`NaN` tokens and overflows literals
/// like `1e999` to infinity; those are not number literals in this contract,
/// so any non-finite outcome is reported as malformed.
pub fn parse_number(raw: &str) -> Result<f64, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyInput);
    }

    let normalized = trimmed.replace(',', "");
    let value = normalized
        .parse::<f64>()
        .map_err(|_| DomainError::MalformedNumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(DomainError::MalformedNumber(trimmed.to_string()));
    }

    debug!("parsed {:?} -> {}", raw, value);
    Ok(value)
}
