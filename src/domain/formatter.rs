//! Result display formatting
//!
//! Whole numbers render without a decimal point; very large or very small
//! magnitudes switch to scientific notation with two mantissa digits;
//! everything else renders fixed with up to six decimals, trailing zeros
//! stripped.

/// Integral results at or above this magnitude use scientific notation.
const SCI_INTEGRAL_THRESHOLD: f64 = 1_000_000_000.0;

/// Fractional results at or above this magnitude use scientific notation.
const SCI_FRACTIONAL_UPPER: f64 = 1_000_000.0;

/// Nonzero fractional results below this magnitude use scientific notation.
const SCI_FRACTIONAL_LOWER: f64 = 0.001;

/// Decimal digits for the fixed-point rendering before zero-stripping.
const FIXED_DECIMALS: usize = 6;

/// Format a finite value for display.
pub fn format_value(value: f64) -> String {
    if value == value.floor() && value.is_finite() {
        if value.abs() >= SCI_INTEGRAL_THRESHOLD {
            scientific(value)
        } else {
            format!("{:.0}", value)
        }
    } else if value.abs() >= SCI_FRACTIONAL_UPPER
        || (value.abs() < SCI_FRACTIONAL_LOWER && value != 0.0)
    {
        scientific(value)
    } else {
        let fixed = format!("{:.*}", FIXED_DECIMALS, value);
        // The fixed rendering always contains a decimal point, so stripping
        // trailing zeros cannot eat integer digits. The trailing-dot strip
        // handles the all-zeros-after-the-point case.
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Scientific notation in printf `%.2e` style: two mantissa decimals and a
/// signed, zero-padded exponent of at least two digits (`1.23e+09`).
fn scientific(value: f64) -> String {
    let rendered = format!("{:.2e}", value);
    // Rust renders the exponent bare ("1.00e10"); rewrite it as "+10"/"-04".
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{}e{:+03}", mantissa, exponent)
        }
        None => rendered,
    }
}
