//! Tests for raw input parsing

use rstest::rstest;

use rscalc::domain::{parse_number, DomainError};

#[test]
fn given_empty_string_when_parsing_then_fails_empty() {
    assert_eq!(parse_number(""), Err(DomainError::EmptyInput));
}

#[test]
fn given_whitespace_only_when_parsing_then_fails_empty() {
    assert_eq!(parse_number("   "), Err(DomainError::EmptyInput));
    assert_eq!(parse_number("\t \n"), Err(DomainError::EmptyInput));
}

#[rstest]
#[case("42", 42.0)]
#[case(" 42 ", 42.0)]
#[case("0", 0.0)]
#[case("-0.5", -0.5)]
#[case("+7", 7.0)]
#[case("12,345.5", 12345.5)]
#[case("1,234,567.89", 1234567.89)]
#[case("1e3", 1000.0)]
#[case("2.5E-3", 0.0025)]
#[case(".5", 0.5)]
#[case("5.", 5.0)]
fn given_valid_literal_when_parsing_then_returns_value(#[case] raw: &str, #[case] expected: f64) {
    assert_eq!(parse_number(raw), Ok(expected));
}

#[rstest]
#[case("abc")]
#[case("12.34.56")]
#[case("1 2")]
#[case("--5")]
#[case("1,2,3a")]
fn given_garbage_when_parsing_then_fails_malformed(#[case] raw: &str) {
    assert!(matches!(
        parse_number(raw),
        Err(DomainError::MalformedNumber(_))
    ));
}

/// The emptiness check runs before comma stripping, so comma-only input is
/// malformed rather than empty.
#[test]
fn given_commas_only_when_parsing_then_fails_malformed_not_empty() {
    assert_eq!(
        parse_number(",,,"),
        Err(DomainError::MalformedNumber(",,,".to_string()))
    );
}

/// `f64::from_str` accepts infinity/NaN tokens and overflows `1e999`; none
/// of those are valid number literals here.
#[rstest]
#[case("inf")]
#[case("-inf")]
#[case("infinity")]
#[case("NaN")]
#[case("nan")]
#[case("1e999")]
#[case("-1e999")]
fn given_non_finite_literal_when_parsing_then_fails_malformed(#[case] raw: &str) {
    assert!(matches!(
        parse_number(raw),
        Err(DomainError::MalformedNumber(_))
    ));
}

#[test]
fn given_commas_around_digits_when_parsing_then_commas_are_ignored_anywhere() {
    // Separator positions are not validated, only removed
    assert_eq!(parse_number("1,0,0"), Ok(100.0));
}
