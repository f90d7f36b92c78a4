//! Tests for the calculation service

use rscalc::application::{ApplicationError, CalculatorService};
use rscalc::domain::{DomainError, Operator};
use rscalc::util::testing;

#[test]
fn given_two_integers_when_adding_then_returns_labeled_result() {
    testing::init_test_setup();
    let service = CalculatorService::default();
    let result = service.compute("2", "3", Operator::Add).unwrap();
    assert_eq!(result, "Result: 5");
}

#[test]
fn given_division_with_remainder_when_computing_then_formats_fraction() {
    let service = CalculatorService::default();
    assert_eq!(
        service.compute("10", "4", Operator::Divide).unwrap(),
        "Result: 2.5"
    );
}

#[test]
fn given_repeating_quotient_when_computing_then_limits_decimals() {
    let service = CalculatorService::default();
    assert_eq!(
        service.compute("1", "3", Operator::Divide).unwrap(),
        "Result: 0.333333"
    );
}

#[test]
fn given_comma_separated_inputs_when_computing_then_parses_them() {
    let service = CalculatorService::default();
    assert_eq!(
        service.compute("1,000", "2,000", Operator::Add).unwrap(),
        "Result: 3000"
    );
}

#[test]
fn given_binary_noise_sum_when_computing_then_displays_clean_fraction() {
    let service = CalculatorService::default();
    assert_eq!(
        service.compute("0.1", "0.2", Operator::Add).unwrap(),
        "Result: 0.3"
    );
}

#[test]
fn given_negative_result_when_computing_then_keeps_sign() {
    let service = CalculatorService::default();
    assert_eq!(
        service.compute("2", "3", Operator::Subtract).unwrap(),
        "Result: -1"
    );
}

#[test]
fn given_zero_divisor_when_dividing_then_fails_divide_by_zero() {
    let service = CalculatorService::default();
    let err = service.compute("6", "0", Operator::Divide).unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::DivideByZero)
    ));
}

#[test]
fn given_empty_first_input_when_computing_then_fails_empty() {
    let service = CalculatorService::default();
    let err = service.compute("", "3", Operator::Add).unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::EmptyInput)
    ));
}

#[test]
fn given_blank_second_input_when_computing_then_fails_empty() {
    let service = CalculatorService::default();
    let err = service.compute("3", "   ", Operator::Add).unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::EmptyInput)
    ));
}

/// Both fields are checked for emptiness before either is parsed.
#[test]
fn given_empty_first_and_garbage_second_when_computing_then_reports_empty() {
    let service = CalculatorService::default();
    let err = service.compute("", "abc", Operator::Add).unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::EmptyInput)
    ));
}

#[test]
fn given_garbage_input_when_computing_then_fails_invalid_number() {
    let service = CalculatorService::default();
    let err = service.compute("abc", "3", Operator::Add).unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::MalformedNumber(_))
    ));
}

/// Overflow can produce an infinity even though zero divisors are rejected.
#[test]
fn given_overflowing_product_when_computing_then_fails_non_finite() {
    let service = CalculatorService::default();
    let err = service
        .compute("1e308", "1e308", Operator::Multiply)
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::NonFiniteResult)
    ));
}

#[test]
fn given_custom_label_when_computing_then_prefixes_it() {
    let service = CalculatorService::new("=> ");
    assert_eq!(service.compute("2", "2", Operator::Add).unwrap(), "=> 4");
}

#[test]
fn given_huge_product_when_computing_then_uses_scientific_notation() {
    let service = CalculatorService::default();
    assert_eq!(
        service.compute("1e5", "1e5", Operator::Multiply).unwrap(),
        "Result: 1.00e+10"
    );
}
