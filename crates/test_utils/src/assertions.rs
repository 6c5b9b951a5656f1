//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_estimate::{EstimateError, QuoteResult};

/// Asserts every field of a quote
///
/// # Panics
///
/// Panics with the full quote if any field differs
pub fn assert_quote(
    quote: &QuoteResult,
    annual_fee: i64,
    age_adjustment_rate: f64,
    age: u32,
    refund_amount: i64,
) {
    assert!(
        quote.annual_fee() == annual_fee
            && quote.age_adjustment_rate() == age_adjustment_rate
            && quote.age() == age
            && quote.refund_amount() == refund_amount,
        "Quote mismatch: actual={:?}, expected annual_fee={}, rate={}, age={}, refund={}",
        quote,
        annual_fee,
        age_adjustment_rate,
        age,
        refund_amount
    );
}

/// Asserts that a quote's amounts are non-negative and the refund does not
/// exceed the annual fee
pub fn assert_quote_amounts_consistent(quote: &QuoteResult) {
    assert!(
        quote.annual_fee() >= 0,
        "Annual fee should be non-negative: {:?}",
        quote
    );
    assert!(
        (0..=quote.annual_fee()).contains(&quote.refund_amount()),
        "Refund should lie within the annual fee: {:?}",
        quote
    );
}

/// Asserts that a result failed with `UnknownInsuranceType` for the given code
pub fn assert_unknown_insurance_type<T: std::fmt::Debug>(result: Result<T, EstimateError>, code: i32) {
    match result {
        Err(EstimateError::UnknownInsuranceType(actual)) => assert_eq!(
            actual, code,
            "UnknownInsuranceType carried the wrong code"
        ),
        other => panic!("Expected UnknownInsuranceType({}), got {:?}", code, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_estimate::{calculate_quote, refund_rate};

    #[test]
    fn test_assert_quote_passes_on_match() {
        let quote = calculate_quote(3, 2500, 1.0, 25).unwrap();
        assert_quote(&quote, 30000, 1.0, 25, 10500);
        assert_quote_amounts_consistent(&quote);
    }

    #[test]
    #[should_panic(expected = "Quote mismatch")]
    fn test_assert_quote_fails_on_mismatch() {
        let quote = calculate_quote(3, 2500, 1.0, 25).unwrap();
        assert_quote(&quote, 30001, 1.0, 25, 10500);
    }

    #[test]
    fn test_assert_unknown_insurance_type() {
        assert_unknown_insurance_type(refund_rate(9), 9);
    }
}
