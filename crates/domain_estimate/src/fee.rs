//! Premium and refund calculation
//!
//! The annual premium is the monthly fee annualised and scaled by the age
//! adjustment rate. A fixed share of it is refunded to the customer depending
//! on the product.
//!
//! Both amounts are truncated toward zero. The refund is taken from the
//! annual premium *before* truncation, so it is not always the refund rate
//! applied to the reported annual fee.

use crate::error::EstimateError;
use crate::insurance::InsuranceKind;
use crate::quote::QuoteResult;
use core_kernel::CodeEnum;

/// Refund rate per product, last year's actuals
const REFUND_RATES: &[(InsuranceKind, f64)] = &[
    (InsuranceKind::Medical, 0.20),
    (InsuranceKind::Death, 0.15),
    (InsuranceKind::Cancer, 0.35),
];

/// Months in a premium year
const MONTHS_PER_YEAR: i64 = 12;

/// Looks up the fixed refund rate for an insurance type code
///
/// # Errors
///
/// Returns `EstimateError::UnknownInsuranceType` for codes without a rate.
pub fn refund_rate(insurance_type: i32) -> Result<f64, EstimateError> {
    InsuranceKind::from_code(insurance_type)
        .and_then(|kind| {
            REFUND_RATES
                .iter()
                .find(|(k, _)| *k == kind)
                .map(|(_, rate)| *rate)
        })
        .ok_or(EstimateError::UnknownInsuranceType(insurance_type))
}

/// Calculates the annual premium and refund for one applicant
///
/// # Arguments
///
/// * `insurance_type` - Product code, selects the refund rate
/// * `monthly_fee` - Base monthly premium for the product
/// * `age_adjustment_rate` - Multiplier for the applicant's age bracket
/// * `age` - Applicant's age, carried into the result
///
/// # Errors
///
/// Returns `EstimateError::UnknownInsuranceType` if the product has no refund rate
///
/// # Example
///
/// ```rust
/// use domain_estimate::calculate_quote;
///
/// let quote = calculate_quote(1, 3000, 1.0, 30).unwrap();
/// assert_eq!(quote.annual_fee(), 36000);
/// assert_eq!(quote.refund_amount(), 7200);
/// ```
pub fn calculate_quote(
    insurance_type: i32,
    monthly_fee: i64,
    age_adjustment_rate: f64,
    age: u32,
) -> Result<QuoteResult, EstimateError> {
    let annual_fee_before_truncation = (monthly_fee * MONTHS_PER_YEAR) as f64 * age_adjustment_rate;
    let annual_fee = annual_fee_before_truncation.trunc() as i64;

    let refund = annual_fee_before_truncation * refund_rate(insurance_type)?;
    let refund_amount = refund.trunc() as i64;

    Ok(QuoteResult::new(annual_fee, age_adjustment_rate, age, refund_amount))
}
