//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use core_kernel::CodeEnum;
use domain_estimate::{DiscoverySourceType, InsuranceKind};
use proptest::prelude::*;

/// Strategy for known product codes
pub fn insurance_kind_strategy() -> impl Strategy<Value = InsuranceKind> {
    prop::sample::select(InsuranceKind::variants())
}

/// Strategy for product codes with no refund rate
pub fn unknown_insurance_code_strategy() -> impl Strategy<Value = i32> {
    any::<i32>().prop_filter("must not be a known product", |code| InsuranceKind::from_code(*code).is_none())
}

/// Strategy for discovery sources, including an unanswered one
pub fn discovery_source_strategy() -> impl Strategy<Value = Option<DiscoverySourceType>> {
    prop::option::of(prop::sample::select(DiscoverySourceType::variants()))
}

/// Strategy for base monthly fees in yen
pub fn monthly_fee_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000i64
}

/// Strategy for age adjustment multipliers
pub fn adjustment_rate_strategy() -> impl Strategy<Value = f64> {
    (1u32..50_000u32).prop_map(|n| f64::from(n) / 10_000.0)
}

/// Strategy for calendar dates between 1900-01-01 and 2099-12-31
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..73_048u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1)
            .and_then(|base| base.checked_add_days(Days::new(offset)))
            .unwrap_or(NaiveDate::MIN)
    })
}

/// Strategy for (birth, reference) pairs with birth on or before reference
pub fn ordered_date_pair_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), date_strategy()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_unknown_codes_are_unknown(code in unknown_insurance_code_strategy()) {
            prop_assert!(InsuranceKind::from_code(code).is_none());
        }

        #[test]
        fn test_ordered_pairs_are_ordered((birth, reference) in ordered_date_pair_strategy()) {
            prop_assert!(birth <= reference);
        }

        #[test]
        fn test_rates_are_positive(rate in adjustment_rate_strategy()) {
            prop_assert!(rate > 0.0);
        }
    }
}
