//! The outcome of a premium estimate

use serde::{Deserialize, Serialize};

/// Result of a premium calculation
///
/// Built once by the fee calculator and never changed afterwards; fields are
/// only reachable through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    annual_fee: i64,
    age_adjustment_rate: f64,
    age: u32,
    refund_amount: i64,
}

impl QuoteResult {
    pub(crate) fn new(annual_fee: i64, age_adjustment_rate: f64, age: u32, refund_amount: i64) -> Self {
        Self {
            annual_fee,
            age_adjustment_rate,
            age,
            refund_amount,
        }
    }

    /// Annual premium, fractional units truncated
    pub fn annual_fee(&self) -> i64 {
        self.annual_fee
    }

    /// Multiplier applied for the applicant's age
    pub fn age_adjustment_rate(&self) -> f64 {
        self.age_adjustment_rate
    }

    /// Applicant's age in whole years
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Refund returned to the customer, fractional units truncated
    pub fn refund_amount(&self) -> i64 {
        self.refund_amount
    }

    /// Annual premium net of the refund
    pub fn net_annual_fee(&self) -> i64 {
        self.annual_fee - self.refund_amount
    }
}
