//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::OrderId;
use domain_estimate::{Applicant, DiscoverySourceType, InsuranceOrder};

use crate::fixtures::ApplicantFixtures;

/// Builder for constructing test orders
pub struct InsuranceOrderBuilder {
    id: OrderId,
    insurance_type: i32,
    applicant: Applicant,
    discovery_source: Option<DiscoverySourceType>,
    annual_fee: i64,
    refund_amount: i64,
    requested_at: DateTime<Utc>,
}

impl Default for InsuranceOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InsuranceOrderBuilder {
    /// Creates a new builder for a medical order quoted at age 30
    pub fn new() -> Self {
        Self {
            id: OrderId::new(),
            insurance_type: 1,
            applicant: ApplicantFixtures::standard(),
            discovery_source: Some(DiscoverySourceType::InternetSearch),
            annual_fee: 43200,
            refund_amount: 8640,
            requested_at: Utc
                .with_ymd_and_hms(2025, 10, 1, 9, 0, 0)
                .single()
                .expect("valid fixture timestamp"),
        }
    }

    /// Sets the order ID
    pub fn with_id(mut self, id: OrderId) -> Self {
        self.id = id;
        self
    }

    /// Sets the product code
    pub fn with_insurance_type(mut self, insurance_type: i32) -> Self {
        self.insurance_type = insurance_type;
        self
    }

    /// Sets the applicant
    pub fn with_applicant(mut self, applicant: Applicant) -> Self {
        self.applicant = applicant;
        self
    }

    /// Sets the discovery source
    pub fn with_discovery_source(mut self, source: Option<DiscoverySourceType>) -> Self {
        self.discovery_source = source;
        self
    }

    /// Sets the quoted amounts
    pub fn with_amounts(mut self, annual_fee: i64, refund_amount: i64) -> Self {
        self.annual_fee = annual_fee;
        self.refund_amount = refund_amount;
        self
    }

    /// Builds the order
    pub fn build(self) -> InsuranceOrder {
        InsuranceOrder {
            id: self.id,
            insurance_type: self.insurance_type,
            applicant: self.applicant,
            discovery_source: self.discovery_source,
            annual_fee: self.annual_fee,
            refund_amount: self.refund_amount,
            requested_at: self.requested_at,
        }
    }
}
