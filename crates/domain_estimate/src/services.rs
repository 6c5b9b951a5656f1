//! Estimate domain services
//!
//! `EstimateService` composes the catalog, the rate tables, the age rules and
//! the fee calculator into the operations callers use.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use core_kernel::{age_in_years, Clock, PortError, SystemClock};

use crate::eligibility::AgeBand;
use crate::error::EstimateError;
use crate::fee::calculate_quote;
use crate::insurance::InsuranceType;
use crate::order::InsuranceOrder;
use crate::ports::EstimatePort;
use crate::quote::QuoteResult;

/// Service for quoting premiums and registering quote orders
///
/// Holds no mutable state of its own; a single instance can be shared
/// between concurrent callers.
#[derive(Clone)]
pub struct EstimateService {
    port: Arc<dyn EstimatePort>,
    clock: Arc<dyn Clock>,
    age_band: AgeBand,
}

impl EstimateService {
    /// Creates a service over the given data source, using the system clock
    /// in the default jurisdiction
    pub fn new(port: Arc<dyn EstimatePort>) -> Self {
        Self {
            port,
            clock: Arc::new(SystemClock::default()),
            age_band: AgeBand::STANDARD,
        }
    }

    /// Replaces the clock used to determine today's date
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the eligible age band
    pub fn with_age_band(mut self, age_band: AgeBand) -> Self {
        self.age_band = age_band;
        self
    }

    /// Returns the eligible age band
    pub fn age_band(&self) -> AgeBand {
        self.age_band
    }

    /// Returns today's date according to the service clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Returns every product in the catalog
    pub async fn get_insurances(&self) -> Result<Vec<InsuranceType>, EstimateError> {
        Ok(self.port.all_insurances().await?)
    }

    /// Returns the display name of a product
    ///
    /// # Errors
    ///
    /// `EstimateError::NotFound` if the catalog has no such product; any other
    /// storage failure is passed through as `EstimateError::Storage`.
    pub async fn find_insurance_name(&self, insurance_type: i32) -> Result<String, EstimateError> {
        self.port
            .find_insurance_name(insurance_type)
            .await
            .map_err(|e| match e {
                PortError::NotFound { .. } => {
                    EstimateError::not_found("InsuranceType", insurance_type)
                }
                other => EstimateError::Storage(other),
            })
    }

    /// Quotes the annual premium for a product and date of birth
    ///
    /// Eligibility is not checked here; callers gate on [`Self::is_age_valid`]
    /// first.
    ///
    /// # Errors
    ///
    /// - `EstimateError::InvalidDateRange` if the birth date is in the future
    /// - `EstimateError::UnknownInsuranceType` if the product has no refund rate
    /// - `EstimateError::Storage` if a rate lookup fails
    #[instrument(skip(self), fields(age))]
    pub async fn calculate_insurance_fee(
        &self,
        insurance_type: i32,
        date_of_birth: NaiveDate,
    ) -> Result<QuoteResult, EstimateError> {
        let monthly_fee = self.port.find_monthly_fee(insurance_type).await?;

        let today = self.clock.today();
        let age = age_in_years(date_of_birth, today).map_err(|_| EstimateError::InvalidDateRange {
            birth: date_of_birth,
            reference: today,
        })?;
        tracing::Span::current().record("age", age);

        let adjustment_rate = self.port.find_adjustment_rate_by_age(age).await?;
        debug!(monthly_fee, adjustment_rate, "Resolved rating inputs");

        let quote = calculate_quote(insurance_type, monthly_fee, adjustment_rate, age)?;
        info!(
            annual_fee = quote.annual_fee(),
            refund_amount = quote.refund_amount(),
            "Quote calculated"
        );
        Ok(quote)
    }

    /// Returns true if the applicant's age today lies within the age band
    pub fn is_age_valid(&self, date_of_birth: NaiveDate) -> bool {
        self.age_band.is_eligible(date_of_birth, self.clock.today())
    }

    /// Stores an order
    ///
    /// The data source writes the order atomically: either it is recorded in
    /// full or an error is returned and nothing is stored. Failures are not
    /// retried.
    #[instrument(
        skip(self, order),
        fields(order_id = %order.id, insurance_type = order.insurance_type)
    )]
    pub async fn register_order(&self, order: &InsuranceOrder) -> Result<(), EstimateError> {
        match self.port.insert_order(order).await {
            Ok(()) => {
                info!("Order registered");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Order registration failed");
                Err(EstimateError::Storage(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEstimatePort;
    use core_kernel::FixedClock;

    fn service_on(today: NaiveDate) -> EstimateService {
        EstimateService::new(Arc::new(InMemoryEstimatePort::seeded()))
            .with_clock(Arc::new(FixedClock(today)))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_medical_quote_for_thirty_year_old() {
        let service = service_on(date(2024, 6, 1));

        let quote = service.calculate_insurance_fee(1, date(1994, 5, 31)).await.unwrap();

        assert_eq!(quote.age(), 30);
        assert_eq!(quote.age_adjustment_rate(), 1.2);
        // 3000 * 12 * 1.2 = 43200, refund 20%
        assert_eq!(quote.annual_fee(), 43200);
        assert_eq!(quote.refund_amount(), 8640);
    }

    #[tokio::test]
    async fn test_find_insurance_name_not_found() {
        let service = service_on(date(2024, 6, 1));
        let err = service.find_insurance_name(42).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_future_birth_date_fails() {
        let service = service_on(date(2024, 6, 1));
        let err = service.calculate_insurance_fee(1, date(2025, 1, 1)).await.unwrap_err();
        match err {
            EstimateError::InvalidDateRange { birth, reference } => {
                assert_eq!(birth, date(2025, 1, 1));
                assert_eq!(reference, date(2024, 6, 1));
            }
            other => panic!("expected invalid date range, got {:?}", other),
        }
    }

    #[test]
    fn test_age_validity_uses_clock() {
        let service = service_on(date(2024, 6, 1));
        assert!(service.is_age_valid(date(2004, 6, 1)));
        assert!(!service.is_age_valid(date(2004, 6, 2)));
    }
}
