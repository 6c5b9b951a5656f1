//! Subcommand implementations
//!
//! Each command takes an already wired [`EstimateService`] and returns a
//! serializable report; printing is left to the binary.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use core_kernel::{age_in_years, Clock, CodeEnum, FixedClock, SystemClock};
use domain_estimate::adapters::InMemoryEstimatePort;
use domain_estimate::{DiscoverySourceType, EstimatePort, EstimateService, InsuranceType};
use infra_db::{create_pool, EstimateRepository};

use crate::cli::{EligibleArgs, QuoteArgs};
use crate::config::EstimateConfig;
use crate::error::CliError;
use crate::output::TableRow;

/// Builds the service for a run
///
/// `offline` selects the built-in rate tables; otherwise a pool is opened on
/// the configured database. `today` pins the evaluation date.
pub async fn build_service(
    config: &EstimateConfig,
    offline: bool,
    today: Option<NaiveDate>,
) -> Result<EstimateService, CliError> {
    let port: Arc<dyn EstimatePort> = if offline {
        debug!("Using built-in rate tables");
        Arc::new(InMemoryEstimatePort::seeded())
    } else {
        let pool = create_pool(&config.database_config()).await?;
        Arc::new(EstimateRepository::new(pool))
    };

    let clock: Arc<dyn Clock> = match today {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock::new(config.timezone()?)),
    };

    Ok(EstimateService::new(port).with_clock(clock))
}

/// A coded value and its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRow {
    pub code: i32,
    pub name: String,
}

impl TableRow for CodeRow {
    fn cells(&self) -> Vec<(&'static str, String)> {
        vec![("code", self.code.to_string()), ("name", self.name.clone())]
    }
}

impl From<InsuranceType> for CodeRow {
    fn from(entry: InsuranceType) -> Self {
        Self {
            code: entry.code,
            name: entry.name,
        }
    }
}

/// Lists the product catalog
pub async fn types(service: &EstimateService) -> Result<Vec<CodeRow>, CliError> {
    let catalog = service.get_insurances().await?;
    Ok(catalog.into_iter().map(CodeRow::from).collect())
}

/// Lists the discovery sources
pub fn sources() -> Vec<CodeRow> {
    DiscoverySourceType::entries()
        .map(|(code, label)| CodeRow {
            code,
            name: label.to_string(),
        })
        .collect()
}

/// Outcome of an eligibility check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityReport {
    pub date_of_birth: NaiveDate,
    pub age: u32,
    pub eligible: bool,
}

impl TableRow for EligibilityReport {
    fn cells(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date of birth", self.date_of_birth.to_string()),
            ("age", self.age.to_string()),
            ("eligible", if self.eligible { "yes" } else { "no" }.to_string()),
        ]
    }
}

/// Checks whether an applicant can be quoted today
pub fn eligible(service: &EstimateService, args: &EligibleArgs) -> Result<EligibilityReport, CliError> {
    let age = age_in_years(args.birth, service.today()).map_err(|_| CliError::BirthDateInFuture)?;
    Ok(EligibilityReport {
        date_of_birth: args.birth,
        age,
        eligible: service.is_age_valid(args.birth),
    })
}

/// A priced quote
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteReport {
    pub insurance_type: i32,
    pub insurance_name: String,
    pub age: u32,
    pub age_adjustment_rate: f64,
    pub annual_fee: i64,
    pub refund_amount: i64,
}

impl TableRow for QuoteReport {
    fn cells(&self) -> Vec<(&'static str, String)> {
        vec![
            ("insurance", format!("{} ({})", self.insurance_name, self.insurance_type)),
            ("age", self.age.to_string()),
            ("age adjustment", self.age_adjustment_rate.to_string()),
            ("annual fee", self.annual_fee.to_string()),
            ("refund", self.refund_amount.to_string()),
        ]
    }
}

/// Quotes an applicant, refusing ages outside the service's band
pub async fn quote(service: &EstimateService, args: &QuoteArgs) -> Result<QuoteReport, CliError> {
    if !service.is_age_valid(args.birth) {
        let band = service.age_band();
        let age = age_in_years(args.birth, service.today()).map_err(|_| CliError::BirthDateInFuture)?;
        return Err(CliError::Ineligible {
            age,
            min_age: band.min_age,
            max_age: band.max_age,
        });
    }

    let insurance_name = service.find_insurance_name(args.insurance_type).await?;
    let quote = service
        .calculate_insurance_fee(args.insurance_type, args.birth)
        .await?;
    info!(insurance_type = args.insurance_type, "Quote issued");

    Ok(QuoteReport {
        insurance_type: args.insurance_type,
        insurance_name,
        age: quote.age(),
        age_adjustment_rate: quote.age_adjustment_rate(),
        annual_fee: quote.annual_fee(),
        refund_amount: quote.refund_amount(),
    })
}
