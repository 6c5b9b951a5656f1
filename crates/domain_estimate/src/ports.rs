//! Estimate Domain Ports
//!
//! This module defines the port interface the estimate domain needs from its
//! data source: the product catalog, the rate tables, and order storage.
//!
//! # Architecture
//!
//! Adapters implementing `EstimatePort`:
//!
//! - **Internal Adapter**: PostgreSQL (`infra_db::EstimateRepository`)
//! - **In-Memory Adapter**: seeded tables for tests and offline use
//!   (`adapters::InMemoryEstimatePort`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_estimate::{EstimatePort, EstimateService};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn EstimatePort> = Arc::new(EstimateRepository::new(pool));
//! let service = EstimateService::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::insurance::InsuranceType;
use crate::order::InsuranceOrder;

/// Port for the estimate domain's data source
///
/// The rate queries are only ever called with product codes taken from the
/// catalog and ages inside the quoting band; adapters may report anything
/// else as `PortError::NotFound`.
#[async_trait]
pub trait EstimatePort: DomainPort {
    /// Returns every product in the catalog, ordered by code
    async fn all_insurances(&self) -> Result<Vec<InsuranceType>, PortError>;

    /// Returns the display name of a product
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if the catalog has no such code
    async fn find_insurance_name(&self, insurance_type: i32) -> Result<String, PortError>;

    /// Returns the base monthly premium of a product
    async fn find_monthly_fee(&self, insurance_type: i32) -> Result<i64, PortError>;

    /// Returns the premium multiplier for an age
    async fn find_adjustment_rate_by_age(&self, age: u32) -> Result<f64, PortError>;

    /// Stores an order
    ///
    /// Implementations write the whole order in one transaction: on error
    /// nothing of it is visible.
    async fn insert_order(&self, order: &InsuranceOrder) -> Result<(), PortError>;
}
