//! Premium Estimation Domain
//!
//! This crate implements the business rules for quoting an annual insurance
//! premium, following the same Hexagonal Architecture as the rest of the
//! workspace: the domain depends only on `core_kernel`, and storage is reached
//! through the `EstimatePort` trait.
//!
//! # Quote Flow
//!
//! ```text
//! (insurance type, birth date)
//!     -> eligibility gate (caller)      20 <= age <= 100
//!     -> age derivation                 core_kernel::age_in_years
//!     -> rate lookup                    EstimatePort
//!     -> fee calculation                fee::calculate_quote
//!     -> QuoteResult
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_estimate::{EstimateService, adapters::InMemoryEstimatePort};
//!
//! let service = EstimateService::new(Arc::new(InMemoryEstimatePort::seeded()));
//! if service.is_age_valid(birth_date) {
//!     let quote = service.calculate_insurance_fee(1, birth_date).await?;
//!     println!("annual fee: {}", quote.annual_fee());
//! }
//! ```

pub mod insurance;
pub mod discovery;
pub mod eligibility;
pub mod fee;
pub mod quote;
pub mod order;
pub mod ports;
pub mod adapters;
pub mod services;
pub mod error;

pub use insurance::{InsuranceKind, InsuranceType};
pub use discovery::DiscoverySourceType;
pub use eligibility::AgeBand;
pub use fee::{calculate_quote, refund_rate};
pub use quote::QuoteResult;
pub use order::{Applicant, InsuranceOrder};
pub use ports::EstimatePort;
pub use services::EstimateService;
pub use error::EstimateError;
