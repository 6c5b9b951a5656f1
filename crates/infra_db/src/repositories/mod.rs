//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types. Queries are checked at runtime so the crate builds without a
//! live database; the schema lives in the workspace `migrations/` directory.

pub mod estimate;

pub use estimate::{EstimateRepository, InsuranceTypeRow, OrderRow};
