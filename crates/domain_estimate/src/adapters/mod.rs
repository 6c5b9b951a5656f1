//! Adapters for the Estimate Domain
//!
//! The PostgreSQL adapter lives in `infra_db`; this module holds the adapter
//! that needs no infrastructure.
//!
//! # Available Adapters
//!
//! - **InMemoryEstimatePort**: seeded catalog and rate tables kept in memory,
//!   used by tests and by the CLI's offline mode

pub mod in_memory;

pub use in_memory::{AgeBracket, InMemoryEstimatePort};
