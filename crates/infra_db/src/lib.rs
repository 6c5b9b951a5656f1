//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL side of the estimate system using SQLx:
//! pool construction, embedded migrations, and the repository that implements
//! the domain's `EstimatePort`.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, providing data access abstractions
//! that hide the database implementation details from the domain layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, EstimateRepository};
//!
//! let pool = create_pool(&DatabaseConfig::new("postgres://localhost/estimate")).await?;
//! run_migrations(&pool).await?;
//! let repo = EstimateRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::EstimateRepository;
