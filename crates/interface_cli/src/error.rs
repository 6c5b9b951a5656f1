//! CLI error types

use thiserror::Error;

use core_kernel::TemporalError;
use domain_estimate::EstimateError;
use infra_db::DatabaseError;

/// Errors reported by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// The applicant cannot be quoted at their age
    #[error("Applicant aged {age} is outside the quotable range {min_age}..={max_age}")]
    Ineligible { age: u32, min_age: u32, max_age: u32 },

    /// The birth date lies in the future
    #[error("Birth date is after today")]
    BirthDateInFuture,

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Temporal(#[from] TemporalError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
