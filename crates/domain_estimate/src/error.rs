//! Estimate domain errors
//!
//! This module defines all error types that can occur within the
//! premium estimation domain.

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the estimate domain
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Birth date lies after the date the age is evaluated on
    #[error("Invalid date range: birth date {birth} is after {reference}")]
    InvalidDateRange {
        birth: NaiveDate,
        reference: NaiveDate,
    },

    /// No refund rate is defined for the insurance type
    #[error("Unknown insurance type: {0}")]
    UnknownInsuranceType(i32),

    /// A catalog lookup found nothing
    #[error("{entity} not found: {key}")]
    NotFound {
        entity: String,
        key: String,
    },

    /// The storage collaborator failed
    #[error("Storage failure: {0}")]
    Storage(#[from] PortError),
}

impl EstimateError {
    /// Creates a not found error
    pub fn not_found(entity: impl Into<String>, key: impl std::fmt::Display) -> Self {
        EstimateError::NotFound {
            entity: entity.into(),
            key: key.to_string(),
        }
    }

    /// Returns true if the caller asked for something that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, EstimateError::NotFound { .. })
    }
}
