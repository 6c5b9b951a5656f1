//! Date handling for age-based rating
//!
//! This module provides:
//! - `Timezone`: the jurisdiction in which "today" is evaluated
//! - `Clock`: an injectable source of the current date
//! - `age_in_years`: calendar-aware age derivation

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper for rating jurisdictions
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the IANA name of this timezone
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the current calendar date in this timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Tokyo)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date range: birth date {birth} is after reference date {reference}")]
    InvalidDateRange {
        birth: NaiveDate,
        reference: NaiveDate,
    },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Source of the current date
///
/// Services take a clock instead of reading the system time directly so that
/// age-dependent behaviour can be pinned in tests.
pub trait Clock: Send + Sync {
    /// Returns today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, evaluated in a fixed timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.today()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Calculates the number of complete years between two dates
///
/// An anniversary that has not yet been reached in the reference year does
/// not count. A 29 February birthday reaches its anniversary on 1 March in
/// non-leap years.
///
/// # Arguments
///
/// * `birth_date` - Date of birth
/// * `reference` - Date the age is evaluated on
///
/// # Errors
///
/// Returns `TemporalError::InvalidDateRange` if `birth_date` is after `reference`
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use core_kernel::temporal::age_in_years;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2020, 6, 14).unwrap();
/// assert_eq!(age_in_years(birth, day_before).unwrap(), 29);
/// ```
pub fn age_in_years(birth_date: NaiveDate, reference: NaiveDate) -> Result<u32, TemporalError> {
    if birth_date > reference {
        return Err(TemporalError::InvalidDateRange {
            birth: birth_date,
            reference,
        });
    }

    let mut years = reference.year() - birth_date.year();
    if (reference.month(), reference.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }

    Ok(years as u32)
}
