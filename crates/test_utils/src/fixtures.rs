//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the estimate domain. These fixtures are
//! consistent and predictable so expected amounts can be written by hand.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::FixedClock;
use domain_estimate::adapters::InMemoryEstimatePort;
use domain_estimate::{Applicant, EstimateService};

/// Fixture for dates used across tests
pub struct DateFixtures;

impl DateFixtures {
    /// Fixed "today" used by service fixtures (Oct 1, 2025)
    pub fn today() -> NaiveDate {
        Self::ymd(2025, 10, 1)
    }

    /// Birth date of an applicant who turned 30 on `today`
    pub fn thirty_today() -> NaiveDate {
        Self::ymd(1995, 10, 1)
    }

    /// Birth date one day short of the minimum age on `today`
    pub fn just_under_twenty() -> NaiveDate {
        Self::ymd(2005, 10, 2)
    }

    /// Birth date of an applicant exactly at the minimum age on `today`
    pub fn exactly_twenty() -> NaiveDate {
        Self::ymd(2005, 10, 1)
    }

    /// Birth date of an applicant at the maximum age on `today`
    pub fn exactly_hundred() -> NaiveDate {
        Self::ymd(1925, 10, 1)
    }

    /// Birth date of an applicant past the maximum age on `today`
    pub fn hundred_and_one() -> NaiveDate {
        Self::ymd(1924, 10, 1)
    }

    /// Builds a date, panicking on an invalid calendar day
    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }
}

/// Fixture for applicants
pub struct ApplicantFixtures;

impl ApplicantFixtures {
    /// A standard applicant, 30 years old on `DateFixtures::today`
    pub fn standard() -> Applicant {
        Applicant {
            kanji_name: "山田 太郎".to_string(),
            kana_name: "ヤマダ タロウ".to_string(),
            date_of_birth: DateFixtures::thirty_today(),
            email: "taro.yamada@example.com".to_string(),
            phone_number: "090-1234-5678".to_string(),
        }
    }

    /// An applicant born on the given date
    pub fn born_on(date_of_birth: NaiveDate) -> Applicant {
        Applicant {
            date_of_birth,
            ..Self::standard()
        }
    }
}

/// Fixture for services wired to in-memory data
pub struct ServiceFixtures;

impl ServiceFixtures {
    /// Seeded in-memory port, shared so tests can inspect stored orders
    pub fn seeded_port() -> Arc<InMemoryEstimatePort> {
        Arc::new(InMemoryEstimatePort::seeded())
    }

    /// Service over the given port with the clock fixed at `DateFixtures::today`
    pub fn service(port: Arc<InMemoryEstimatePort>) -> EstimateService {
        EstimateService::new(port).with_clock(Arc::new(FixedClock(DateFixtures::today())))
    }

    /// Service over a fresh seeded port
    pub fn seeded_service() -> EstimateService {
        Self::service(Self::seeded_port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::age_in_years;

    #[test]
    fn test_date_fixtures_ages() {
        let today = DateFixtures::today();
        assert_eq!(age_in_years(DateFixtures::thirty_today(), today).unwrap(), 30);
        assert_eq!(age_in_years(DateFixtures::just_under_twenty(), today).unwrap(), 19);
        assert_eq!(age_in_years(DateFixtures::exactly_twenty(), today).unwrap(), 20);
        assert_eq!(age_in_years(DateFixtures::exactly_hundred(), today).unwrap(), 100);
        assert_eq!(age_in_years(DateFixtures::hundred_and_one(), today).unwrap(), 101);
    }

    #[test]
    fn test_born_on_keeps_contact_details() {
        let applicant = ApplicantFixtures::born_on(DateFixtures::exactly_twenty());
        assert_eq!(applicant.date_of_birth, DateFixtures::exactly_twenty());
        assert_eq!(applicant.email, ApplicantFixtures::standard().email);
    }
}
