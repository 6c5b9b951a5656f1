//! Age eligibility for quoting

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::age_in_years;

/// Inclusive age band an applicant must fall into to be quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBand {
    /// Youngest eligible age
    pub min_age: u32,
    /// Oldest eligible age
    pub max_age: u32,
}

impl AgeBand {
    /// The band offered to new customers: 20 to 100 inclusive
    pub const STANDARD: AgeBand = AgeBand {
        min_age: 20,
        max_age: 100,
    };

    pub fn new(min_age: u32, max_age: u32) -> Self {
        Self { min_age, max_age }
    }

    /// Returns true if `age` lies within the band
    pub fn contains(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }

    /// Returns true if someone born on `birth_date` is eligible on `today`
    ///
    /// A birth date after `today` is never eligible; this predicate does not
    /// fail.
    pub fn is_eligible(&self, birth_date: NaiveDate, today: NaiveDate) -> bool {
        age_in_years(birth_date, today).map_or(false, |age| self.contains(age))
    }
}

impl Default for AgeBand {
    fn default() -> Self {
        Self::STANDARD
    }
}
