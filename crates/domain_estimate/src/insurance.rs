//! Insurance products
//!
//! `InsuranceKind` is the closed set of products the rating rules know about.
//! `InsuranceType` is a catalog entry as stored by the data source; its code is
//! expected to name an `InsuranceKind`, but the catalog is external data and
//! is never trusted to do so.

use serde::{Deserialize, Serialize};

use core_kernel::{define_code_enum, CodeEnum};

define_code_enum! {
    /// Insurance product known to the rating rules
    pub enum InsuranceKind {
        /// Medical insurance
        Medical = 1 => "医療保険",
        /// Death (life) insurance
        Death = 2 => "死亡保険",
        /// Cancer insurance
        Cancer = 3 => "がん保険",
    }
}

/// Catalog entry for an insurance product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceType {
    /// Product code
    pub code: i32,
    /// Display name
    pub name: String,
}

impl InsuranceType {
    pub fn new(code: i32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Returns the rating product for this entry, if the code is known
    pub fn kind(&self) -> Option<InsuranceKind> {
        InsuranceKind::from_code(self.code)
    }
}

impl From<InsuranceKind> for InsuranceType {
    fn from(kind: InsuranceKind) -> Self {
        Self::new(kind.code(), kind.label())
    }
}
