//! In-memory implementation of `EstimatePort`

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use core_kernel::{CodeEnum, DomainPort, PortError};

use crate::insurance::{InsuranceKind, InsuranceType};
use crate::order::InsuranceOrder;
use crate::ports::EstimatePort;

/// Premium multiplier for an inclusive age range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub min_age: u32,
    pub max_age: u32,
    pub rate: f64,
}

impl AgeBracket {
    pub const fn new(min_age: u32, max_age: u32, rate: f64) -> Self {
        Self { min_age, max_age, rate }
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Default age brackets, one per decade of the quoting band
pub const DEFAULT_AGE_BRACKETS: &[AgeBracket] = &[
    AgeBracket::new(20, 29, 1.0),
    AgeBracket::new(30, 39, 1.2),
    AgeBracket::new(40, 49, 1.5),
    AgeBracket::new(50, 59, 1.8),
    AgeBracket::new(60, 69, 2.2),
    AgeBracket::new(70, 79, 2.6),
    AgeBracket::new(80, 89, 3.0),
    AgeBracket::new(90, 100, 3.5),
];

/// Default monthly fee per product
pub const DEFAULT_MONTHLY_FEES: &[(InsuranceKind, i64)] = &[
    (InsuranceKind::Medical, 3000),
    (InsuranceKind::Death, 4000),
    (InsuranceKind::Cancer, 2500),
];

#[derive(Debug, Clone)]
struct CatalogEntry {
    name: String,
    monthly_fee: i64,
}

/// In-memory estimate data source
///
/// Catalog and rates are fixed at construction. Orders are appended under a
/// single write lock, so a failed insert leaves no trace.
#[derive(Debug, Default)]
pub struct InMemoryEstimatePort {
    catalog: BTreeMap<i32, CatalogEntry>,
    brackets: Vec<AgeBracket>,
    orders: RwLock<Vec<InsuranceOrder>>,
    fail_inserts: AtomicBool,
}

impl InMemoryEstimatePort {
    /// Creates an empty port with no products and no brackets
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a port with every known product and the default rate tables
    pub fn seeded() -> Self {
        let mut port = Self::new().with_age_brackets(DEFAULT_AGE_BRACKETS.to_vec());
        for (kind, fee) in DEFAULT_MONTHLY_FEES {
            port = port.with_product(kind.code(), kind.label(), *fee);
        }
        port
    }

    /// Adds or replaces a product
    pub fn with_product(mut self, code: i32, name: impl Into<String>, monthly_fee: i64) -> Self {
        self.catalog.insert(
            code,
            CatalogEntry {
                name: name.into(),
                monthly_fee,
            },
        );
        self
    }

    /// Replaces the age brackets
    pub fn with_age_brackets(mut self, brackets: Vec<AgeBracket>) -> Self {
        self.brackets = brackets;
        self
    }

    /// Makes every subsequent insert fail with a connection error
    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Returns a snapshot of the stored orders
    pub async fn orders(&self) -> Vec<InsuranceOrder> {
        self.orders.read().await.clone()
    }
}

impl DomainPort for InMemoryEstimatePort {}

#[async_trait]
impl EstimatePort for InMemoryEstimatePort {
    async fn all_insurances(&self) -> Result<Vec<InsuranceType>, PortError> {
        Ok(self
            .catalog
            .iter()
            .map(|(code, entry)| InsuranceType::new(*code, entry.name.clone()))
            .collect())
    }

    async fn find_insurance_name(&self, insurance_type: i32) -> Result<String, PortError> {
        self.catalog
            .get(&insurance_type)
            .map(|entry| entry.name.clone())
            .ok_or_else(|| PortError::not_found("InsuranceType", insurance_type))
    }

    async fn find_monthly_fee(&self, insurance_type: i32) -> Result<i64, PortError> {
        self.catalog
            .get(&insurance_type)
            .map(|entry| entry.monthly_fee)
            .ok_or_else(|| PortError::not_found("InsuranceType", insurance_type))
    }

    async fn find_adjustment_rate_by_age(&self, age: u32) -> Result<f64, PortError> {
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(age))
            .map(|bracket| bracket.rate)
            .ok_or_else(|| PortError::not_found("AgeBracket", age))
    }

    async fn insert_order(&self, order: &InsuranceOrder) -> Result<(), PortError> {
        let mut orders = self.orders.write().await;

        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(PortError::connection("in-memory store rejected the write"));
        }
        if orders.iter().any(|existing| existing.id == order.id) {
            return Err(PortError::Conflict {
                message: format!("Order {} already exists", order.id),
            });
        }

        orders.push(order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fee::calculate_quote;
    use crate::order::Applicant;
    use chrono::NaiveDate;

    fn order() -> InsuranceOrder {
        let quote = calculate_quote(1, 3000, 1.0, 30).unwrap();
        InsuranceOrder::new(
            1,
            Applicant {
                kanji_name: "佐藤 花子".to_string(),
                kana_name: "サトウ ハナコ".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1994, 1, 1).unwrap(),
                email: "hanako@example.com".to_string(),
                phone_number: "080-0000-0000".to_string(),
            },
            &quote,
            None,
        )
    }

    #[tokio::test]
    async fn test_seeded_catalog_is_ordered_by_code() {
        let port = InMemoryEstimatePort::seeded();
        let codes: Vec<i32> = port.all_insurances().await.unwrap().iter().map(|t| t.code).collect();
        assert_eq!(codes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let port = InMemoryEstimatePort::seeded();
        assert!(port.find_insurance_name(7).await.unwrap_err().is_not_found());
        assert!(port.find_monthly_fee(7).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_bracket_lookup() {
        let port = InMemoryEstimatePort::seeded();
        assert_eq!(port.find_adjustment_rate_by_age(20).await.unwrap(), 1.0);
        assert_eq!(port.find_adjustment_rate_by_age(39).await.unwrap(), 1.2);
        assert_eq!(port.find_adjustment_rate_by_age(100).await.unwrap(), 3.5);
        assert!(port.find_adjustment_rate_by_age(101).await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_order_is_rejected() {
        let port = InMemoryEstimatePort::seeded();
        let order = order();
        port.insert_order(&order).await.unwrap();

        let err = port.insert_order(&order).await.unwrap_err();
        assert!(matches!(err, PortError::Conflict { .. }));
        assert_eq!(port.orders().await.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_insert_stores_nothing() {
        let port = InMemoryEstimatePort::seeded();
        port.set_fail_inserts(true);

        assert!(port.insert_order(&order()).await.is_err());
        assert!(port.orders().await.is_empty());
    }
}
