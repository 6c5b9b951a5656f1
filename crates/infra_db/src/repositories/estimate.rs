//! Estimate repository implementation
//!
//! This module provides database access for the product catalog, the age
//! adjustment table, and quote orders. It implements `EstimatePort` so the
//! domain service can run directly on PostgreSQL.
//!
//! # Tables
//!
//! - `insurance_type`: product catalog with base monthly fees
//! - `age_adjustment_rate`: inclusive age ranges and their multipliers
//! - `insurance_order` / `order_applicant`: submitted orders, written together

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{DomainPort, PortError};
use domain_estimate::{EstimatePort, InsuranceOrder, InsuranceType};

use crate::error::DatabaseError;

/// Repository for catalog, rate, and order data
#[derive(Debug, Clone)]
pub struct EstimateRepository {
    pool: PgPool,
}

impl EstimateRepository {
    /// Creates a new EstimateRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists the catalog ordered by product code
    pub async fn list_insurance_types(&self) -> Result<Vec<InsuranceTypeRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, InsuranceTypeRow>(
            r#"
            SELECT insurance_type, insurance_name, monthly_fee
            FROM insurance_type
            ORDER BY insurance_type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Retrieves one catalog entry
    ///
    /// # Returns
    ///
    /// The catalog row or NotFound error
    pub async fn get_insurance_type(
        &self,
        insurance_type: i32,
    ) -> Result<InsuranceTypeRow, DatabaseError> {
        sqlx::query_as::<_, InsuranceTypeRow>(
            r#"
            SELECT insurance_type, insurance_name, monthly_fee
            FROM insurance_type
            WHERE insurance_type = $1
            "#,
        )
        .bind(insurance_type)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("InsuranceType", insurance_type))
    }

    /// Retrieves the multiplier whose range contains the age
    pub async fn get_adjustment_rate(&self, age: u32) -> Result<f64, DatabaseError> {
        let age = i32::try_from(age)
            .map_err(|_| DatabaseError::QueryFailed(format!("age {} out of range", age)))?;

        let rate: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT adjustment_rate
            FROM age_adjustment_rate
            WHERE $1 BETWEEN min_age AND max_age
            ORDER BY min_age
            LIMIT 1
            "#,
        )
        .bind(age)
        .fetch_optional(&self.pool)
        .await?;

        rate.ok_or_else(|| DatabaseError::not_found("AgeAdjustmentRate", age))
    }

    /// Retrieves a stored order with its applicant
    pub async fn get_order(&self, order_id: Uuid) -> Result<OrderRow, DatabaseError> {
        sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                o.order_id,
                o.insurance_type,
                o.discovery_source,
                o.annual_fee,
                o.refund_amount,
                o.requested_at,
                a.kanji_name,
                a.kana_name,
                a.date_of_birth,
                a.email,
                a.phone_number
            FROM insurance_order o
            JOIN order_applicant a ON a.order_id = o.order_id
            WHERE o.order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("InsuranceOrder", order_id))
    }

    /// Writes an order and its applicant in one transaction
    ///
    /// Either both rows are committed or neither is.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn create_order(&self, order: &InsuranceOrder) -> Result<(), DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO insurance_order (
                order_id, insurance_type, discovery_source,
                annual_fee, refund_amount, requested_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*order.id.as_uuid())
        .bind(order.insurance_type)
        .bind(order.discovery_source_code())
        .bind(order.annual_fee)
        .bind(order.refund_amount)
        .bind(order.requested_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::DuplicateEntry(_) => {
                DatabaseError::duplicate("InsuranceOrder", "order_id", order.id)
            }
            other => other,
        })?;

        let applicant = &order.applicant;
        sqlx::query(
            r#"
            INSERT INTO order_applicant (
                order_id, kanji_name, kana_name, date_of_birth, email, phone_number
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*order.id.as_uuid())
        .bind(&applicant.kanji_name)
        .bind(&applicant.kana_name)
        .bind(applicant.date_of_birth)
        .bind(&applicant.email)
        .bind(&applicant.phone_number)
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        debug!("Order rows committed");
        Ok(())
    }
}

impl DomainPort for EstimateRepository {}

#[async_trait]
impl EstimatePort for EstimateRepository {
    async fn all_insurances(&self) -> Result<Vec<InsuranceType>, PortError> {
        let rows = self.list_insurance_types().await?;
        Ok(rows.into_iter().map(InsuranceType::from).collect())
    }

    async fn find_insurance_name(&self, insurance_type: i32) -> Result<String, PortError> {
        Ok(self.get_insurance_type(insurance_type).await?.insurance_name)
    }

    async fn find_monthly_fee(&self, insurance_type: i32) -> Result<i64, PortError> {
        Ok(self.get_insurance_type(insurance_type).await?.monthly_fee)
    }

    async fn find_adjustment_rate_by_age(&self, age: u32) -> Result<f64, PortError> {
        Ok(self.get_adjustment_rate(age).await?)
    }

    async fn insert_order(&self, order: &InsuranceOrder) -> Result<(), PortError> {
        Ok(self.create_order(order).await?)
    }
}

/// Database row for a catalog entry
#[derive(Debug, Clone, FromRow)]
pub struct InsuranceTypeRow {
    pub insurance_type: i32,
    pub insurance_name: String,
    pub monthly_fee: i64,
}

impl From<InsuranceTypeRow> for InsuranceType {
    fn from(row: InsuranceTypeRow) -> Self {
        InsuranceType::new(row.insurance_type, row.insurance_name)
    }
}

/// Database row for an order joined with its applicant
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub order_id: Uuid,
    pub insurance_type: i32,
    pub discovery_source: Option<i32>,
    pub annual_fee: i64,
    pub refund_amount: i64,
    pub requested_at: DateTime<Utc>,
    pub kanji_name: String,
    pub kana_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_row_to_domain() {
        let row = InsuranceTypeRow {
            insurance_type: 3,
            insurance_name: "がん保険".to_string(),
            monthly_fee: 2500,
        };

        let entry = InsuranceType::from(row);
        assert_eq!(entry.code, 3);
        assert_eq!(entry.name, "がん保険");
    }
}
