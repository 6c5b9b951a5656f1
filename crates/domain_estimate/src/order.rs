//! Quote orders
//!
//! An order is the quote request a customer chose to submit, together with
//! their contact details. The domain only forwards it to storage; validating
//! the form it came from happens upstream.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CodeEnum, OrderId};

use crate::discovery::DiscoverySourceType;
use crate::insurance::InsuranceKind;
use crate::quote::QuoteResult;

/// Person requesting the quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Full name as written in kanji
    pub kanji_name: String,
    /// Full name in katakana reading
    pub kana_name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone_number: String,
}

/// A registered request for an insurance quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceOrder {
    /// Unique order identifier
    pub id: OrderId,
    /// Product code chosen by the applicant
    pub insurance_type: i32,
    /// The applicant
    pub applicant: Applicant,
    /// How the applicant heard about the product, if answered
    pub discovery_source: Option<DiscoverySourceType>,
    /// Annual premium quoted to the applicant
    pub annual_fee: i64,
    /// Refund quoted to the applicant
    pub refund_amount: i64,
    /// When the order was placed
    pub requested_at: DateTime<Utc>,
}

impl InsuranceOrder {
    /// Creates an order from the quote the applicant accepted
    pub fn new(
        insurance_type: i32,
        applicant: Applicant,
        quote: &QuoteResult,
        discovery_source: Option<DiscoverySourceType>,
    ) -> Self {
        Self {
            id: OrderId::new(),
            insurance_type,
            applicant,
            discovery_source,
            annual_fee: quote.annual_fee(),
            refund_amount: quote.refund_amount(),
            requested_at: Utc::now(),
        }
    }

    /// Returns the rating product, if the code is known
    pub fn insurance_kind(&self) -> Option<InsuranceKind> {
        InsuranceKind::from_code(self.insurance_type)
    }

    /// Returns the discovery source code as stored, if answered
    pub fn discovery_source_code(&self) -> Option<i32> {
        self.discovery_source.map(|s| s.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fee::calculate_quote;

    fn applicant() -> Applicant {
        Applicant {
            kanji_name: "山田 太郎".to_string(),
            kana_name: "ヤマダ タロウ".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
            email: "taro@example.com".to_string(),
            phone_number: "090-1234-5678".to_string(),
        }
    }

    #[test]
    fn test_order_carries_quote_amounts() {
        let quote = calculate_quote(2, 4000, 1.2, 34).unwrap();
        let order = InsuranceOrder::new(2, applicant(), &quote, Some(DiscoverySourceType::Sns));

        assert_eq!(order.annual_fee, quote.annual_fee());
        assert_eq!(order.refund_amount, quote.refund_amount());
        assert_eq!(order.insurance_kind(), Some(InsuranceKind::Death));
        assert_eq!(order.discovery_source_code(), Some(6));
    }

    #[test]
    fn test_orders_get_distinct_ids() {
        let quote = calculate_quote(1, 3000, 1.0, 30).unwrap();
        let a = InsuranceOrder::new(1, applicant(), &quote, None);
        let b = InsuranceOrder::new(1, applicant(), &quote, None);
        assert_ne!(a.id, b.id);
        assert_eq!(a.discovery_source_code(), None);
    }

    #[test]
    fn test_order_serializes_codes() {
        let quote = calculate_quote(3, 2500, 1.0, 25).unwrap();
        let order = InsuranceOrder::new(3, applicant(), &quote, Some(DiscoverySourceType::Sns));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["discovery_source"], 6);
        assert_eq!(json["annual_fee"], 30000);
        assert_eq!(json["applicant"]["date_of_birth"], "1990-04-01");
    }
}
