//! CLI command tests against the built-in rate tables

use chrono::NaiveDate;
use interface_cli::cli::{EligibleArgs, QuoteArgs};
use interface_cli::commands;
use interface_cli::output::{render_list, render_single};
use interface_cli::{CliError, EstimateConfig, OutputFormat};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn offline_service() -> domain_estimate::EstimateService {
    commands::build_service(&EstimateConfig::default(), true, Some(date(2025, 10, 1)))
        .await
        .expect("offline service")
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn test_types_lists_catalog() {
        let service = offline_service().await;
        let rows = commands::types(&service).await.unwrap();

        let codes: Vec<i32> = rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![1, 2, 3]);
        assert_eq!(rows[2].name, "がん保険");
    }

    #[test]
    fn test_sources_lists_all_thirteen() {
        let rows = commands::sources();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].code, 1);
        assert_eq!(rows[12].name, "その他");
    }

    #[test]
    fn test_sources_render_as_json() {
        let json = render_list(&commands::sources(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 13);
    }
}

mod quoting {
    use super::*;

    #[tokio::test]
    async fn test_quote_cancer_for_twenty_five_year_old() {
        let service = offline_service().await;
        let report = commands::quote(
            &service,
            &QuoteArgs {
                insurance_type: 3,
                birth: date(2000, 5, 15),
            },
        )
        .await
        .unwrap();

        assert_eq!(report.age, 25);
        assert_eq!(report.annual_fee, 30000);
        assert_eq!(report.refund_amount, 10500);

        let table = render_single(&report, OutputFormat::Table).unwrap();
        assert!(table.contains("annual fee"));
        assert!(table.contains("30000"));
    }

    #[tokio::test]
    async fn test_quote_refuses_ineligible_age() {
        let service = offline_service().await;
        let err = commands::quote(
            &service,
            &QuoteArgs {
                insurance_type: 1,
                birth: date(2005, 10, 2),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CliError::Ineligible { age: 19, min_age: 20, max_age: 100 }));
    }

    #[tokio::test]
    async fn test_quote_unknown_product() {
        let service = offline_service().await;
        let err = commands::quote(
            &service,
            &QuoteArgs {
                insurance_type: 8,
                birth: date(1990, 1, 1),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CliError::Estimate(ref e) if e.is_not_found()));
    }
}

mod eligibility {
    use super::*;

    #[tokio::test]
    async fn test_eligible_report() {
        let service = offline_service().await;

        let report = commands::eligible(&service, &EligibleArgs { birth: date(1925, 10, 1) }).unwrap();
        assert_eq!(report.age, 100);
        assert!(report.eligible);

        let report = commands::eligible(&service, &EligibleArgs { birth: date(1924, 10, 1) }).unwrap();
        assert_eq!(report.age, 101);
        assert!(!report.eligible);
    }

    #[tokio::test]
    async fn test_future_birth_date() {
        let service = offline_service().await;
        let err = commands::eligible(&service, &EligibleArgs { birth: date(2026, 1, 1) }).unwrap_err();
        assert!(matches!(err, CliError::BirthDateInFuture));
    }
}
