//! Report generation over the payslip repository, backed by a mock database.

use chrono::{FixedOffset, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, prelude::DateTimeWithTimeZone};
use uuid::Uuid;

use paysheet_core::period::PayPeriod;
use paysheet_core::reports::{
    CellValue, PayrollReportService, ReportError, ReportKind, ReportProjector, ReportSettings,
};
use paysheet_db::PayslipRepository;
use paysheet_db::entities::{bank_accounts, employees, payslip_lines, payslips};

const EMPLOYEE_ID: u128 = 0x0201;
const BANK_ID: u128 = 0x0101;
const PAYSLIP_ID: u128 = 0x0301;

fn timestamp() -> DateTimeWithTimeZone {
    FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 28, 9, 0, 0)
        .unwrap()
}

fn line(sequence: i32, code: &str, amount: Decimal) -> payslip_lines::Model {
    payslip_lines::Model {
        id: Uuid::new_v4(),
        payslip_id: Uuid::from_u128(PAYSLIP_ID),
        sequence,
        code: code.to_string(),
        name: code.to_string(),
        amount,
    }
}

/// Mock connection answering the four repository queries for March 2024.
fn march_database() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payslips::Model {
            id: Uuid::from_u128(PAYSLIP_ID),
            employee_id: Uuid::from_u128(EMPLOYEE_ID),
            number: Some("SLIP/2024/03/EMP-001".to_string()),
            date_from: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            gross_wage: dec!(150000),
            net_wage: dec!(108127.50),
            created_at: timestamp(),
        }]])
        .append_query_results([vec![employees::Model {
            id: Uuid::from_u128(EMPLOYEE_ID),
            name: "Jane Wanjiru Doe".to_string(),
            registration_number: Some("EMP-001".to_string()),
            identification_id: Some("20000000".to_string()),
            kra_pin: Some("a000000001p".to_string()),
            nssf_number: Some("NSSF-0001".to_string()),
            shif_number: Some("SHIF-0001".to_string()),
            work_phone: None,
            bank_account_id: Some(Uuid::from_u128(BANK_ID)),
            created_at: timestamp(),
            updated_at: timestamp(),
        }]])
        .append_query_results([vec![bank_accounts::Model {
            id: Uuid::from_u128(BANK_ID),
            account_number: "0100000000001".to_string(),
            bank_name: Some("Demo Bank".to_string()),
            bank_bic: Some("DEMOKENA".to_string()),
            created_at: timestamp(),
        }]])
        .append_query_results([vec![
            line(1, "NSSF_AMOUNT", dec!(2160)),
            line(2, "SHA", dec!(4125)),
            line(3, "AHL_AMOUNT", dec!(2250)),
            line(4, "AHL_AMOUNT_EMP", dec!(2250)),
            line(5, "PAYE", dec!(33337.50)),
        ]])
        .into_connection()
}

fn settings() -> ReportSettings {
    ReportSettings::default().with_classification("A000000001P", "Primary Employee")
}

#[tokio::test]
async fn test_repository_rows_project_into_reports() {
    let repo = PayslipRepository::new(march_database());
    let payslips = repo
        .find_within(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .await
        .unwrap();

    let settings = settings();
    let tables = ReportProjector::new(&settings).project(&payslips);

    let net_pay = &tables[&ReportKind::NetPay];
    assert_eq!(
        net_pay.rows[0],
        vec![
            CellValue::text("Jane Wanjiru Doe"),
            CellValue::text("Demo Bank"),
            CellValue::text("DEMOKENA"),
            CellValue::Number(dec!(108127.50)),
        ]
    );

    let shif = &tables[&ReportKind::Shif];
    assert_eq!(shif.rows.len(), 1);
    assert!(shif.rows[0].contains(&CellValue::Number(dec!(4125))));

    let paye = &tables[&ReportKind::Paye];
    assert_eq!(paye.rows.len(), 1);
    assert!(paye.rows[0].contains(&CellValue::text("Primary Employee")));
    assert!(paye.rows[0].contains(&CellValue::Number(dec!(33337.50))));
}

#[tokio::test]
async fn test_service_generates_bundle_from_repository() {
    let repo = PayslipRepository::new(march_database());
    let service = PayrollReportService::new(settings());

    let bundle = service
        .generate(&repo, PayPeriod::for_month(2024, 3).unwrap())
        .await
        .unwrap();

    assert_eq!(bundle.files.len(), ReportKind::ALL.len());
    assert!(bundle.files.iter().all(|file| file.content.starts_with(b"PK")));
    assert!(bundle.file("KRA_PIN_Report.xlsx").is_some());
}

#[tokio::test]
async fn test_database_failure_aborts_generation() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([sea_orm::DbErr::Custom("pool timed out".to_string())])
        .into_connection();
    let repo = PayslipRepository::new(db);
    let service = PayrollReportService::new(settings());

    let result = service
        .generate(&repo, PayPeriod::for_month(2024, 3).unwrap())
        .await;

    assert!(matches!(result, Err(ReportError::DataSourceUnavailable(_))));
}
