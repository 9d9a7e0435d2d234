//! Payroll report routes.
//!
//! `GET /payroll-reports` generates every report for a month and returns them
//! base64-encoded; `GET /payroll-reports/{file_name}` returns one workbook as
//! an attachment.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError};
use paysheet_core::reports::{ReportBundle, ReportKind};
use paysheet_shared::AppError;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the payroll report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payroll-reports", get(generate_reports))
        .route("/payroll-reports/{file_name}", get(download_report))
}

/// Query parameters selecting the payroll month.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    /// Month 1-12 (defaults to the current month).
    pub month: Option<u32>,
    /// Year (defaults to the current year).
    pub year: Option<i32>,
}

/// Response for a generated report bundle.
#[derive(Debug, Serialize)]
pub struct ReportBundleResponse {
    /// First day of the period.
    pub date_from: String,
    /// Last day of the period.
    pub date_to: String,
    /// Generated reports in canonical order.
    pub reports: Vec<ReportFileResponse>,
}

/// A generated report in a bundle response.
#[derive(Debug, Serialize)]
pub struct ReportFileResponse {
    /// Report identifier.
    pub report: &'static str,
    /// Worksheet title.
    pub title: String,
    /// Suggested file name.
    pub file_name: String,
    /// Workbook bytes, base64 encoded.
    pub content_base64: String,
}

impl From<ReportBundle> for ReportBundleResponse {
    fn from(bundle: ReportBundle) -> Self {
        Self {
            date_from: bundle.period.date_from().format("%Y-%m-%d").to_string(),
            date_to: bundle.period.date_to().format("%Y-%m-%d").to_string(),
            reports: bundle
                .files
                .into_iter()
                .map(|file| ReportFileResponse {
                    report: file.kind.name(),
                    title: file.title,
                    file_name: file.file_name,
                    content_base64: STANDARD.encode(file.content),
                })
                .collect(),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn generate_reports(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<ReportBundleResponse>, ApiError> {
    let bundle = state
        .service
        .generate_for_month(state.source.as_ref(), query.month, query.year, today())
        .await?;

    info!(
        period = %bundle.period,
        reports = bundle.files.len(),
        "Payroll reports generated"
    );
    Ok(Json(bundle.into()))
}

async fn download_report(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, ApiError> {
    let paye_rows = state.service.settings().paye_rows;
    let kind = ReportKind::ALL
        .into_iter()
        .find(|kind| kind.file_name(paye_rows) == file_name)
        .ok_or_else(|| AppError::NotFound(format!("Report {file_name}")))?;

    let bundle = state
        .service
        .generate_for_month(state.source.as_ref(), query.month, query.year, today())
        .await?;
    let file = bundle
        .report(kind)
        .ok_or_else(|| AppError::Internal(format!("Report {kind} missing from bundle")))?;

    info!(period = %bundle.period, report = %kind, "Payroll report downloaded");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.content.clone(),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use paysheet_core::payroll::{Employee, Payslip, PayslipLine};
    use paysheet_core::period::PayPeriod;
    use paysheet_core::reports::{PayrollReportService, ReportSettings};
    use paysheet_core::source::{InMemoryPayslipSource, PayslipSource, SourceError};
    use paysheet_shared::types::PayslipId;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FailingSource;

    #[async_trait]
    impl PayslipSource for FailingSource {
        async fn payslips_within(
            &self,
            _period: &PayPeriod,
        ) -> Result<Vec<Payslip>, SourceError> {
            Err(SourceError("connection refused".to_string()))
        }
    }

    fn march_payslip() -> Payslip {
        let mut employee = Employee::named("Jane Wanjiru Doe");
        employee.tax_pin = Some("A000000001P".to_string());
        Payslip {
            id: PayslipId::new(),
            employee,
            date_from: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            gross_wage: dec!(100000),
            net_wage: dec!(78000),
            lines: vec![PayslipLine::new("PAYE", dec!(20000))],
        }
    }

    fn app(source: Arc<dyn PayslipSource>) -> Router {
        let state = AppState {
            source,
            service: Arc::new(PayrollReportService::new(ReportSettings::default())),
        };
        Router::new().merge(routes()).with_state(state)
    }

    fn in_memory_app() -> Router {
        app(Arc::new(InMemoryPayslipSource::new(vec![march_payslip()])))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_every_report() {
        let response = get(in_memory_app(), "/payroll-reports?month=3&year=2024").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["date_from"], "2024-03-01");
        assert_eq!(json["date_to"], "2024-03-31");

        let reports = json["reports"].as_array().unwrap();
        let names: Vec<&str> = reports
            .iter()
            .map(|r| r["file_name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "Net_Pay_Report.xlsx",
                "NSSF_Report.xlsx",
                "SHIF_Report.xlsx",
                "KRA_PIN_Report.xlsx",
                "AHL_Report.xlsx",
            ]
        );
        assert_eq!(reports[0]["report"], "net_pay");
        assert_eq!(reports[0]["title"], "Payslip Report");

        let content = STANDARD
            .decode(reports[0]["content_base64"].as_str().unwrap())
            .unwrap();
        assert!(content.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_month() {
        let response = get(in_memory_app(), "/payroll-reports?month=13&year=2024").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_reports_unavailable_source() {
        let response = get(
            app(Arc::new(FailingSource)),
            "/payroll-reports?month=3&year=2024",
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = json_body(response).await;
        assert_eq!(json["error"], "DATA_SOURCE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_download_single_report() {
        let response = get(
            in_memory_app(),
            "/payroll-reports/SHIF_Report.xlsx?month=3&year=2024",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            XLSX_CONTENT_TYPE
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"SHIF_Report.xlsx\""
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_download_unknown_report_is_not_found() {
        let response = get(
            in_memory_app(),
            "/payroll-reports/PAYE_Report.xlsx?month=3&year=2024",
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["error"], "NOT_FOUND");
    }
}
