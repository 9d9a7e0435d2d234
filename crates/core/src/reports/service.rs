//! Report generation service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use super::error::ReportError;
use super::projector::ReportProjector;
use super::render::XlsxRenderer;
use super::settings::ReportSettings;
use super::types::{ReportBundle, ReportFile, ReportKind, ReportTable};
use crate::period::PayPeriod;
use crate::source::PayslipSource;

/// Generates the full set of payroll reports for a period.
#[derive(Debug, Clone)]
pub struct PayrollReportService {
    settings: ReportSettings,
    renderer: XlsxRenderer,
}

impl PayrollReportService {
    /// Creates a service with the given settings.
    #[must_use]
    pub fn new(settings: ReportSettings) -> Self {
        let renderer = XlsxRenderer::new(settings.company_name.clone());
        Self { settings, renderer }
    }

    /// Settings in use.
    #[must_use]
    pub const fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Resolves a month and year, defaulting either one to `today`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidPeriod` for a month outside 1-12 or a
    /// year outside the selectable range.
    pub fn resolve_period(
        &self,
        month: Option<u32>,
        year: Option<i32>,
        today: NaiveDate,
    ) -> Result<PayPeriod, ReportError> {
        Ok(self.settings.resolver().resolve(month, year, today)?)
    }

    /// Resolves the period and generates every report for it.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_period`] and [`Self::generate`].
    pub async fn generate_for_month<S>(
        &self,
        source: &S,
        month: Option<u32>,
        year: Option<i32>,
        today: NaiveDate,
    ) -> Result<ReportBundle, ReportError>
    where
        S: PayslipSource + ?Sized,
    {
        let period = self.resolve_period(month, year, today)?;
        self.generate(source, period).await
    }

    /// Queries the period's payslips and renders every report.
    ///
    /// All or nothing: the first failure aborts the run and no partial
    /// bundle is returned.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::DataSourceUnavailable` if the query fails and
    /// `ReportError::SerializationFailure` if a workbook cannot be written.
    #[instrument(skip(self, source), fields(period = %period))]
    pub async fn generate<S>(
        &self,
        source: &S,
        period: PayPeriod,
    ) -> Result<ReportBundle, ReportError>
    where
        S: PayslipSource + ?Sized,
    {
        let payslips = source.payslips_within(&period).await?;
        info!(payslips = payslips.len(), "Loaded payslips for period");

        let tables = ReportProjector::new(&self.settings).project(&payslips);
        let files = self.render_tables(&period, &tables)?;

        info!(reports = files.len(), "Generated payroll reports");
        Ok(ReportBundle { period, files })
    }

    /// Renders projected tables in `ReportKind::ALL` order.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::SerializationFailure` for the first table that
    /// cannot be written.
    pub fn render_tables(
        &self,
        period: &PayPeriod,
        tables: &BTreeMap<ReportKind, ReportTable>,
    ) -> Result<Vec<ReportFile>, ReportError> {
        tables
            .values()
            .map(|table| {
                let content = self
                    .renderer
                    .render(table, period)
                    .map_err(|source| ReportError::SerializationFailure {
                        report: table.kind,
                        source,
                    })?;
                debug!(
                    report = %table.kind,
                    rows = table.rows.len(),
                    bytes = content.len(),
                    "Rendered report"
                );
                Ok(ReportFile {
                    kind: table.kind,
                    title: table.title.clone(),
                    file_name: table.kind.file_name(self.settings.paye_rows).to_string(),
                    content,
                })
            })
            .collect()
    }
}
