//! Report error types.

use paysheet_shared::AppError;
use thiserror::Error;

use super::render::RenderError;
use super::types::ReportKind;
use crate::payroll::RuleCodeError;
use crate::period::PeriodError;
use crate::source::SourceError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Month or year input is not selectable.
    #[error("Invalid period: {0}")]
    InvalidPeriod(#[from] PeriodError),

    /// Payroll data source failed.
    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(#[from] SourceError),

    /// Spreadsheet writer failed.
    #[error("Failed to serialize {report} report: {source}")]
    SerializationFailure {
        /// Report being rendered.
        report: ReportKind,
        /// Writer error.
        #[source]
        source: RenderError,
    },

    /// Report settings are inconsistent.
    #[error("Invalid report configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<RuleCodeError> for ReportError {
    fn from(error: RuleCodeError) -> Self {
        Self::InvalidConfiguration(error.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::InvalidPeriod(_) => Self::Validation(error.to_string()),
            ReportError::DataSourceUnavailable(_) => Self::DataSourceUnavailable(error.to_string()),
            ReportError::SerializationFailure { .. } => Self::Serialization(error.to_string()),
            ReportError::InvalidConfiguration(_) => Self::Configuration(error.to_string()),
        }
    }
}
