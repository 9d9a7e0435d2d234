//! Report data types.

use paysheet_shared::PayeRows;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::period::PayPeriod;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text, possibly empty when the source field is unset.
    Text(String),
    /// Numeric amount.
    Number(Decimal),
    /// Positional placeholder with no value.
    Empty,
}

impl CellValue {
    /// Creates a text cell.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a text cell from an optional field, empty when unset.
    #[must_use]
    pub fn optional_text(value: Option<&str>) -> Self {
        Self::Text(value.unwrap_or_default().to_string())
    }

    /// Text content, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric content, if this is a number cell.
    #[must_use]
    pub const fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

/// The five payroll reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Net pay per employee with bank details.
    NetPay,
    /// Social security fund return.
    Nssf,
    /// Social health insurance fund return.
    Shif,
    /// Tax authority employee details.
    Paye,
    /// Affordable housing levy return.
    Ahl,
}

impl ReportKind {
    /// Every report, in output order.
    pub const ALL: [Self; 5] = [Self::NetPay, Self::Nssf, Self::Shif, Self::Paye, Self::Ahl];

    /// Stable identifier used in API responses.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NetPay => "net_pay",
            Self::Nssf => "nssf",
            Self::Shif => "shif",
            Self::Paye => "paye",
            Self::Ahl => "ahl",
        }
    }

    /// Worksheet title.
    #[must_use]
    pub const fn title(self, paye_rows: PayeRows) -> &'static str {
        match (self, paye_rows) {
            (Self::NetPay, _) => "Payslip Report",
            (Self::Nssf, _) => "NSSF Report",
            (Self::Shif, _) => "SHIF Report",
            (Self::Paye, PayeRows::MappedPins) => "Filtered KRA PIN Report",
            (Self::Paye, PayeRows::AllPayslips) => "PAYE Report",
            (Self::Ahl, _) => "AHL Report",
        }
    }

    /// Download file name.
    #[must_use]
    pub const fn file_name(self, paye_rows: PayeRows) -> &'static str {
        match (self, paye_rows) {
            (Self::NetPay, _) => "Net_Pay_Report.xlsx",
            (Self::Nssf, _) => "NSSF_Report.xlsx",
            (Self::Shif, _) => "SHIF_Report.xlsx",
            (Self::Paye, PayeRows::MappedPins) => "KRA_PIN_Report.xlsx",
            (Self::Paye, PayeRows::AllPayslips) => "PAYE_Report.xlsx",
            (Self::Ahl, _) => "AHL_Report.xlsx",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A projected report: headers plus one row per included payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    /// Report kind.
    pub kind: ReportKind,
    /// Worksheet title.
    pub title: String,
    /// Column headers.
    pub headers: Vec<String>,
    /// Data rows; every row has `headers.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

/// A rendered report ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    /// Report kind.
    pub kind: ReportKind,
    /// Worksheet title.
    pub title: String,
    /// Download file name.
    pub file_name: String,
    /// Workbook bytes.
    pub content: Vec<u8>,
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBundle {
    /// Period the reports cover.
    pub period: PayPeriod,
    /// Rendered reports, in `ReportKind::ALL` order.
    pub files: Vec<ReportFile>,
}

impl ReportBundle {
    /// Looks up a rendered report by file name.
    #[must_use]
    pub fn file(&self, file_name: &str) -> Option<&ReportFile> {
        self.files.iter().find(|file| file.file_name == file_name)
    }

    /// Looks up a rendered report by kind.
    #[must_use]
    pub fn report(&self, kind: ReportKind) -> Option<&ReportFile> {
        self.files.iter().find(|file| file.kind == kind)
    }
}
