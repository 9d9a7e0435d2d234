//! Xlsx rendering of report tables.
//!
//! Layout of every workbook (single worksheet named after the report):
//!
//! ```text
//! row 0 | Company Name: <company>
//! row 1 | Date From: <YYYY-MM-DD>
//! row 2 | Date To: <YYYY-MM-DD>
//! row 3 | Payroll Summary: <title> report for <Month>
//! row 5 | <headers...>
//! row 6 | <first data row...>
//! ```

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use super::types::{CellValue, ReportTable};
use crate::period::PayPeriod;

/// Errors raised by the spreadsheet writer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The xlsx library rejected an operation.
    #[error("xlsx writer error: {0}")]
    Xlsx(#[from] XlsxError),

    /// Table is wider than a worksheet.
    #[error("Too many columns: {0}")]
    TooManyColumns(usize),

    /// Table is longer than a worksheet.
    #[error("Too many rows: {0}")]
    TooManyRows(usize),

    /// Amount has no floating-point representation.
    #[error("Amount cannot be written as a number: {0}")]
    UnrepresentableAmount(Decimal),
}

/// Writes report tables as xlsx workbooks.
#[derive(Debug, Clone)]
pub struct XlsxRenderer {
    company_name: String,
}

impl XlsxRenderer {
    /// Row holding the column headers.
    pub const HEADER_ROW: u32 = 5;
    /// First data row.
    pub const FIRST_DATA_ROW: u32 = Self::HEADER_ROW + 1;

    /// Creates a renderer stamping the given company name.
    #[must_use]
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
        }
    }

    /// Lines of the metadata block above the headers.
    #[must_use]
    pub fn metadata_lines(&self, table: &ReportTable, period: &PayPeriod) -> [String; 4] {
        [
            format!("Company Name: {}", self.company_name),
            format!("Date From: {}", period.date_from().format("%Y-%m-%d")),
            format!("Date To: {}", period.date_to().format("%Y-%m-%d")),
            format!(
                "Payroll Summary: {} report for {}",
                table.title,
                period.month_name()
            ),
        ]
    }

    /// Renders a table into workbook bytes.
    ///
    /// The workbook is owned by this call and released on every return path.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the table does not fit a worksheet or the
    /// writer fails.
    pub fn render(&self, table: &ReportTable, period: &PayPeriod) -> Result<Vec<u8>, RenderError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&table.title)?;

        for (row, line) in (0u32..).zip(self.metadata_lines(table, period)) {
            worksheet.write_string(row, 0, &line)?;
        }

        for (index, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(
                Self::HEADER_ROW,
                column_number(index)?,
                header,
                &header_format,
            )?;
        }

        for (offset, cells) in table.rows.iter().enumerate() {
            let row = u32::try_from(offset)
                .ok()
                .and_then(|offset| offset.checked_add(Self::FIRST_DATA_ROW))
                .ok_or(RenderError::TooManyRows(table.rows.len()))?;
            for (index, cell) in cells.iter().enumerate() {
                write_cell(worksheet, row, column_number(index)?, cell)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

fn column_number(index: usize) -> Result<u16, RenderError> {
    u16::try_from(index).map_err(|_| RenderError::TooManyColumns(index + 1))
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> Result<(), RenderError> {
    match cell {
        CellValue::Text(text) if text.is_empty() => {}
        CellValue::Text(text) => {
            worksheet.write_string(row, col, text)?;
        }
        CellValue::Number(amount) => {
            let value = amount
                .to_f64()
                .ok_or(RenderError::UnrepresentableAmount(*amount))?;
            worksheet.write_number(row, col, value)?;
        }
        CellValue::Empty => {}
    }
    Ok(())
}
