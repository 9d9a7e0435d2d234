//! Row projection from payslips to report tables.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::columns::{Column, Field, columns_for, requires_classification};
use super::settings::ReportSettings;
use super::types::{CellValue, ReportKind, ReportTable};
use crate::payroll::Payslip;

/// Projects payslips into report tables.
///
/// Projection never fails: a missing line, an unset employee field or a
/// missing bank account becomes an empty string or zero.
#[derive(Debug, Clone, Copy)]
pub struct ReportProjector<'a> {
    settings: &'a ReportSettings,
}

impl<'a> ReportProjector<'a> {
    /// Creates a projector using the given settings.
    #[must_use]
    pub const fn new(settings: &'a ReportSettings) -> Self {
        Self { settings }
    }

    /// Projects every report.
    #[must_use]
    pub fn project(&self, payslips: &[Payslip]) -> BTreeMap<ReportKind, ReportTable> {
        ReportKind::ALL
            .into_iter()
            .map(|kind| (kind, self.project_report(kind, payslips)))
            .collect()
    }

    /// Projects a single report.
    #[must_use]
    pub fn project_report(&self, kind: ReportKind, payslips: &[Payslip]) -> ReportTable {
        let columns = columns_for(kind, self.settings);
        let filter_classified = requires_classification(kind, self.settings);

        let rows = payslips
            .iter()
            .filter(|payslip| !filter_classified || self.is_classified(payslip))
            .map(|payslip| self.project_row(columns, payslip))
            .collect();

        ReportTable {
            kind,
            title: kind.title(self.settings.paye_rows).to_string(),
            headers: columns.iter().map(|c| c.header.to_string()).collect(),
            rows,
        }
    }

    fn project_row(&self, columns: &[Column], payslip: &Payslip) -> Vec<CellValue> {
        columns
            .iter()
            .map(|column| self.extract(column.field, payslip))
            .collect()
    }

    fn is_classified(&self, payslip: &Payslip) -> bool {
        payslip
            .employee
            .tax_pin
            .as_deref()
            .is_some_and(|pin| self.settings.classification(pin).is_some())
    }

    fn extract(&self, field: Field, payslip: &Payslip) -> CellValue {
        let employee = &payslip.employee;
        match field {
            Field::EmployeeName => CellValue::text(employee.name.as_str()),
            Field::BankName => CellValue::text(employee.bank_name()),
            Field::BankBranch => CellValue::text(employee.bank_branch()),
            Field::RegistrationNumber => {
                CellValue::optional_text(employee.registration_number.as_deref())
            }
            Field::Surname => CellValue::Text(employee.surname()),
            Field::OtherNames => CellValue::Text(employee.other_names()),
            Field::FirstName => CellValue::Text(employee.first_name()),
            Field::LastName => CellValue::Text(employee.last_name()),
            Field::NationalId => CellValue::optional_text(employee.national_id.as_deref()),
            Field::TaxPin => CellValue::optional_text(employee.tax_pin.as_deref()),
            Field::NssfNumber => CellValue::optional_text(employee.nssf_number.as_deref()),
            Field::ShifNumber => CellValue::optional_text(employee.shif_number.as_deref()),
            Field::WorkPhone => CellValue::optional_text(employee.work_phone.as_deref()),
            Field::Classification => CellValue::optional_text(
                employee
                    .tax_pin
                    .as_deref()
                    .and_then(|pin| self.settings.classification(pin)),
            ),
            Field::GrossWage => CellValue::Number(payslip.gross_wage),
            Field::NetWage => CellValue::Number(payslip.net_wage),
            Field::Rule(rule) => {
                CellValue::Number(payslip.line_amount(self.settings.rule_codes().code(rule)))
            }
            Field::Literal(text) => CellValue::text(text),
            Field::Zero => CellValue::Number(Decimal::ZERO),
            Field::Blank => CellValue::Empty,
        }
    }
}
