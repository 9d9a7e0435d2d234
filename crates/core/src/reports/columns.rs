//! Declarative column layouts for every report.
//!
//! A layout is an ordered array of `Column`s; the array length is the column
//! count of the report, so a layout cannot drift from its declared width.
//! Headers are always taken from the layout.

use paysheet_shared::PayeRows;

use super::settings::ReportSettings;
use super::types::ReportKind;
use crate::payroll::RuleCode;

/// What a column extracts from a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Employee full name.
    EmployeeName,
    /// Bank name, empty without a bank account.
    BankName,
    /// Bank branch code, empty without a bank account.
    BankBranch,
    /// Payroll registration number.
    RegistrationNumber,
    /// Last name token.
    Surname,
    /// All name tokens but the last.
    OtherNames,
    /// First name token (requires two tokens).
    FirstName,
    /// Second name token (requires two tokens).
    LastName,
    /// National identity number.
    NationalId,
    /// Tax authority PIN.
    TaxPin,
    /// Social security fund number.
    NssfNumber,
    /// Health insurance fund number.
    ShifNumber,
    /// Work phone number.
    WorkPhone,
    /// Label configured for the employee's tax PIN.
    Classification,
    /// Gross wage.
    GrossWage,
    /// Net wage.
    NetWage,
    /// Amount of the first line for a salary rule.
    Rule(RuleCode),
    /// Fixed text.
    Literal(&'static str),
    /// Fixed zero.
    Zero,
    /// Positional placeholder left blank.
    Blank,
}

/// A report column: header label plus extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header label.
    pub header: &'static str,
    /// Extraction.
    pub field: Field,
}

const fn col(header: &'static str, field: Field) -> Column {
    Column { header, field }
}

/// Net pay bank transfer list.
pub const NET_PAY_COLUMNS: [Column; 4] = [
    col("Employee Name", Field::EmployeeName),
    col("Bank Name", Field::BankName),
    col("Bank Branch", Field::BankBranch),
    col("Net Pay", Field::NetWage),
];

/// Social security fund return.
pub const NSSF_COLUMNS: [Column; 7] = [
    col("Payroll Number", Field::RegistrationNumber),
    col("Surname", Field::Surname),
    col("Other Names", Field::OtherNames),
    col("ID Number", Field::NationalId),
    col("KRA PIN", Field::TaxPin),
    col("NSSF Number", Field::NssfNumber),
    col("Gross Pay", Field::GrossWage),
];

/// Health insurance fund return.
pub const SHIF_COLUMNS: [Column; 8] = [
    col("Payroll Number", Field::RegistrationNumber),
    col("First Name", Field::FirstName),
    col("Last Name", Field::LastName),
    col("ID Number", Field::NationalId),
    col("KRA PIN", Field::TaxPin),
    col("SHIF Number", Field::ShifNumber),
    col("Amount", Field::Rule(RuleCode::Shif)),
    col("Phone", Field::WorkPhone),
];

/// Width of the tax authority employee details sheet.
pub const PAYE_COLUMN_COUNT: usize = 36;

/// Tax authority employee details, one fixed slot per column of the
/// authority's import sheet. Slots the payroll does not track are kept as
/// placeholders so the remaining columns stay in position.
pub const PAYE_COLUMNS: [Column; PAYE_COLUMN_COUNT] = [
    col("PIN of Employee", Field::TaxPin),
    col("Name of Employee", Field::EmployeeName),
    col("Type of Employee", Field::Classification),
    col("Basic Salary", Field::NetWage),
    col("Housing Allowance", Field::Rule(RuleCode::HouseAllowance)),
    col("Bonus", Field::Rule(RuleCode::Bonus)),
    col("Salary Advance", Field::Rule(RuleCode::SalaryAdvance)),
    col("Acting Allowance", Field::Rule(RuleCode::ActingAllowance)),
    col(
        "Leave Travelling Allowance",
        Field::Rule(RuleCode::LeaveTravelAllowance),
    ),
    col("Lump Sum Payment", Field::Rule(RuleCode::LumpSumPay)),
    col("Service Charge", Field::Rule(RuleCode::ServiceCharge)),
    col("Overtime Allowance", Field::Blank),
    col("Director's Fee", Field::Zero),
    col("Other Allowance", Field::Zero),
    col("Total Cash Pay", Field::Blank),
    col("Value of Car Benefit", Field::Blank),
    col("Other Non Cash Benefits", Field::Zero),
    col("Type of Housing", Field::Literal("Benefit not Given")),
    col("Rent of House/Market Value", Field::Blank),
    col("Computed Rent of House", Field::Blank),
    col("Rent Recovered from Employee", Field::Blank),
    col("Net Value of Housing", Field::Blank),
    col("Total Gross Pay", Field::Blank),
    col("30% of Cash Pay", Field::Blank),
    col("Actual Contribution", Field::Rule(RuleCode::NssfAmount)),
    col("Permissible Limit", Field::Blank),
    col("Mortgage Interest", Field::Zero),
    col("Deposit on Home Ownership Saving Plan", Field::Zero),
    col("Post Retirement Medical Fund", Field::Blank),
    col("Amount of Benefit", Field::Blank),
    col("Taxable Pay", Field::Blank),
    col("Tax Payable", Field::Blank),
    col("Monthly Personal Relief", Field::Rule(RuleCode::PersonalRelief)),
    col("Amount of Insurance Relief", Field::Rule(RuleCode::InsuranceRelief)),
    col("Other Relief", Field::Blank),
    col("PAYE Tax", Field::Rule(RuleCode::Paye)),
];

/// Housing levy return, current layout.
pub const AHL_COLUMNS: [Column; 6] = [
    col("ID No", Field::NationalId),
    col("Name", Field::EmployeeName),
    col("KRA PIN", Field::TaxPin),
    col("Gross Wage", Field::GrossWage),
    col("AHL Self", Field::Rule(RuleCode::AhlSelf)),
    col("AHL Employer", Field::Rule(RuleCode::AhlEmployer)),
];

/// Housing levy return, layout with the relief column.
pub const AHL_COLUMNS_WITH_RELIEF: [Column; 7] = [
    col("ID No", Field::NationalId),
    col("Name", Field::EmployeeName),
    col("KRA PIN", Field::TaxPin),
    col("Gross Wage", Field::GrossWage),
    col("AHL Relief", Field::Rule(RuleCode::AhlRelief)),
    col("AHL Self", Field::Rule(RuleCode::AhlSelf)),
    col("AHL Employer", Field::Rule(RuleCode::AhlEmployer)),
];

/// Layout of a report under the given settings.
#[must_use]
pub fn columns_for(kind: ReportKind, settings: &ReportSettings) -> &'static [Column] {
    match kind {
        ReportKind::NetPay => &NET_PAY_COLUMNS,
        ReportKind::Nssf => &NSSF_COLUMNS,
        ReportKind::Shif => &SHIF_COLUMNS,
        ReportKind::Paye => &PAYE_COLUMNS,
        ReportKind::Ahl if settings.include_relief_column => &AHL_COLUMNS_WITH_RELIEF,
        ReportKind::Ahl => &AHL_COLUMNS,
    }
}

/// Whether a report keeps only payslips with a classified tax PIN.
#[must_use]
pub fn requires_classification(kind: ReportKind, settings: &ReportSettings) -> bool {
    kind == ReportKind::Paye && settings.paye_rows == PayeRows::MappedPins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paye_layout_slot_positions() {
        assert_eq!(PAYE_COLUMNS.len(), 36);
        assert_eq!(PAYE_COLUMNS[0].field, Field::TaxPin);
        assert_eq!(PAYE_COLUMNS[2].field, Field::Classification);
        assert_eq!(
            PAYE_COLUMNS[17].field,
            Field::Literal("Benefit not Given")
        );
        assert_eq!(PAYE_COLUMNS[24].field, Field::Rule(RuleCode::NssfAmount));
        assert_eq!(PAYE_COLUMNS[35].field, Field::Rule(RuleCode::Paye));
    }

    #[test]
    fn test_headers_are_never_blank() {
        let settings = ReportSettings::default();
        for kind in ReportKind::ALL {
            for column in columns_for(kind, &settings) {
                assert!(!column.header.trim().is_empty(), "{kind} has a blank header");
            }
        }
    }

    #[test]
    fn test_ahl_layout_follows_relief_flag() {
        let without = ReportSettings::default();
        let with = ReportSettings::default().with_relief_column(true);

        assert_eq!(columns_for(ReportKind::Ahl, &without).len(), 6);
        assert_eq!(columns_for(ReportKind::Ahl, &with).len(), 7);
        assert_eq!(columns_for(ReportKind::Ahl, &with)[4].header, "AHL Relief");
    }
}
