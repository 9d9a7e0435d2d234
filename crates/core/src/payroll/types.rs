//! Payroll record types.

use chrono::NaiveDate;
use paysheet_shared::types::{EmployeeId, PayslipId, PayslipLineId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bank account an employee is paid into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Bank name.
    pub bank_name: Option<String>,
    /// Bank branch / BIC code.
    pub branch_code: Option<String>,
}

/// Employee as seen by the payroll reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Full name, whitespace separated.
    pub name: String,
    /// Payroll registration number.
    pub registration_number: Option<String>,
    /// National identity number.
    pub national_id: Option<String>,
    /// Tax authority PIN.
    pub tax_pin: Option<String>,
    /// Social security fund (NSSF) number.
    pub nssf_number: Option<String>,
    /// Health insurance fund (SHIF) number.
    pub shif_number: Option<String>,
    /// Work phone number.
    pub work_phone: Option<String>,
    /// Salary bank account, if one is on file.
    pub bank_account: Option<BankAccount>,
}

impl Employee {
    /// Creates an employee with only a name; every other field is unset.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            registration_number: None,
            national_id: None,
            tax_pin: None,
            nssf_number: None,
            shif_number: None,
            work_phone: None,
            bank_account: None,
        }
    }

    fn name_tokens(&self) -> Vec<&str> {
        self.name.split_whitespace().collect()
    }

    /// Last whitespace token of the name, empty for a blank name.
    #[must_use]
    pub fn surname(&self) -> String {
        self.name_tokens()
            .last()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Every token but the last; a single-token name is returned whole.
    #[must_use]
    pub fn other_names(&self) -> String {
        let tokens = self.name_tokens();
        match tokens.split_last() {
            Some((_, rest)) if !rest.is_empty() => rest.join(" "),
            _ => self.name.trim().to_string(),
        }
    }

    /// First whitespace token; empty unless the name has at least two tokens.
    #[must_use]
    pub fn first_name(&self) -> String {
        match self.name_tokens().as_slice() {
            [first, _, ..] => (*first).to_string(),
            _ => String::new(),
        }
    }

    /// Second whitespace token; empty unless the name has at least two tokens.
    #[must_use]
    pub fn last_name(&self) -> String {
        match self.name_tokens().as_slice() {
            [_, second, ..] => (*second).to_string(),
            _ => String::new(),
        }
    }

    /// Bank name, empty without a bank account.
    #[must_use]
    pub fn bank_name(&self) -> &str {
        self.bank_account
            .as_ref()
            .and_then(|account| account.bank_name.as_deref())
            .unwrap_or_default()
    }

    /// Bank branch code, empty without a bank account.
    #[must_use]
    pub fn bank_branch(&self) -> &str {
        self.bank_account
            .as_ref()
            .and_then(|account| account.branch_code.as_deref())
            .unwrap_or_default()
    }
}

/// One salary rule result on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// Unique identifier.
    pub id: PayslipLineId,
    /// Code of the salary rule that produced the line.
    pub rule_code: String,
    /// Line amount.
    pub amount: Decimal,
}

impl PayslipLine {
    /// Creates a line for a rule code.
    #[must_use]
    pub fn new(rule_code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: PayslipLineId::new(),
            rule_code: rule_code.into(),
            amount,
        }
    }
}

/// A computed payslip for one employee and pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier.
    pub id: PayslipId,
    /// Employee the payslip belongs to.
    pub employee: Employee,
    /// First day covered by the payslip.
    pub date_from: NaiveDate,
    /// Last day covered by the payslip.
    pub date_to: NaiveDate,
    /// Gross wage.
    pub gross_wage: Decimal,
    /// Net wage.
    pub net_wage: Decimal,
    /// Salary rule lines, in computation order.
    pub lines: Vec<PayslipLine>,
}

impl Payslip {
    /// Amount of the first line with the given rule code, zero if none.
    #[must_use]
    pub fn line_amount(&self, rule_code: &str) -> Decimal {
        self.lines
            .iter()
            .find(|line| line.rule_code == rule_code)
            .map_or(Decimal::ZERO, |line| line.amount)
    }
}
