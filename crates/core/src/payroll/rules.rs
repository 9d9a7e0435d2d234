//! Salary rule codes read by the reports.
//!
//! Every rule a report column looks up is a `RuleCode` variant. The code
//! string stored on payslip lines defaults to the host payroll's code and can
//! be overridden per installation; override keys are checked against the enum
//! so a misspelt rule name is rejected instead of producing an all-zero column.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Salary rules referenced by report columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCode {
    /// Social health insurance fund deduction.
    Shif,
    /// Taxable house allowance.
    HouseAllowance,
    /// Taxable bonus.
    Bonus,
    /// Salary advance.
    SalaryAdvance,
    /// Taxable acting allowance.
    ActingAllowance,
    /// Taxable leave travelling allowance.
    LeaveTravelAllowance,
    /// Lump sum payment.
    LumpSumPay,
    /// Service charge.
    ServiceCharge,
    /// Social security fund contribution.
    NssfAmount,
    /// Monthly personal relief.
    PersonalRelief,
    /// Insurance relief.
    InsuranceRelief,
    /// Final income tax.
    Paye,
    /// Housing levy relief.
    AhlRelief,
    /// Housing levy employee contribution.
    AhlSelf,
    /// Housing levy employer contribution.
    AhlEmployer,
}

impl RuleCode {
    /// Every rule, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Shif,
        Self::HouseAllowance,
        Self::Bonus,
        Self::SalaryAdvance,
        Self::ActingAllowance,
        Self::LeaveTravelAllowance,
        Self::LumpSumPay,
        Self::ServiceCharge,
        Self::NssfAmount,
        Self::PersonalRelief,
        Self::InsuranceRelief,
        Self::Paye,
        Self::AhlRelief,
        Self::AhlSelf,
        Self::AhlEmployer,
    ];

    /// Configuration key of the rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shif => "shif",
            Self::HouseAllowance => "house_allowance",
            Self::Bonus => "bonus",
            Self::SalaryAdvance => "salary_advance",
            Self::ActingAllowance => "acting_allowance",
            Self::LeaveTravelAllowance => "leave_travel_allowance",
            Self::LumpSumPay => "lump_sum_pay",
            Self::ServiceCharge => "service_charge",
            Self::NssfAmount => "nssf_amount",
            Self::PersonalRelief => "personal_relief",
            Self::InsuranceRelief => "insurance_relief",
            Self::Paye => "paye",
            Self::AhlRelief => "ahl_relief",
            Self::AhlSelf => "ahl_self",
            Self::AhlEmployer => "ahl_employer",
        }
    }

    /// Code the host payroll uses for this rule unless overridden.
    #[must_use]
    pub const fn default_code(self) -> &'static str {
        match self {
            Self::Shif => "SHA",
            Self::HouseAllowance => "Taxed_House_Allowance",
            Self::Bonus => "TAXED_BONUS",
            Self::SalaryAdvance => "SALARY ADVANCE",
            Self::ActingAllowance => "Taxed_Acting_Allowance",
            Self::LeaveTravelAllowance => "Taxed_Leave_Travelling_Allowance",
            Self::LumpSumPay => "Lump_Sum_Pay",
            Self::ServiceCharge => "SERVICE_CHARGE",
            Self::NssfAmount => "NSSF_AMOUNT",
            Self::PersonalRelief => "PERS_RELIEF",
            Self::InsuranceRelief => "INSURANCE_RELIEF",
            Self::Paye => "PAYE",
            Self::AhlRelief => "AHL RELIEF",
            Self::AhlSelf => "AHL_AMOUNT",
            Self::AhlEmployer => "AHL_AMOUNT_EMP",
        }
    }
}

impl std::fmt::Display for RuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleCode {
    type Err = RuleCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| RuleCodeError::UnknownRule(s.to_string()))
    }
}

/// Errors raised while building the rule code table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleCodeError {
    /// Override key does not name a known rule.
    #[error("Unknown salary rule: {0}")]
    UnknownRule(String),

    /// Override value is blank.
    #[error("Empty code for salary rule: {0}")]
    EmptyCode(RuleCode),
}

/// Resolved rule code strings, one per `RuleCode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCodes {
    codes: HashMap<RuleCode, String>,
}

impl Default for RuleCodes {
    fn default() -> Self {
        Self {
            codes: RuleCode::ALL
                .into_iter()
                .map(|rule| (rule, rule.default_code().to_string()))
                .collect(),
        }
    }
}

impl RuleCodes {
    /// Builds the table from the defaults plus configured overrides.
    ///
    /// # Errors
    ///
    /// Returns `RuleCodeError::UnknownRule` for a key that is not a rule
    /// name and `RuleCodeError::EmptyCode` for a blank code.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self, RuleCodeError> {
        let mut table = Self::default();
        for (key, code) in overrides {
            let rule = key.trim().parse::<RuleCode>()?;
            let code = code.trim();
            if code.is_empty() {
                return Err(RuleCodeError::EmptyCode(rule));
            }
            table.codes.insert(rule, code.to_string());
        }
        Ok(table)
    }

    /// Code string for a rule.
    #[must_use]
    pub fn code(&self, rule: RuleCode) -> &str {
        self.codes
            .get(&rule)
            .map_or_else(|| rule.default_code(), String::as_str)
    }
}
