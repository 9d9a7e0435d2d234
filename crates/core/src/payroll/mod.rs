//! Payroll records consumed by the report projector.
//!
//! Employees, payslips and payslip lines are owned by the host payroll
//! system; this crate only reads them.

pub mod rules;
pub mod types;

pub use rules::{RuleCode, RuleCodeError, RuleCodes};
pub use types::{BankAccount, Employee, Payslip, PayslipLine};
