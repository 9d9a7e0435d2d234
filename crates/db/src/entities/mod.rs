//! `SeaORM` entity definitions.

pub mod bank_accounts;
pub mod employees;
pub mod payslip_lines;
pub mod payslips;
