//! Core business logic for Paysheet.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, projection rules, and rendering live here.
//!
//! # Modules
//!
//! - `period` - Month/year to pay period resolution
//! - `payroll` - Employees, payslips and salary rule codes
//! - `source` - Read-only payslip data source port
//! - `reports` - Column layouts, projection, xlsx rendering and generation

pub mod payroll;
pub mod period;
pub mod reports;
pub mod source;
