//! Payroll report generation.
//!
//! This module turns the payslips of one pay period into five statutory
//! spreadsheets:
//! - Net Pay (bank transfer list)
//! - NSSF (social security fund return)
//! - SHIF (health insurance fund return)
//! - PAYE (tax authority employee details)
//! - AHL (housing levy return)
//!
//! Each report is a declarative list of columns (`columns`), projected row by
//! row from a payslip (`projector`) and written to xlsx (`render`).

pub mod columns;
pub mod error;
pub mod projector;
pub mod render;
pub mod service;
pub mod settings;
pub mod types;


pub use columns::{Column, Field, PAYE_COLUMN_COUNT};
pub use error::ReportError;
pub use projector::ReportProjector;
pub use render::{RenderError, XlsxRenderer};
pub use service::PayrollReportService;
pub use settings::ReportSettings;
pub use types::*;
