//! Repository abstractions for data access.
//!
//! Repositories hide the `SeaORM` details from the report pipeline.

pub mod payslip;

pub use payslip::PayslipRepository;
