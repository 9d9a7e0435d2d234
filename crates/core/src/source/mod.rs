//! Payroll data source port.
//!
//! The projector never talks to a database directly. It asks a
//! `PayslipSource` for the payslips fully contained in a period; the
//! database crate provides the production implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::payroll::Payslip;
use crate::period::PayPeriod;

/// Failure of the underlying payroll store.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SourceError(pub String);

/// Read-only access to payslips.
#[async_trait]
pub trait PayslipSource: Send + Sync {
    /// Payslips with `date_from >= period.date_from` and
    /// `date_to <= period.date_to`.
    ///
    /// A payslip that straddles either bound is not returned.
    async fn payslips_within(&self, period: &PayPeriod) -> Result<Vec<Payslip>, SourceError>;
}

/// Source backed by a fixed list of payslips.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPayslipSource {
    payslips: Vec<Payslip>,
}

impl InMemoryPayslipSource {
    /// Creates a source over the given payslips.
    #[must_use]
    pub const fn new(payslips: Vec<Payslip>) -> Self {
        Self { payslips }
    }
}

#[async_trait]
impl PayslipSource for InMemoryPayslipSource {
    async fn payslips_within(&self, period: &PayPeriod) -> Result<Vec<Payslip>, SourceError> {
        Ok(self
            .payslips
            .iter()
            .filter(|payslip| period.contains_range(payslip.date_from, payslip.date_to))
            .cloned()
            .collect())
    }
}
