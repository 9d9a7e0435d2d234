//! Pay period error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Month is not in 1-12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year is outside the selectable range.
    #[error("Year {year} is outside the selectable range {earliest}-{latest}")]
    YearOutOfRange {
        /// Requested year.
        year: i32,
        /// Earliest selectable year.
        earliest: i32,
        /// Latest selectable year (the current year).
        latest: i32,
    },

    /// Start date is after end date.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The month cannot be represented as a calendar date.
    #[error("Date out of range: {year}-{month:02}")]
    Unrepresentable {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },
}
