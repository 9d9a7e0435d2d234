//! Month/year to pay period resolution.

use chrono::{Datelike, NaiveDate};

use super::{error::PeriodError, types::PayPeriod};

/// Resolves user-selected month and year into a calendar-month period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodResolver {
    earliest_year: i32,
}

impl PeriodResolver {
    /// Creates a resolver accepting years from `earliest_year` up to the current year.
    #[must_use]
    pub const fn new(earliest_year: i32) -> Self {
        Self { earliest_year }
    }

    /// Earliest selectable year.
    #[must_use]
    pub const fn earliest_year(&self) -> i32 {
        self.earliest_year
    }

    /// Resolves a month and year, defaulting either one to `today`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` for months outside 1-12 and
    /// `PeriodError::YearOutOfRange` for years before `earliest_year` or
    /// after the year of `today`.
    pub fn resolve(
        &self,
        month: Option<u32>,
        year: Option<i32>,
        today: NaiveDate,
    ) -> Result<PayPeriod, PeriodError> {
        let month = month.unwrap_or_else(|| today.month());
        let year = year.unwrap_or_else(|| today.year());

        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }

        let latest = today.year();
        if year < self.earliest_year || year > latest {
            return Err(PeriodError::YearOutOfRange {
                year,
                earliest: self.earliest_year,
                latest,
            });
        }

        PayPeriod::for_month(year, month)
    }

    /// Resolves the calendar month containing `today`.
    ///
    /// # Errors
    ///
    /// Fails only when `today` is before `earliest_year`.
    pub fn current(&self, today: NaiveDate) -> Result<PayPeriod, PeriodError> {
        self.resolve(None, None, today)
    }

    /// Years a user can pick from, oldest first.
    #[must_use]
    pub fn selectable_years(&self, today: NaiveDate) -> Vec<i32> {
        (self.earliest_year..=today.year()).collect()
    }
}
