//! Pay period type.

use chrono::{Months, NaiveDate};
use serde::Serialize;

use super::error::PeriodError;

/// Inclusive date range a set of payslips is reported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PayPeriod {
    date_from: NaiveDate,
    date_to: NaiveDate,
}

impl PayPeriod {
    /// Creates a period from arbitrary bounds.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidRange` if `date_from` is after `date_to`.
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Result<Self, PeriodError> {
        if date_from > date_to {
            return Err(PeriodError::InvalidRange {
                start: date_from,
                end: date_to,
            });
        }
        Ok(Self { date_from, date_to })
    }

    /// Creates the period spanning one calendar month.
    ///
    /// `date_to` is the day before the first day of the following month, so
    /// December rolls into January of the next year and February follows the
    /// leap-year rules.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` for months outside 1-12.
    pub fn for_month(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }

        let unrepresentable = || PeriodError::Unrepresentable { year, month };
        let date_from = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(unrepresentable)?;
        let date_to = date_from
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(unrepresentable)?;

        Ok(Self { date_from, date_to })
    }

    /// First day of the period.
    #[must_use]
    pub const fn date_from(&self) -> NaiveDate {
        self.date_from
    }

    /// Last day of the period.
    #[must_use]
    pub const fn date_to(&self) -> NaiveDate {
        self.date_to
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.date_from && date <= self.date_to
    }

    /// Returns true if the whole range `[from, to]` lies inside this period.
    ///
    /// A range straddling either bound is not contained.
    #[must_use]
    pub fn contains_range(&self, from: NaiveDate, to: NaiveDate) -> bool {
        from >= self.date_from && to <= self.date_to
    }

    /// English name of the month the period starts in.
    #[must_use]
    pub fn month_name(&self) -> String {
        self.date_from.format("%B").to_string()
    }
}

impl std::fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.date_from, self.date_to)
    }
}
