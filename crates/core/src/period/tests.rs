//! Tests for pay period resolution.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rstest::rstest;

use super::{PayPeriod, PeriodError, PeriodResolver};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[rstest]
#[case(2024, 2, date(2024, 2, 29))]
#[case(2023, 2, date(2023, 2, 28))]
#[case(2000, 2, date(2000, 2, 29))]
#[case(1900, 2, date(1900, 2, 28))]
#[case(2024, 4, date(2024, 4, 30))]
#[case(2024, 12, date(2024, 12, 31))]
#[case(2025, 1, date(2025, 1, 31))]
fn test_for_month_last_day(#[case] year: i32, #[case] month: u32, #[case] expected: NaiveDate) {
    let period = PayPeriod::for_month(year, month).unwrap();
    assert_eq!(period.date_from(), date(year, month, 1));
    assert_eq!(period.date_to(), expected);
}

#[rstest]
#[case(0)]
#[case(13)]
fn test_for_month_rejects_invalid_month(#[case] month: u32) {
    assert_eq!(
        PayPeriod::for_month(2024, month),
        Err(PeriodError::InvalidMonth(month))
    );
}

#[test]
fn test_new_rejects_inverted_range() {
    let result = PayPeriod::new(date(2024, 3, 31), date(2024, 3, 1));
    assert!(matches!(result, Err(PeriodError::InvalidRange { .. })));
}

#[test]
fn test_new_accepts_single_day() {
    let period = PayPeriod::new(date(2024, 3, 15), date(2024, 3, 15)).unwrap();
    assert!(period.contains(date(2024, 3, 15)));
    assert!(!period.contains(date(2024, 3, 16)));
}

#[test]
fn test_contains_range_is_containment_not_overlap() {
    let period = PayPeriod::for_month(2024, 3).unwrap();

    assert!(period.contains_range(date(2024, 3, 1), date(2024, 3, 31)));
    assert!(period.contains_range(date(2024, 3, 10), date(2024, 3, 20)));
    assert!(!period.contains_range(date(2024, 2, 25), date(2024, 3, 24)));
    assert!(!period.contains_range(date(2024, 3, 25), date(2024, 4, 24)));
    assert!(!period.contains_range(date(2024, 2, 1), date(2024, 4, 30)));
}

#[test]
fn test_month_name() {
    let period = PayPeriod::for_month(2024, 9).unwrap();
    assert_eq!(period.month_name(), "September");
}

#[test]
fn test_resolve_defaults_to_current_month() {
    let resolver = PeriodResolver::new(2020);
    let period = resolver.current(date(2024, 2, 17)).unwrap();
    assert_eq!(period.date_from(), date(2024, 2, 1));
    assert_eq!(period.date_to(), date(2024, 2, 29));
}

#[test]
fn test_resolve_defaults_missing_year_only() {
    let resolver = PeriodResolver::new(2020);
    let period = resolver.resolve(Some(6), None, date(2025, 10, 3)).unwrap();
    assert_eq!(period.date_from(), date(2025, 6, 1));
    assert_eq!(period.date_to(), date(2025, 6, 30));
}

#[rstest]
#[case(2019)]
#[case(2026)]
fn test_resolve_rejects_year_outside_range(#[case] year: i32) {
    let resolver = PeriodResolver::new(2020);
    let result = resolver.resolve(Some(1), Some(year), date(2025, 10, 3));
    assert_eq!(
        result,
        Err(PeriodError::YearOutOfRange {
            year,
            earliest: 2020,
            latest: 2025,
        })
    );
}

#[test]
fn test_resolve_rejects_invalid_month() {
    let resolver = PeriodResolver::new(2020);
    let result = resolver.resolve(Some(13), Some(2024), date(2025, 10, 3));
    assert_eq!(result, Err(PeriodError::InvalidMonth(13)));
}

#[test]
fn test_selectable_years() {
    let resolver = PeriodResolver::new(2022);
    assert_eq!(
        resolver.selectable_years(date(2025, 1, 1)),
        vec![2022, 2023, 2024, 2025]
    );
}

proptest! {
    /// date_to is always the last day of the requested month.
    #[test]
    fn test_for_month_ends_on_last_day(year in 1900i32..2200, month in 1u32..=12) {
        let period = PayPeriod::for_month(year, month).unwrap();

        prop_assert_eq!(period.date_from().day(), 1);
        prop_assert_eq!(period.date_to().month(), month);
        prop_assert_eq!(period.date_to().year(), year);
        let next_day = period.date_to().succ_opt().unwrap();
        prop_assert_eq!(next_day.day(), 1);
        prop_assert!(period.date_from() <= period.date_to());
    }

    /// December never rolls the period into the following year.
    #[test]
    fn test_december_stays_in_year(year in 2020i32..=2025) {
        let resolver = PeriodResolver::new(2020);
        let period = resolver.resolve(Some(12), Some(year), date(2025, 6, 1)).unwrap();

        prop_assert_eq!(period.date_from(), date(year, 12, 1));
        prop_assert_eq!(period.date_to(), date(year, 12, 31));
    }
}
