//! Calendar arithmetic over proleptic Gregorian dates.
//!
//! This is the single source of truth for day and month counting. All date
//! ranges in the domain are inclusive: a subscription running from Jan 1 to
//! Jan 1 lasts one day, not zero. Two different month counts exist on
//! purpose: [`elapsed_months`] (day-adjusted, for depreciation) and
//! [`calendar_months_between`] (month-index difference, for rent
//! aggregates). They must not be conflated.

use chrono::{Datelike, Local, Months, NaiveDate};

/// Current wall-clock date in the local timezone.
///
/// Every calculator also accepts an explicit `today` so results stay
/// deterministic under test; this is only the default for callers that
/// want "now".
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Inclusive day count between two dates: `end - start + 1`.
///
/// Returns a value ≤ 0 when `start > end`; callers treat that as an empty
/// range.
pub fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Whole months elapsed from `start` to `end`, day-adjusted.
///
/// A month only counts once the day-of-month has been reached, so
/// 2024-01-15 → 2024-03-14 is 1 month and 2024-01-15 → 2024-03-15 is 2.
/// Negative when `end` precedes `start`.
pub fn elapsed_months(start: NaiveDate, end: NaiveDate) -> i64 {
    let months = (end.year() as i64 - start.year() as i64) * 12
        + (end.month() as i64 - start.month() as i64);
    if end.day() < start.day() {
        months - 1
    } else {
        months
    }
}

/// Month-index difference between two dates, ignoring the day-of-month.
///
/// 2024-01-31 → 2024-02-01 is 1. Used for rent aggregates where any
/// overlap with a calendar month counts as a full month.
pub fn calendar_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end.year() as i64 - start.year() as i64) * 12 + (end.month() as i64 - start.month() as i64)
}

/// Last day of the given calendar month.
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first = first_day_of_month(year, month);
    first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// First day of the given calendar month.
pub fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

/// Adds whole calendar months, clamping the day to the target month's end
/// (Jan 31 + 1 month = Feb 29 in a leap year).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Adds whole calendar years, day-clamped like [`add_months`].
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    add_months(date, years * 12)
}
