//! Rent income aggregation and due-date projection.
//!
//! Rent is not day-prorated: a month either overlaps the rental window and
//! yields the full monthly price, or it yields nothing. This differs from
//! subscription proration on purpose.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::constants::RENT_DUE_DAY_MAX;
use crate::proration::DateWindow;
use crate::utils::date_utils::{add_months, calendar_months_between, last_day_of_month};

use super::rent_model::{RentDueProjection, RentDueUrgency};

/// Resolves the effective rental window for an evaluation year.
///
/// A missing start falls back to the purchase date; a missing end falls
/// back to the evaluated year's Dec 31, so an open-ended lease always
/// reaches the end of whichever year is being summarized.
pub fn effective_window(
    rent_start: Option<NaiveDate>,
    rent_end: Option<NaiveDate>,
    purchase_date: NaiveDate,
    year: i32,
) -> (NaiveDate, NaiveDate) {
    (
        rent_start.unwrap_or(purchase_date),
        rent_end.unwrap_or_else(|| last_day_of_month(year, 12)),
    )
}

/// Rent income attributed to a single calendar month: the full monthly
/// price when the month overlaps the rental window, zero otherwise.
pub fn monthly_income(
    rent_price: Decimal,
    rent_start: NaiveDate,
    rent_end: NaiveDate,
    year: i32,
    month: u32,
) -> Decimal {
    if rent_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let window = DateWindow::month(year, month);
    if window.overlaps(rent_start, rent_end) {
        rent_price
    } else {
        Decimal::ZERO
    }
}

/// Rent income attributed to a calendar year: the monthly price times the
/// number of months the rental window touches within that year.
pub fn yearly_income(
    rent_price: Decimal,
    rent_start: NaiveDate,
    rent_end: NaiveDate,
    year: i32,
) -> Decimal {
    if rent_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let window = DateWindow::year(year);
    let effective_start = rent_start.max(window.start);
    let effective_end = rent_end.min(window.end);
    if effective_start > effective_end {
        return Decimal::ZERO;
    }
    let months = calendar_months_between(effective_start, effective_end) + 1;
    rent_price * Decimal::from(months)
}

/// Projects the next rent due date from `today`.
///
/// The candidate is `today` with its day-of-month set to the due day,
/// pushed one month forward once the cycle's due day has been reached.
/// Returns `None` when the candidate falls past the end of the lease.
pub fn next_due(
    rent_due_day: u32,
    today: NaiveDate,
    rent_end: Option<NaiveDate>,
) -> Option<RentDueProjection> {
    let due_day = rent_due_day.clamp(1, RENT_DUE_DAY_MAX);
    // Always valid: due_day ≤ 28 exists in every month
    let mut candidate = today.with_day(due_day)?;
    if today.day() >= due_day {
        candidate = add_months(candidate, 1);
    }
    if let Some(end) = rent_end {
        if candidate > end {
            return None;
        }
    }
    let days_until = (candidate - today).num_days();
    Some(RentDueProjection {
        due_date: candidate,
        days_until,
        urgency: RentDueUrgency::classify(days_until),
    })
}
