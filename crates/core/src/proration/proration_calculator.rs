//! Day-based cost allocation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::utils::date_utils::days_between_inclusive;

use super::proration_model::DateWindow;

/// Allocates a share of `total_amount` to `window`, proportional to the
/// number of covered days falling inside the window.
///
/// Day counts are inclusive on both ends. Invalid inputs (inverted range,
/// non-positive amount) and windows with no overlap allocate zero.
/// Allocations over any contiguous, non-overlapping cover of the full
/// range sum back to `total_amount` up to rounding.
pub fn allocate(
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_amount: Decimal,
    window: DateWindow,
) -> Decimal {
    let total_days = days_between_inclusive(start_date, end_date);
    if total_days <= 0 || total_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let effective_start = start_date.max(window.start);
    let effective_end = end_date.min(window.end);
    if effective_start > effective_end {
        return Decimal::ZERO;
    }

    let days_in_window = days_between_inclusive(effective_start, effective_end);
    total_amount * Decimal::from(days_in_window) / Decimal::from(total_days)
}
