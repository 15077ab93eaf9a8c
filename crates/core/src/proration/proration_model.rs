//! Calendar window model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date_utils::{
    days_between_inclusive, first_day_of_month, last_day_of_month,
};

/// An inclusive calendar window, usually a single month or a full year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateWindow { start, end }
    }

    /// The full calendar month `year`-`month`.
    pub fn month(year: i32, month: u32) -> Self {
        DateWindow {
            start: first_day_of_month(year, month),
            end: last_day_of_month(year, month),
        }
    }

    /// The full calendar year.
    pub fn year(year: i32) -> Self {
        DateWindow {
            start: first_day_of_month(year, 1),
            end: last_day_of_month(year, 12),
        }
    }

    /// Inclusive day count of the window.
    pub fn days(&self) -> i64 {
        days_between_inclusive(self.start, self.end)
    }

    /// True when the window intersects the inclusive range `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && start <= self.end
    }

    /// The year this window belongs to (by its start date).
    pub fn year_number(&self) -> i32 {
        self.start.year()
    }
}
