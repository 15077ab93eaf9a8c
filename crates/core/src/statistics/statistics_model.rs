//! Statistics aggregation models.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_STATISTICS_YEAR, MONTHS_PER_YEAR};

/// One month of an annual trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    /// Calendar month, 1-12.
    pub month: u32,
    pub amount: Decimal,
}

/// A category's share of a yearly total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category_name: String,
    pub amount: Decimal,
}

/// Yearly aggregate shared by both asset families.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    pub year: i32,
    pub total_amount: Decimal,
    /// 12-point monthly trend, Jan..Dec.
    pub monthly: Vec<MonthlyPoint>,
    /// Highest single month; `None` when the whole year is zero.
    pub max_month: Option<MonthlyPoint>,
    /// `total_amount / 12`, independent of how many months are non-zero.
    pub monthly_average: Decimal,
    /// Grouped by category name, sorted descending by amount.
    pub categories: Vec<CategoryBreakdown>,
}

impl YearlySummary {
    /// Assembles a summary from a full year of monthly points and per-
    /// category totals.
    pub fn assemble(
        year: i32,
        monthly: Vec<MonthlyPoint>,
        by_category: HashMap<String, Decimal>,
    ) -> Self {
        let total_amount: Decimal = monthly.iter().map(|p| p.amount).sum();

        let max_month = if total_amount > Decimal::ZERO {
            monthly.iter().copied().max_by_key(|p| p.amount)
        } else {
            None
        };

        let monthly_average = total_amount / Decimal::from(MONTHS_PER_YEAR);

        let mut categories: Vec<CategoryBreakdown> = by_category
            .into_iter()
            .map(|(category_name, amount)| CategoryBreakdown {
                category_name,
                amount,
            })
            .collect();
        // Descending by amount; name as a stable tiebreaker
        categories.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category_name.cmp(&b.category_name)));

        YearlySummary {
            year,
            total_amount,
            monthly,
            max_month,
            monthly_average,
            categories,
        }
    }
}

/// Current-state counts for virtual assets.
///
/// Computed against the real current date even when a past year is being
/// displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualStatusCounts {
    pub active: usize,
    pub expiring: usize,
    pub expired: usize,
}

/// Current-state counts for fixed assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedStatusCounts {
    pub in_use: usize,
    pub idle: usize,
    pub maintenance: usize,
    pub disposed: usize,
    pub rent: usize,
    pub sell: usize,
}

/// Yearly statistics for the virtual asset family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualYearlyStatistics {
    #[serde(flatten)]
    pub summary: YearlySummary,
    pub status_counts: VirtualStatusCounts,
}

/// Yearly statistics for the fixed asset family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedYearlyStatistics {
    #[serde(flatten)]
    pub summary: YearlySummary,
    /// Net book value by category as of the current date.
    pub total_net_value: Decimal,
    pub status_counts: FixedStatusCounts,
}

/// Derives the set of selectable statistics years.
///
/// The current year plus the endpoint years of every asset's date range
/// (years merely spanned in between do not count), filtered to the
/// statistics floor year and sorted descending.
pub fn statistics_years(date_ranges: &[(NaiveDate, NaiveDate)], today: NaiveDate) -> Vec<i32> {
    let mut years: Vec<i32> = date_ranges
        .iter()
        .flat_map(|(start, end)| [start.year(), end.year()])
        .chain(std::iter::once(today.year()))
        .filter(|year| *year >= MIN_STATISTICS_YEAR)
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_statistics_years_endpoint_years_only() {
        // Asset held 2021-06-01 .. 2023-01-01, evaluated in 2024:
        // 2022 is spanned but not an endpoint, so it is absent
        let years = statistics_years(&[(d(2021, 6, 1), d(2023, 1, 1))], d(2024, 5, 1));
        assert_eq!(years, vec![2024, 2023, 2021]);
    }

    #[test]
    fn test_statistics_years_filters_floor() {
        let years = statistics_years(&[(d(2018, 1, 1), d(2021, 1, 1))], d(2024, 5, 1));
        assert_eq!(years, vec![2024, 2021]);
    }

    #[test]
    fn test_statistics_years_deduplicates_and_sorts() {
        let ranges = [
            (d(2022, 1, 1), d(2022, 12, 31)),
            (d(2022, 3, 1), d(2024, 3, 1)),
            (d(2020, 1, 1), d(2022, 6, 30)),
        ];
        let years = statistics_years(&ranges, d(2024, 5, 1));
        assert_eq!(years, vec![2024, 2022, 2020]);
    }

    #[test]
    fn test_statistics_years_no_assets() {
        assert_eq!(statistics_years(&[], d(2024, 5, 1)), vec![2024]);
    }

    #[test]
    fn test_assemble_totals_and_average() {
        let monthly: Vec<MonthlyPoint> = (1..=12)
            .map(|month| MonthlyPoint {
                month,
                amount: dec!(100),
            })
            .collect();
        let summary = YearlySummary::assemble(2024, monthly, HashMap::new());

        assert_eq!(summary.total_amount, dec!(1200));
        assert_eq!(summary.monthly_average, dec!(100));
        assert_eq!(summary.max_month.unwrap().amount, dec!(100));
    }

    #[test]
    fn test_assemble_zero_year_has_no_max_month() {
        let monthly: Vec<MonthlyPoint> = (1..=12)
            .map(|month| MonthlyPoint {
                month,
                amount: Decimal::ZERO,
            })
            .collect();
        let summary = YearlySummary::assemble(2024, monthly, HashMap::new());
        assert!(summary.max_month.is_none());
    }

    #[test]
    fn test_assemble_categories_sorted_descending() {
        let monthly = vec![MonthlyPoint {
            month: 1,
            amount: dec!(60),
        }];
        let by_category = HashMap::from([
            ("Streaming".to_string(), dec!(10)),
            ("Software".to_string(), dec!(40)),
            ("Fitness".to_string(), dec!(10)),
        ]);
        let summary = YearlySummary::assemble(2024, monthly, by_category);

        let names: Vec<&str> = summary
            .categories
            .iter()
            .map(|c| c.category_name.as_str())
            .collect();
        assert_eq!(names, vec!["Software", "Fitness", "Streaming"]);
    }
}
