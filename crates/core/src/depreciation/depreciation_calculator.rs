//! Straight-line depreciation over calendar months.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::utils::date_utils::{add_years, elapsed_months};

use super::depreciation_model::DepreciationFigures;

/// Computes a straight-line depreciation snapshot as of `today`.
///
/// `useful_life_years` is clamped to at least 1 so an unvalidated record
/// can never divide by zero; services reject 0 before it gets here.
/// Negative elapsed time (evaluation before the start date) clamps to zero
/// used months, and depreciation stops accruing once the depreciable value
/// is exhausted.
pub fn straight_line(
    start_date: NaiveDate,
    useful_life_years: u32,
    original_value: Decimal,
    residual_rate: Decimal,
    today: NaiveDate,
) -> DepreciationFigures {
    let useful_life_years = useful_life_years.max(1);
    let total_months = i64::from(useful_life_years) * 12;

    let end_of_life = add_years(start_date, useful_life_years);
    let used_months = elapsed_months(start_date, today).max(0);

    let progress_pct = (Decimal::from(used_months) / Decimal::from(total_months)
        * Decimal::ONE_HUNDRED)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    let residual_value = original_value * residual_rate / Decimal::ONE_HUNDRED;
    let depreciable_value = original_value - residual_value;
    let monthly_depreciation = depreciable_value / Decimal::from(total_months);
    let annual_depreciation = depreciable_value / Decimal::from(useful_life_years);

    let accumulated_depreciation =
        (monthly_depreciation * Decimal::from(used_months)).min(depreciable_value);
    let current_value = original_value - accumulated_depreciation;

    DepreciationFigures {
        end_of_life,
        used_months,
        total_months,
        progress_pct,
        residual_value,
        depreciable_value,
        monthly_depreciation,
        annual_depreciation,
        accumulated_depreciation,
        current_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_midlife_snapshot() {
        // 12000 over 5 years, 10% residual, 2.5 years in
        let figures = straight_line(d(2020, 1, 1), 5, dec!(12000), dec!(10), d(2022, 7, 1));

        assert_eq!(figures.end_of_life, d(2025, 1, 1));
        assert_eq!(figures.used_months, 30);
        assert_eq!(figures.total_months, 60);
        assert_eq!(figures.progress_pct, dec!(50));
        assert_eq!(figures.residual_value, dec!(1200));
        assert_eq!(figures.depreciable_value, dec!(10800));
        assert_eq!(figures.monthly_depreciation, dec!(180));
        assert_eq!(figures.annual_depreciation, dec!(2160));
        assert_eq!(figures.accumulated_depreciation, dec!(5400));
        assert_eq!(figures.current_value, dec!(6600));
    }

    #[test]
    fn test_at_end_of_life_fully_depreciated() {
        let figures = straight_line(d(2020, 1, 1), 5, dec!(12000), dec!(10), d(2025, 1, 1));

        assert_eq!(figures.accumulated_depreciation, dec!(10800));
        assert_eq!(figures.current_value, dec!(1200));
        assert_eq!(figures.progress_pct, dec!(100));
    }

    #[test]
    fn test_far_past_end_of_life_caps() {
        // 20 years past end of life: identical to the end-of-life snapshot
        let figures = straight_line(d(2020, 1, 1), 5, dec!(12000), dec!(10), d(2045, 6, 1));

        assert_eq!(figures.accumulated_depreciation, dec!(10800));
        assert_eq!(figures.current_value, dec!(1200));
        assert_eq!(figures.progress_pct, dec!(100));
    }

    #[test]
    fn test_before_start_clamps_to_zero() {
        let figures = straight_line(d(2020, 1, 1), 5, dec!(12000), dec!(10), d(2019, 6, 1));

        assert_eq!(figures.used_months, 0);
        assert_eq!(figures.accumulated_depreciation, Decimal::ZERO);
        assert_eq!(figures.current_value, dec!(12000));
        assert_eq!(figures.progress_pct, Decimal::ZERO);
    }

    #[test]
    fn test_zero_useful_life_treated_as_one_year() {
        let figures = straight_line(d(2020, 1, 1), 0, dec!(1200), dec!(0), d(2020, 7, 1));

        assert_eq!(figures.total_months, 12);
        assert_eq!(figures.accumulated_depreciation, dec!(600));
    }

    #[test]
    fn test_zero_residual_depreciates_to_zero() {
        let figures = straight_line(d(2020, 1, 1), 3, dec!(900), dec!(0), d(2023, 1, 1));

        assert_eq!(figures.current_value, Decimal::ZERO);
        assert_eq!(figures.accumulated_depreciation, dec!(900));
    }

    #[test]
    fn test_full_residual_never_depreciates() {
        let figures = straight_line(d(2020, 1, 1), 3, dec!(900), dec!(100), d(2022, 1, 1));

        assert_eq!(figures.depreciable_value, Decimal::ZERO);
        assert_eq!(figures.accumulated_depreciation, Decimal::ZERO);
        assert_eq!(figures.current_value, dec!(900));
    }

    #[test]
    fn test_monotonic_in_time() {
        let dates = [
            d(2019, 12, 1),
            d(2020, 1, 1),
            d(2021, 8, 15),
            d(2023, 3, 3),
            d(2025, 1, 1),
            d(2030, 1, 1),
        ];
        let mut previous = Decimal::MIN;
        for date in dates {
            let figures = straight_line(d(2020, 1, 1), 5, dec!(12000), dec!(10), date);
            assert!(figures.accumulated_depreciation >= previous);
            previous = figures.accumulated_depreciation;
        }
    }

    #[test]
    fn test_current_value_never_below_residual() {
        for months_ahead in 0..200u32 {
            let today = crate::utils::date_utils::add_months(d(2020, 1, 1), months_ahead);
            let figures = straight_line(d(2020, 1, 1), 5, dec!(5000), dec!(20), today);
            assert!(figures.current_value >= figures.residual_value);
        }
    }
}
