//! Depreciation result model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a straight-line depreciation schedule at a point in time.
///
/// All figures are derived; nothing here is persisted. `current_value`
/// never drops below `residual_value` and `progress_pct` is clamped to
/// [0, 100] regardless of how far the evaluation date sits outside the
/// useful life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationFigures {
    /// Date the useful life ends (start + useful life years).
    pub end_of_life: NaiveDate,
    /// Whole months depreciated so far, clamped to ≥ 0.
    pub used_months: i64,
    /// Useful life in months.
    pub total_months: i64,
    /// Share of the useful life consumed, in percent.
    pub progress_pct: Decimal,
    /// Un-depreciable floor value.
    pub residual_value: Decimal,
    /// Original value minus the residual floor.
    pub depreciable_value: Decimal,
    pub monthly_depreciation: Decimal,
    pub annual_depreciation: Decimal,
    /// Depreciation taken to date, capped at the depreciable value.
    pub accumulated_depreciation: Decimal,
    /// Net book value as of the evaluation date.
    pub current_value: Decimal,
}
