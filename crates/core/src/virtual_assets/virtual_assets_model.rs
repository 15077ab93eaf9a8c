//! Virtual asset domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::EXPIRING_SOON_DAYS;
use crate::utils::date_utils::days_between_inclusive;

/// Current lifecycle state of a virtual asset, derived from wall-clock time.
///
/// Always computed against the real current date, never against a displayed
/// statistics year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualAssetStatus {
    Active,
    /// Ends within the expiring-soon window (30 days).
    Expiring,
    Expired,
}

impl VirtualAssetStatus {
    /// Returns the wire string representation (snake_case).
    pub const fn as_str(&self) -> &'static str {
        match self {
            VirtualAssetStatus::Active => "active",
            VirtualAssetStatus::Expiring => "expiring",
            VirtualAssetStatus::Expired => "expired",
        }
    }
}

/// Domain model representing a time-limited subscription or membership.
///
/// The asset's value is consumed linearly over its inclusive date range;
/// all derived figures are recomputed on demand from the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAsset {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub category_name: String,

    /// Total cost over the asset's whole lifetime.
    pub total_amount: Decimal,
    /// Inclusive start of the covered period.
    pub start_date: NaiveDate,
    /// Inclusive end of the covered period.
    pub end_date: NaiveDate,

    pub description: Option<String>,
    /// Opaque credential strings, display-only.
    pub account_username: Option<String>,
    pub account_password: Option<String>,

    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl VirtualAsset {
    /// Inclusive day count of the covered period. ≤ 0 for inverted ranges.
    pub fn total_days(&self) -> i64 {
        days_between_inclusive(self.start_date, self.end_date)
    }

    /// Cost per covered day. Zero when the duration or amount is not positive.
    pub fn daily_cost(&self) -> Decimal {
        let total_days = self.total_days();
        if total_days <= 0 || self.total_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.total_amount / Decimal::from(total_days)
    }

    /// Days from `today` until the end date. Negative once expired.
    pub fn remaining_days(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    /// Share of the covered period already elapsed, as a percentage
    /// clamped to [0, 100].
    pub fn elapsed_pct(&self, today: NaiveDate) -> Decimal {
        let total_days = self.total_days();
        if total_days <= 0 {
            return Decimal::ZERO;
        }
        let elapsed = days_between_inclusive(self.start_date, today.min(self.end_date));
        let pct = Decimal::from(elapsed.max(0)) / Decimal::from(total_days) * Decimal::ONE_HUNDRED;
        pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    /// Lifecycle state relative to `today`.
    pub fn status(&self, today: NaiveDate) -> VirtualAssetStatus {
        let remaining = self.remaining_days(today);
        if remaining < 0 {
            VirtualAssetStatus::Expired
        } else if remaining <= EXPIRING_SOON_DAYS {
            VirtualAssetStatus::Expiring
        } else {
            VirtualAssetStatus::Active
        }
    }
}

/// Input model for creating a new virtual asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVirtualAsset {
    pub name: String,
    pub category_id: String,
    pub total_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub account_username: Option<String>,
    pub account_password: Option<String>,
}

/// Input model for updating an existing virtual asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAssetUpdate {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub total_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub account_username: Option<String>,
    pub account_password: Option<String>,
}
