//! Fixed asset domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::depreciation::{straight_line, DepreciationFigures};
use crate::rent;
use crate::rent::RentDueProjection;

/// Usage state of a fixed asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FixedAssetStatus {
    #[default]
    InUse,
    Idle,
    Maintenance,
    Disposed,
    Rent,
    Sell,
}

impl FixedAssetStatus {
    /// Returns the wire string representation (snake_case).
    pub const fn as_str(&self) -> &'static str {
        match self {
            FixedAssetStatus::InUse => "in_use",
            FixedAssetStatus::Idle => "idle",
            FixedAssetStatus::Maintenance => "maintenance",
            FixedAssetStatus::Disposed => "disposed",
            FixedAssetStatus::Rent => "rent",
            FixedAssetStatus::Sell => "sell",
        }
    }

    /// Parses a status from its wire string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in_use" => Some(FixedAssetStatus::InUse),
            "idle" => Some(FixedAssetStatus::Idle),
            "maintenance" => Some(FixedAssetStatus::Maintenance),
            "disposed" => Some(FixedAssetStatus::Disposed),
            "rent" => Some(FixedAssetStatus::Rent),
            "sell" => Some(FixedAssetStatus::Sell),
            _ => None,
        }
    }
}

/// Supported depreciation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepreciationMethod {
    #[default]
    StraightLine,
}

/// Domain model representing a depreciable physical asset.
///
/// `current_value` and `accumulated_depreciation` may arrive from the
/// backend; [`FixedAsset::depreciation`] recomputes the full schedule from
/// the snapshot whenever derived figures are displayed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FixedAsset {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub category_name: String,

    pub original_value: Decimal,
    pub current_value: Option<Decimal>,
    /// Percent of original value that is never depreciated, 0-100.
    pub residual_rate: Decimal,
    pub purchase_date: NaiveDate,
    pub useful_life_years: u32,
    /// When depreciation starts; falls back to the purchase date.
    pub depreciation_start_date: Option<NaiveDate>,
    pub depreciation_method: DepreciationMethod,
    pub accumulated_depreciation: Option<Decimal>,

    pub status: FixedAssetStatus,
    /// Set once the asset is disposed of or sold.
    pub disposed_date: Option<NaiveDate>,

    // Rent sub-fields, only meaningful while status is `rent`
    pub rent_price: Option<Decimal>,
    pub rent_deposit: Option<Decimal>,
    pub rent_start_date: Option<NaiveDate>,
    pub rent_end_date: Option<NaiveDate>,
    /// Day of month the rent falls due, 1-28.
    pub rent_due_day: Option<u32>,
    pub tenant_name: Option<String>,
    pub tenant_phone: Option<String>,

    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl FixedAsset {
    /// Date depreciation is measured from.
    pub fn depreciation_start(&self) -> NaiveDate {
        self.depreciation_start_date.unwrap_or(self.purchase_date)
    }

    /// Recomputes the straight-line depreciation schedule as of `today`.
    pub fn depreciation(&self, today: NaiveDate) -> DepreciationFigures {
        straight_line(
            self.depreciation_start(),
            self.useful_life_years,
            self.original_value,
            self.residual_rate,
            today,
        )
    }

    /// Net book value as of `today`.
    pub fn net_value(&self, today: NaiveDate) -> Decimal {
        self.depreciation(today).current_value
    }

    /// True while the asset is rented out.
    pub fn is_rented(&self) -> bool {
        self.status == FixedAssetStatus::Rent
    }

    /// Rent income attributed to a single calendar month, zero unless the
    /// asset is rented and the month overlaps the rental window.
    pub fn monthly_rent_income(&self, year: i32, month: u32) -> Decimal {
        if !self.is_rented() {
            return Decimal::ZERO;
        }
        let Some(price) = self.rent_price else {
            return Decimal::ZERO;
        };
        let (start, end) = rent::effective_window(
            self.rent_start_date,
            self.rent_end_date,
            self.purchase_date,
            year,
        );
        rent::monthly_income(price, start, end, year, month)
    }

    /// Rent income attributed to a calendar year.
    pub fn yearly_rent_income(&self, year: i32) -> Decimal {
        if !self.is_rented() {
            return Decimal::ZERO;
        }
        let Some(price) = self.rent_price else {
            return Decimal::ZERO;
        };
        let (start, end) = rent::effective_window(
            self.rent_start_date,
            self.rent_end_date,
            self.purchase_date,
            year,
        );
        rent::yearly_income(price, start, end, year)
    }

    /// Projects the next rent due date, `None` when the asset is not
    /// rented, has no due day, or the lease has ended.
    pub fn next_rent_due(&self, today: NaiveDate) -> Option<RentDueProjection> {
        if !self.is_rented() {
            return None;
        }
        rent::next_due(self.rent_due_day?, today, self.rent_end_date)
    }
}

/// Input model for creating a new fixed asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFixedAsset {
    pub name: String,
    pub category_id: String,
    pub original_value: Decimal,
    pub residual_rate: Decimal,
    pub purchase_date: NaiveDate,
    pub useful_life_years: u32,
    pub depreciation_start_date: Option<NaiveDate>,
    pub depreciation_method: DepreciationMethod,
    pub status: FixedAssetStatus,
    pub disposed_date: Option<NaiveDate>,
    pub rent_price: Option<Decimal>,
    pub rent_deposit: Option<Decimal>,
    pub rent_start_date: Option<NaiveDate>,
    pub rent_end_date: Option<NaiveDate>,
    pub rent_due_day: Option<u32>,
    pub tenant_name: Option<String>,
    pub tenant_phone: Option<String>,
}

/// Input model for updating an existing fixed asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedAssetUpdate {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub original_value: Decimal,
    pub residual_rate: Decimal,
    pub purchase_date: NaiveDate,
    pub useful_life_years: u32,
    pub depreciation_start_date: Option<NaiveDate>,
    pub depreciation_method: DepreciationMethod,
    pub status: FixedAssetStatus,
    pub disposed_date: Option<NaiveDate>,
    pub rent_price: Option<Decimal>,
    pub rent_deposit: Option<Decimal>,
    pub rent_start_date: Option<NaiveDate>,
    pub rent_end_date: Option<NaiveDate>,
    pub rent_due_day: Option<u32>,
    pub tenant_name: Option<String>,
    pub tenant_phone: Option<String>,
}
