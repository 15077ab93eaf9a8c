//! Tests for fixed asset models and their derived figures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixed_assets::{FixedAsset, FixedAssetStatus};
use crate::rent::RentDueUrgency;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn camera() -> FixedAsset {
    FixedAsset {
        id: "fa-1".to_string(),
        name: "Camera".to_string(),
        category_id: "cat-2".to_string(),
        category_name: "Electronics".to_string(),
        original_value: dec!(6000),
        residual_rate: dec!(10),
        purchase_date: d(2022, 1, 1),
        useful_life_years: 5,
        status: FixedAssetStatus::InUse,
        ..Default::default()
    }
}

fn rented_flat() -> FixedAsset {
    FixedAsset {
        id: "fa-2".to_string(),
        name: "Flat".to_string(),
        category_id: "cat-3".to_string(),
        category_name: "Property".to_string(),
        original_value: dec!(500000),
        residual_rate: dec!(30),
        purchase_date: d(2020, 1, 1),
        useful_life_years: 40,
        status: FixedAssetStatus::Rent,
        rent_price: Some(dec!(2000)),
        rent_start_date: Some(d(2024, 3, 1)),
        rent_end_date: Some(d(2025, 2, 28)),
        rent_due_day: Some(15),
        tenant_name: Some("Tenant".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_status_serialization() {
    assert_eq!(
        serde_json::to_string(&FixedAssetStatus::InUse).unwrap(),
        "\"in_use\""
    );
    assert_eq!(
        serde_json::to_string(&FixedAssetStatus::Rent).unwrap(),
        "\"rent\""
    );
}

#[test]
fn test_status_round_trip() {
    for status in [
        FixedAssetStatus::InUse,
        FixedAssetStatus::Idle,
        FixedAssetStatus::Maintenance,
        FixedAssetStatus::Disposed,
        FixedAssetStatus::Rent,
        FixedAssetStatus::Sell,
    ] {
        assert_eq!(FixedAssetStatus::from_str(status.as_str()), Some(status));
    }
    assert_eq!(FixedAssetStatus::from_str("scrapped"), None);
}

#[test]
fn test_depreciation_start_falls_back_to_purchase() {
    let mut asset = camera();
    assert_eq!(asset.depreciation_start(), d(2022, 1, 1));

    asset.depreciation_start_date = Some(d(2022, 6, 1));
    assert_eq!(asset.depreciation_start(), d(2022, 6, 1));
}

#[test]
fn test_net_value_midlife() {
    // 6000, 10% residual, 5y life: depreciable 5400, 90/month; 12 months in
    let net = camera().net_value(d(2023, 1, 1));
    assert_eq!(net, dec!(4920));
}

#[test]
fn test_monthly_rent_income_requires_rent_status() {
    let mut asset = rented_flat();
    assert_eq!(asset.monthly_rent_income(2024, 6), dec!(2000));

    asset.status = FixedAssetStatus::Idle;
    assert_eq!(asset.monthly_rent_income(2024, 6), Decimal::ZERO);
}

#[test]
fn test_monthly_rent_income_outside_lease() {
    let asset = rented_flat();
    assert_eq!(asset.monthly_rent_income(2024, 2), Decimal::ZERO);
    assert_eq!(asset.monthly_rent_income(2025, 3), Decimal::ZERO);
}

#[test]
fn test_yearly_rent_income_counts_touched_months() {
    // Lease Mar 2024 .. Feb 2025: 2024 sees Mar..Dec = 10 months
    assert_eq!(rented_flat().yearly_rent_income(2024), dec!(20000));
    // 2025 sees Jan..Feb = 2 months
    assert_eq!(rented_flat().yearly_rent_income(2025), dec!(4000));
}

#[test]
fn test_yearly_rent_income_defaults_window() {
    let mut asset = rented_flat();
    asset.rent_start_date = None;
    asset.rent_end_date = None;
    // Defaults: purchase date .. year end, so all 12 months of 2024
    assert_eq!(asset.yearly_rent_income(2024), dec!(24000));
}

#[test]
fn test_next_rent_due_projection() {
    let asset = rented_flat();
    let due = asset.next_rent_due(d(2024, 6, 10)).unwrap();
    assert_eq!(due.due_date, d(2024, 6, 15));
    assert_eq!(due.days_until, 5);
    assert_eq!(due.urgency, RentDueUrgency::Soon);
}

#[test]
fn test_next_rent_due_none_when_not_rented() {
    assert!(camera().next_rent_due(d(2024, 6, 10)).is_none());
}

#[test]
fn test_next_rent_due_none_past_lease() {
    // Lease ends Feb 2025; from Feb 20 the candidate is Mar 15, past the end
    let asset = rented_flat();
    assert!(asset.next_rent_due(d(2025, 2, 20)).is_none());
}

#[test]
fn test_wire_format_camel_case() {
    let json = serde_json::to_string(&rented_flat()).unwrap();
    assert!(json.contains("\"originalValue\""));
    assert!(json.contains("\"residualRate\""));
    assert!(json.contains("\"rentDueDay\""));
    assert!(json.contains("\"status\":\"rent\""));
}
