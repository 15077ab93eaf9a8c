//! Expense domain models.
//!
//! Expenses hang off an asset (maintenance, repairs, accessories). They
//! are backend-aggregated and feed no client-side calculator.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing an expense recorded against an asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub asset_id: String,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub note: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Input model for recording a new expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub note: Option<String>,
}
