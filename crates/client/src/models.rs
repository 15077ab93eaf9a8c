//! Wire models specific to the REST API surface.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use timevalue_core::statistics::CategoryBreakdown;

/// The authenticated user, as persisted alongside the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    /// WeChat openid when the account is WeChat-bound.
    pub openid: Option<String>,
}

/// Response of the login endpoints (password, OAuth code, QR confirm).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_info: UserInfo,
}

/// A freshly created QR login session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeSession {
    pub qr_code_id: String,
    /// URL encoded into the rendered QR image.
    pub qr_code_url: String,
}

/// Backend-reported scan state of a QR login session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QrScanStatus {
    Pending,
    Scanned,
    Confirmed,
    Expired,
}

/// One poll result for a QR login session. Token and user are only
/// present once the status is `confirmed`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeStatus {
    pub status: QrScanStatus,
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// WeChat JSSDK signature bundle for the current page URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsSdkConfig {
    pub app_id: String,
    pub timestamp: i64,
    pub nonce_str: String,
    pub signature: String,
}

/// Backend-computed dashboard overview.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub virtual_asset_count: u32,
    pub fixed_asset_count: u32,
    pub total_virtual_amount: Decimal,
    pub total_fixed_value: Decimal,
    /// Virtual assets ending within the expiring-soon window.
    pub expiring_count: u32,
    pub generated_at: Option<NaiveDateTime>,
}

/// Backend-computed monthly expense report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub total_expense: Decimal,
    pub by_category: Vec<CategoryBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_scan_status_wire_names() {
        assert_eq!(
            serde_json::from_str::<QrScanStatus>("\"pending\"").unwrap(),
            QrScanStatus::Pending
        );
        assert_eq!(
            serde_json::from_str::<QrScanStatus>("\"confirmed\"").unwrap(),
            QrScanStatus::Confirmed
        );
    }

    #[test]
    fn test_monthly_report_decoding() {
        use rust_decimal_macros::dec;

        let json = r#"{
            "year": 2024,
            "month": 3,
            "totalExpense": 321.5,
            "byCategory": [{"categoryName": "Electronics", "amount": 321.5}]
        }"#;
        let report: MonthlyReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.month, 3);
        assert_eq!(report.total_expense, dec!(321.5));
        assert_eq!(report.by_category[0].category_name, "Electronics");
    }

    #[test]
    fn test_login_response_decoding() {
        let json = r#"{
            "token": "jwt-token",
            "userInfo": {"id": "u1", "nickname": "Kai", "avatarUrl": null, "openid": "o-1"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "jwt-token");
        assert_eq!(response.user_info.id, "u1");
    }
}
