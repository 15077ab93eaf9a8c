//! HTTP client for the TimeValue REST API.
//!
//! All endpoints share the `{ code, message, data }` envelope with
//! `code == 200` signalling success, bearer-token authentication, and the
//! error taxonomy mapped in [`ApiClient::map_status`]: business errors
//! surface the backend message verbatim, a 401 tears the session down
//! before the error is returned, and everything else degrades to a generic
//! category. Failed requests are never retried here; retrying is a user
//! action.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use timevalue_core::categories::{Category, CategoryKind};
use timevalue_core::errors::{ApiError, Error, Result};
use timevalue_core::expenses::{Expense, NewExpense};
use timevalue_core::fixed_assets::{FixedAsset, FixedAssetUpdate, NewFixedAsset};
use timevalue_core::projects::{NewProject, Project};
use timevalue_core::settings::{NotificationSettings, Preferences};
use timevalue_core::virtual_assets::{NewVirtualAsset, VirtualAsset, VirtualAssetUpdate};

use crate::models::{
    DashboardSummary, JsSdkConfig, LoginResponse, MonthlyReport, QrCodeSession, QrCodeStatus,
    UserInfo,
};
use crate::session::Session;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base path all resource routes hang off.
const API_PATH: &str = "/api";

/// Configuration for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Origin of the backend, e.g. `https://timevalue.example.com`.
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClientConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Uniform response envelope returned by every endpoint.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
struct ApiEnvelope<T> {
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

/// HTTP client for the TimeValue REST API.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// initialized.
    pub fn new(config: ApiClientConfig, session: Arc<Session>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session this client reads its bearer token from.
    pub fn session(&self) -> Arc<Session> {
        self.session.clone()
    }

    /// Create default headers for API requests, attaching the bearer
    /// token when a session is established.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.session.token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PATH, path)
    }

    /// Maps a non-success HTTP status to the error taxonomy. A 401 tears
    /// the session down as a side effect.
    fn map_status(&self, status: StatusCode, message: Option<String>) -> ApiError {
        match status {
            StatusCode::BAD_REQUEST => {
                ApiError::Business(message.unwrap_or_else(|| "Invalid request".to_string()))
            }
            StatusCode::UNAUTHORIZED => {
                debug!("[Api] 401 received, tearing down session");
                self.session.clear();
                ApiError::Unauthorized
            }
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => {
                ApiError::NotFound(message.unwrap_or_else(|| "Resource not found".to_string()))
            }
            status => ApiError::Server(message.unwrap_or_else(|| format!("HTTP {}", status))),
        }
    }

    /// Sends a request and decodes the envelope, expecting a `data`
    /// payload.
    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let envelope = self.request_envelope(method, path, body).await?;
        envelope.data.ok_or_else(|| {
            ApiError::Decode(format!("Missing data in response from {}", path)).into()
        })
    }

    /// Sends a request and decodes the envelope, discarding any payload.
    async fn request_unit<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()> {
        self.request_envelope::<B, serde_json::Value>(method, path, body)
            .await?;
        Ok(())
    }

    async fn request_envelope<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>> {
        let url = self.url(path);
        debug!("[Api] {} {}", method, url);

        let mut builder = self.client.request(method, &url).headers(self.headers());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // The envelope is present on most error responses too; decode it
        // for the message before mapping the status
        let envelope: Option<ApiEnvelope<T>> = serde_json::from_str(&text).ok();

        if !status.is_success() {
            let message = envelope.and_then(|e| e.message);
            return Err(self.map_status(status, message).into());
        }

        let envelope = envelope.ok_or_else(|| {
            ApiError::Decode(format!(
                "Invalid response body: {}",
                text.chars().take(200).collect::<String>()
            ))
        })?;

        if envelope.code != 200 {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("Request failed with code {}", envelope.code));
            return Err(ApiError::Business(message).into());
        }

        Ok(envelope)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.request_unit::<()>(Method::DELETE, path, None).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Auth Endpoints
    // ─────────────────────────────────────────────────────────────────────

    /// Password login. Establishes the session on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({ "username": username, "password": password });
        let response: LoginResponse = self.post("/auth/login", &body).await?;
        self.session
            .establish(response.token.clone(), response.user_info.clone());
        Ok(response)
    }

    /// Logout. The session is cleared even when the backend call fails.
    pub async fn logout(&self) -> Result<()> {
        let result = self
            .request_unit::<()>(Method::POST, "/auth/logout", None)
            .await;
        self.session.clear();
        result
    }

    /// The authenticated user's profile.
    pub async fn current_user(&self) -> Result<UserInfo> {
        self.get("/auth/me").await
    }

    // ─────────────────────────────────────────────────────────────────────
    // WeChat Endpoints
    // ─────────────────────────────────────────────────────────────────────

    /// Exchanges an OAuth callback `code` for a token and establishes the
    /// session.
    pub async fn wechat_login(&self, code: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({ "code": code });
        let response: LoginResponse = self.post("/wechat/login", &body).await?;
        self.session
            .establish(response.token.clone(), response.user_info.clone());
        Ok(response)
    }

    /// JSSDK signature bundle for the given page URL.
    pub async fn wechat_jssdk_config(&self, page_url: &str) -> Result<JsSdkConfig> {
        self.get(&format!(
            "/wechat/jssdk-config?url={}",
            urlencoding::encode(page_url)
        ))
        .await
    }

    /// Creates a QR-code login session.
    pub async fn create_qr_session(&self) -> Result<QrCodeSession> {
        self.request::<(), QrCodeSession>(Method::POST, "/wechat/qrcode", None)
            .await
    }

    /// Polls a QR-code login session.
    pub async fn qr_session_status(&self, qr_code_id: &str) -> Result<QrCodeStatus> {
        self.get(&format!("/wechat/qrcode/{}/status", qr_code_id))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Asset Endpoints
    // ─────────────────────────────────────────────────────────────────────

    pub async fn list_virtual_assets(&self) -> Result<Vec<VirtualAsset>> {
        self.get("/assets/virtual").await
    }

    pub async fn get_virtual_asset(&self, asset_id: &str) -> Result<VirtualAsset> {
        self.get(&format!("/assets/virtual/{}", asset_id)).await
    }

    pub async fn create_virtual_asset(&self, new_asset: &NewVirtualAsset) -> Result<VirtualAsset> {
        self.post("/assets/virtual", new_asset).await
    }

    pub async fn update_virtual_asset(&self, update: &VirtualAssetUpdate) -> Result<VirtualAsset> {
        self.put(&format!("/assets/virtual/{}", update.id), update)
            .await
    }

    pub async fn delete_virtual_asset(&self, asset_id: &str) -> Result<()> {
        self.delete(&format!("/assets/virtual/{}", asset_id)).await
    }

    /// Virtual assets ending within the next `within_days` days.
    pub async fn list_expiring_assets(&self, within_days: i64) -> Result<Vec<VirtualAsset>> {
        self.get(&format!("/assets/expiring?days={}", within_days))
            .await
    }

    pub async fn list_fixed_assets(&self) -> Result<Vec<FixedAsset>> {
        self.get("/assets/fixed").await
    }

    pub async fn get_fixed_asset(&self, asset_id: &str) -> Result<FixedAsset> {
        self.get(&format!("/assets/fixed/{}", asset_id)).await
    }

    pub async fn create_fixed_asset(&self, new_asset: &NewFixedAsset) -> Result<FixedAsset> {
        self.post("/assets/fixed", new_asset).await
    }

    pub async fn update_fixed_asset(&self, update: &FixedAssetUpdate) -> Result<FixedAsset> {
        self.put(&format!("/assets/fixed/{}", update.id), update)
            .await
    }

    pub async fn delete_fixed_asset(&self, asset_id: &str) -> Result<()> {
        self.delete(&format!("/assets/fixed/{}", asset_id)).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Expense Endpoints (nested under assets)
    // ─────────────────────────────────────────────────────────────────────

    pub async fn list_expenses(&self, asset_id: &str) -> Result<Vec<Expense>> {
        self.get(&format!("/assets/{}/expenses", asset_id)).await
    }

    pub async fn create_expense(
        &self,
        asset_id: &str,
        new_expense: &NewExpense,
    ) -> Result<Expense> {
        self.post(&format!("/assets/{}/expenses", asset_id), new_expense)
            .await
    }

    pub async fn delete_expense(&self, asset_id: &str, expense_id: &str) -> Result<()> {
        self.delete(&format!("/assets/{}/expenses/{}", asset_id, expense_id))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Category & Project Endpoints
    // ─────────────────────────────────────────────────────────────────────

    pub async fn list_categories(&self, kind: CategoryKind) -> Result<Vec<Category>> {
        self.get(&format!("/categories?kind={}", kind.as_str()))
            .await
    }

    pub async fn create_category(
        &self,
        name: &str,
        icon: Option<&str>,
        kind: CategoryKind,
    ) -> Result<Category> {
        let body = serde_json::json!({ "name": name, "icon": icon, "kind": kind });
        self.post("/categories", &body).await
    }

    pub async fn delete_category(&self, category_id: &str) -> Result<()> {
        self.delete(&format!("/categories/{}", category_id)).await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get("/projects").await
    }

    pub async fn create_project(&self, new_project: &NewProject) -> Result<Project> {
        self.post("/projects", new_project).await
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.delete(&format!("/projects/{}", project_id)).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Settings, Reports & Analytics Endpoints
    // ─────────────────────────────────────────────────────────────────────

    pub async fn get_notification_settings(&self) -> Result<NotificationSettings> {
        self.get("/notification-settings").await
    }

    pub async fn update_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings> {
        self.put("/notification-settings", settings).await
    }

    pub async fn get_preferences(&self) -> Result<Preferences> {
        self.get("/preferences").await
    }

    pub async fn update_preferences(&self, preferences: &Preferences) -> Result<Preferences> {
        self.put("/preferences", preferences).await
    }

    /// Backend-computed monthly expense report.
    pub async fn get_monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReport> {
        self.get(&format!("/reports/monthly?year={}&month={}", year, month))
            .await
    }

    /// Backend-computed dashboard overview.
    pub async fn get_dashboard(&self) -> Result<DashboardSummary> {
        self.get("/analytics/dashboard").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;

    fn client() -> ApiClient {
        ApiClient::new(
            ApiClientConfig::new("https://timevalue.example.com/"),
            Arc::new(Session::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_client_url_normalization() {
        let client = client();
        assert_eq!(client.base_url, "https://timevalue.example.com");
        assert_eq!(
            client.url("/assets/virtual"),
            "https://timevalue.example.com/api/assets/virtual"
        );
    }

    #[test]
    fn test_headers_without_session_have_no_auth() {
        let client = client();
        assert!(client.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_carry_bearer_token() {
        let client = client();
        client.session().establish(
            "tok-123".to_string(),
            UserInfo {
                id: "u1".to_string(),
                nickname: None,
                avatar_url: None,
                openid: None,
            },
        );
        let headers = client.headers();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer tok-123"
        );
    }

    #[test]
    fn test_envelope_success_decoding() {
        let json = r#"{"code":200,"message":"ok","data":{"id":"c1","name":"X","icon":null,"kind":"virtual"}}"#;
        let envelope: ApiEnvelope<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.data.unwrap().name, "X");
    }

    #[test]
    fn test_envelope_error_without_data() {
        let json = r#"{"code":400,"message":"Name is required"}"#;
        let envelope: ApiEnvelope<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, 400);
        assert_eq!(envelope.message.as_deref(), Some("Name is required"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_map_status_business_error_keeps_message() {
        let client = client();
        let error = client.map_status(StatusCode::BAD_REQUEST, Some("Too long".to_string()));
        assert!(matches!(error, ApiError::Business(m) if m == "Too long"));
    }

    #[test]
    fn test_map_status_unauthorized_tears_down_session() {
        let client = client();
        client.session().establish(
            "tok".to_string(),
            UserInfo {
                id: "u1".to_string(),
                nickname: None,
                avatar_url: None,
                openid: None,
            },
        );
        let error = client.map_status(StatusCode::UNAUTHORIZED, None);
        assert!(matches!(error, ApiError::Unauthorized));
        assert!(!client.session().is_authenticated());
    }

    #[test]
    fn test_map_status_categories() {
        let client = client();
        assert!(matches!(
            client.map_status(StatusCode::FORBIDDEN, None),
            ApiError::Forbidden
        ));
        assert!(matches!(
            client.map_status(StatusCode::NOT_FOUND, None),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            client.map_status(StatusCode::INTERNAL_SERVER_ERROR, Some("boom".to_string())),
            ApiError::Server(m) if m == "boom"
        ));
    }
}
