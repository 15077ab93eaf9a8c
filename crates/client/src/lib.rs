//! TimeValue Client - REST API access for the TimeValue backend.
//!
//! This crate provides the HTTP client (bearer-token auth, uniform
//! `{code, message, data}` envelope), the explicit session object that
//! replaces ad hoc local storage, WeChat login flows (OAuth redirect and
//! QR-code polling), and implementations of the core repository traits
//! over the REST API.

pub mod auth;
pub mod client;
pub mod models;
pub mod repositories;
pub mod session;

// Re-export commonly used types
pub use auth::{
    authorize_url, generate_state, QrLoginApi, QrLoginController, QrLoginState, WechatConfig,
    WechatScope,
};
pub use client::{ApiClient, ApiClientConfig};
pub use models::{
    DashboardSummary, JsSdkConfig, LoginResponse, MonthlyReport, QrCodeSession, QrCodeStatus,
    QrScanStatus, UserInfo,
};
pub use repositories::{
    ApiCategoryRepository, ApiExpenseRepository, ApiFixedAssetRepository, ApiProjectRepository,
    ApiSettingsRepository, ApiVirtualAssetRepository,
};
pub use session::{AuthState, MemorySessionStore, Session, SessionStoreTrait};
