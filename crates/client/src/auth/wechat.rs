//! WeChat OAuth redirect construction.
//!
//! WeChat itself is an opaque identity provider: this module only builds
//! the authorization URL the browser is sent to. The callback `code` is
//! exchanged for a token by the backend via `ApiClient::wechat_login`.

use serde::{Deserialize, Serialize};

/// WeChat OAuth authorization endpoint.
const OAUTH_AUTHORIZE_URL: &str = "https://open.weixin.qq.com/connect/oauth2/authorize";

/// OAuth scope requested from WeChat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WechatScope {
    /// Silent authorization, openid only.
    Base,
    /// Interactive authorization including profile data.
    #[default]
    UserInfo,
}

impl WechatScope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            WechatScope::Base => "snsapi_base",
            WechatScope::UserInfo => "snsapi_userinfo",
        }
    }
}

/// Static configuration for the OAuth redirect flow.
#[derive(Debug, Clone)]
pub struct WechatConfig {
    pub app_id: String,
    /// Where WeChat redirects back to with the `code` query parameter.
    pub redirect_uri: String,
    pub scope: WechatScope,
}

/// Builds the WeChat authorization URL for the given anti-CSRF `state`.
///
/// The redirect URI is percent-encoded; the `#wechat_redirect` fragment is
/// required by WeChat and must come last.
pub fn authorize_url(config: &WechatConfig, state: &str) -> String {
    format!(
        "{}?appid={}&redirect_uri={}&response_type=code&scope={}&state={}#wechat_redirect",
        OAUTH_AUTHORIZE_URL,
        config.app_id,
        urlencoding::encode(&config.redirect_uri),
        config.scope.as_str(),
        state
    )
}

/// Generates a fresh opaque `state` value for one OAuth round trip.
pub fn generate_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WechatConfig {
        WechatConfig {
            app_id: "wx123abc".to_string(),
            redirect_uri: "https://timevalue.example.com/auth/callback".to_string(),
            scope: WechatScope::UserInfo,
        }
    }

    #[test]
    fn test_authorize_url_shape() {
        let url = authorize_url(&config(), "state-1");
        assert!(url.starts_with("https://open.weixin.qq.com/connect/oauth2/authorize?"));
        assert!(url.contains("appid=wx123abc"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Ftimevalue.example.com%2Fauth%2Fcallback"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=snsapi_userinfo"));
        assert!(url.contains("state=state-1"));
        assert!(url.ends_with("#wechat_redirect"));
    }

    #[test]
    fn test_base_scope() {
        let mut config = config();
        config.scope = WechatScope::Base;
        assert!(authorize_url(&config, "s").contains("scope=snsapi_base"));
    }

    #[test]
    fn test_generate_state_unique() {
        assert_ne!(generate_state(), generate_state());
        assert!(!generate_state().contains('-'));
    }
}
