//! Authentication flows: WeChat OAuth redirect and QR-code polling login.

mod qr_login;
mod wechat;

pub use qr_login::{QrLoginApi, QrLoginController, QrLoginState};
pub use wechat::{authorize_url, generate_state, WechatConfig, WechatScope};
