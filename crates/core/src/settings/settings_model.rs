//! Settings domain models.

use serde::{Deserialize, Serialize};

/// Expiry/rent reminder configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub expiry_reminder_enabled: bool,
    /// Days before a virtual asset's end date the reminder fires.
    pub reminder_days: u32,
    pub rent_reminder_enabled: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            expiry_reminder_enabled: true,
            reminder_days: 7,
            rent_reminder_enabled: true,
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub currency_symbol: Option<String>,
    pub theme: Option<String>,
}
