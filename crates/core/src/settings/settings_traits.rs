use crate::errors::Result;
use crate::settings::{NotificationSettings, Preferences};
use async_trait::async_trait;

/// Trait for settings repository operations.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    async fn get_notification_settings(&self) -> Result<NotificationSettings>;
    async fn update_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings>;
    async fn get_preferences(&self) -> Result<Preferences>;
    async fn update_preferences(&self, preferences: &Preferences) -> Result<Preferences>;
}
