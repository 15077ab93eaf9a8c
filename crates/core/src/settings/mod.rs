//! User settings - notification preferences and display preferences.

mod settings_model;
mod settings_traits;

pub use settings_model::{NotificationSettings, Preferences};
pub use settings_traits::SettingsRepositoryTrait;
