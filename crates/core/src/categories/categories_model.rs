//! Category domain models.

use serde::{Deserialize, Serialize};

/// Which asset family a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    #[default]
    Virtual,
    Fixed,
}

impl CategoryKind {
    /// Returns the wire string representation (snake_case).
    pub const fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Virtual => "virtual",
            CategoryKind::Fixed => "fixed",
        }
    }

    /// Parses a category kind from its wire string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "virtual" => Some(CategoryKind::Virtual),
            "fixed" => Some(CategoryKind::Fixed),
            _ => None,
        }
    }
}

/// Domain model representing an asset category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon key as stored by the backend; resolve with [`CategoryIcon::from_key`].
    pub icon: Option<String>,
    pub kind: CategoryKind,
}

impl Category {
    /// Resolves the category's icon key to a displayable glyph.
    pub fn resolved_icon(&self) -> CategoryIcon {
        self.icon
            .as_deref()
            .map(CategoryIcon::from_key)
            .unwrap_or(CategoryIcon::Other)
    }
}

/// Known category icon keys.
///
/// The set is closed: any unrecognized key maps to [`CategoryIcon::Other`]
/// so a newly added backend category can never break rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    Subscription,
    Membership,
    Software,
    Game,
    Education,
    Music,
    Video,
    Fitness,
    Cloud,
    House,
    Car,
    Computer,
    Phone,
    Camera,
    Furniture,
    Appliance,
    Other,
}

impl CategoryIcon {
    /// Maps a backend icon key to its variant; unknown keys fall back to `Other`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "subscription" => CategoryIcon::Subscription,
            "membership" => CategoryIcon::Membership,
            "software" => CategoryIcon::Software,
            "game" => CategoryIcon::Game,
            "education" => CategoryIcon::Education,
            "music" => CategoryIcon::Music,
            "video" => CategoryIcon::Video,
            "fitness" => CategoryIcon::Fitness,
            "cloud" => CategoryIcon::Cloud,
            "house" => CategoryIcon::House,
            "car" => CategoryIcon::Car,
            "computer" => CategoryIcon::Computer,
            "phone" => CategoryIcon::Phone,
            "camera" => CategoryIcon::Camera,
            "furniture" => CategoryIcon::Furniture,
            "appliance" => CategoryIcon::Appliance,
            _ => CategoryIcon::Other,
        }
    }

    /// Display glyph for the icon.
    pub const fn emoji(&self) -> &'static str {
        match self {
            CategoryIcon::Subscription => "📅",
            CategoryIcon::Membership => "🎫",
            CategoryIcon::Software => "💿",
            CategoryIcon::Game => "🎮",
            CategoryIcon::Education => "📚",
            CategoryIcon::Music => "🎵",
            CategoryIcon::Video => "🎬",
            CategoryIcon::Fitness => "💪",
            CategoryIcon::Cloud => "☁️",
            CategoryIcon::House => "🏠",
            CategoryIcon::Car => "🚗",
            CategoryIcon::Computer => "💻",
            CategoryIcon::Phone => "📱",
            CategoryIcon::Camera => "📷",
            CategoryIcon::Furniture => "🛋️",
            CategoryIcon::Appliance => "🔌",
            CategoryIcon::Other => "📦",
        }
    }
}
