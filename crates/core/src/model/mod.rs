//! Core data model for brand configurations.
//!
//! A brand is a flat record of identifying strings plus three fixed groups:
//! - `colors`: six named theme colors
//! - `features`: four boolean feature flags
//! - `assets`: three optional embedded images (data URLs)
//!
//! The groups are plain structs rather than maps so that their key sets can
//! never grow or shrink; updates can only replace values.

pub mod asset;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque, stable identifier of a brand.
///
/// Ids generated by the store are decimal millisecond timestamps, but any
/// string is accepted when reading documents. Numeric JSON ids are read as
/// their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BrandId(String);

impl BrandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is a generated (decimal) id.
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BrandId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for BrandId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for BrandId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => BrandId(s),
            Raw::Number(n) => BrandId(n.to_string()),
        })
    }
}

/// Named keys of the `colors` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Primary,
    Secondary,
    Background,
    Surface,
    Text,
    TextSecondary,
}

impl ColorKey {
    pub const ALL: [ColorKey; 6] = [
        ColorKey::Primary,
        ColorKey::Secondary,
        ColorKey::Background,
        ColorKey::Surface,
        ColorKey::Text,
        ColorKey::TextSecondary,
    ];

    /// Field name as it appears in documents and dotted paths.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorKey::Primary => "primary",
            ColorKey::Secondary => "secondary",
            ColorKey::Background => "background",
            ColorKey::Surface => "surface",
            ColorKey::Text => "text",
            ColorKey::TextSecondary => "textSecondary",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Named keys of the `features` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKey {
    DarkMode,
    Analytics,
    PushNotifications,
    Biometric,
}

impl FeatureKey {
    pub const ALL: [FeatureKey; 4] = [
        FeatureKey::DarkMode,
        FeatureKey::Analytics,
        FeatureKey::PushNotifications,
        FeatureKey::Biometric,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKey::DarkMode => "darkMode",
            FeatureKey::Analytics => "analytics",
            FeatureKey::PushNotifications => "pushNotifications",
            FeatureKey::Biometric => "biometric",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Named slots of the `assets` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    Icon,
    Splash,
    Logo,
}

impl AssetSlot {
    pub const ALL: [AssetSlot; 3] = [AssetSlot::Icon, AssetSlot::Splash, AssetSlot::Logo];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetSlot::Icon => "icon",
            AssetSlot::Splash => "splash",
            AssetSlot::Logo => "logo",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Theme colors of a brand. Values are free-form color strings (usually hex).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
}

impl BrandColors {
    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::Secondary => &self.secondary,
            ColorKey::Background => &self.background,
            ColorKey::Surface => &self.surface,
            ColorKey::Text => &self.text,
            ColorKey::TextSecondary => &self.text_secondary,
        }
    }

    pub fn set(&mut self, key: ColorKey, value: String) {
        let slot = match key {
            ColorKey::Primary => &mut self.primary,
            ColorKey::Secondary => &mut self.secondary,
            ColorKey::Background => &mut self.background,
            ColorKey::Surface => &mut self.surface,
            ColorKey::Text => &mut self.text,
            ColorKey::TextSecondary => &mut self.text_secondary,
        };
        *slot = value;
    }
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: "#7c3aed".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f8fafc".to_string(),
            text: "#1e293b".to_string(),
            text_secondary: "#64748b".to_string(),
        }
    }
}

/// Boolean feature flags of a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandFeatures {
    pub dark_mode: bool,
    pub analytics: bool,
    pub push_notifications: bool,
    pub biometric: bool,
}

impl BrandFeatures {
    pub fn get(&self, key: FeatureKey) -> bool {
        match key {
            FeatureKey::DarkMode => self.dark_mode,
            FeatureKey::Analytics => self.analytics,
            FeatureKey::PushNotifications => self.push_notifications,
            FeatureKey::Biometric => self.biometric,
        }
    }

    pub fn set(&mut self, key: FeatureKey, value: bool) {
        match key {
            FeatureKey::DarkMode => self.dark_mode = value,
            FeatureKey::Analytics => self.analytics = value,
            FeatureKey::PushNotifications => self.push_notifications = value,
            FeatureKey::Biometric => self.biometric = value,
        }
    }
}

impl Default for BrandFeatures {
    fn default() -> Self {
        Self { dark_mode: true, analytics: true, push_notifications: true, biometric: false }
    }
}

/// Embedded image assets, each either absent or a `data:` URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAssets {
    pub icon: Option<String>,
    pub splash: Option<String>,
    pub logo: Option<String>,
}

impl BrandAssets {
    pub fn get(&self, slot: AssetSlot) -> Option<&str> {
        match slot {
            AssetSlot::Icon => self.icon.as_deref(),
            AssetSlot::Splash => self.splash.as_deref(),
            AssetSlot::Logo => self.logo.as_deref(),
        }
    }

    pub fn set(&mut self, slot: AssetSlot, value: Option<String>) {
        match slot {
            AssetSlot::Icon => self.icon = value,
            AssetSlot::Splash => self.splash = value,
            AssetSlot::Logo => self.logo = value,
        }
    }
}

/// A single white-label brand configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    pub id: BrandId,
    pub app_name: String,
    pub display_name: String,
    pub package_name: String,
    pub bundle_id: String,
    pub version: String,
    pub version_code: u32,
    pub colors: BrandColors,
    pub features: BrandFeatures,
    pub api_base_url: String,
    pub assets: BrandAssets,
}

impl BrandConfig {
    /// Defaulted record for the brand at 1-based position `ordinal`.
    pub fn with_defaults(id: BrandId, ordinal: usize) -> Self {
        Self {
            id,
            app_name: format!("App {ordinal}"),
            display_name: format!("Brand {ordinal}"),
            package_name: format!("com.brand{ordinal}.app"),
            bundle_id: format!("com.brand{ordinal}.app"),
            version: "1.0.0".to_string(),
            version_code: 1,
            colors: BrandColors::default(),
            features: BrandFeatures::default(),
            api_base_url: String::new(),
            assets: BrandAssets::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_id_reads_numbers_and_strings() {
        let from_number: BrandId = serde_json::from_str("1700000000000").unwrap();
        let from_text: BrandId = serde_json::from_str("\"b1\"").unwrap();
        assert_eq!(from_number.as_str(), "1700000000000");
        assert_eq!(from_number.as_number(), Some(1_700_000_000_000));
        assert_eq!(from_text.as_str(), "b1");
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"1700000000000\"");
    }

    #[test]
    fn brand_serializes_with_camel_case_groups() {
        let brand = BrandConfig::with_defaults(BrandId::new("7"), 2);
        let value = serde_json::to_value(&brand).unwrap();
        assert_eq!(value["displayName"], "Brand 2");
        assert_eq!(value["colors"]["textSecondary"], "#64748b");
        assert_eq!(value["features"]["pushNotifications"], true);
        assert!(value["assets"]["logo"].is_null());
    }

    #[test]
    fn key_names_round_trip_through_parse() {
        for key in ColorKey::ALL {
            assert_eq!(ColorKey::parse(key.as_str()), Some(key));
        }
        for key in FeatureKey::ALL {
            assert_eq!(FeatureKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(AssetSlot::parse("banner"), None);
    }
}
