//! Runtime view of an installed brand.
//!
//! Mirrors what the mobile client does at startup: read the injected
//! environment values, fall back to built-in defaults for anything missing,
//! and pick a light or dark palette.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

/// Parse `KEY=value` lines. Blank lines and `#` comments are skipped; the
/// value is everything after the first `=`.
pub fn parse_env(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeFeatures {
    pub dark_mode: bool,
    pub analytics: bool,
    pub push_notifications: bool,
    pub biometric: bool,
}

/// Brand values as the app sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeBrand {
    pub app_name: String,
    pub display_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub api_base_url: String,
    pub version_name: String,
    pub version_code: String,
    pub package_name: String,
    pub features: RuntimeFeatures,
}

impl RuntimeBrand {
    pub fn from_env(env: &BTreeMap<String, String>) -> Self {
        let text = |key: &str, fallback: &str| -> String {
            env.get(key).filter(|v| !v.is_empty()).cloned().unwrap_or_else(|| fallback.to_string())
        };
        let flag = |key: &str| env.get(key).is_some_and(|v| v == "true");

        Self {
            app_name: text("APP_NAME", "White Label App"),
            display_name: text("DISPLAY_NAME", "My App"),
            primary_color: text("PRIMARY_COLOR", "#2563eb"),
            secondary_color: text("SECONDARY_COLOR", "#7c3aed"),
            background_color: text("BACKGROUND_COLOR", "#ffffff"),
            text_color: text("TEXT_COLOR", "#1e293b"),
            api_base_url: text("API_BASE_URL", "https://api.example.com"),
            version_name: text("VERSION_NAME", "1.0.0"),
            version_code: text("VERSION_CODE", "1"),
            package_name: text("PACKAGE_NAME", "com.whitelabel.app"),
            features: RuntimeFeatures {
                dark_mode: flag("FEATURE_DARK_MODE"),
                analytics: flag("FEATURE_ANALYTICS"),
                push_notifications: flag("FEATURE_PUSH_NOTIFICATIONS"),
                biometric: flag("FEATURE_BIOMETRIC"),
            },
        }
    }

    pub fn palette(&self, mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Light => Palette {
                background: self.background_color.clone(),
                text: self.text_color.clone(),
                card: "#f8fafc".to_string(),
                border: "#e2e8f0".to_string(),
                accent: self.primary_color.clone(),
            },
            ThemeMode::Dark => Palette {
                background: "#1e293b".to_string(),
                text: "#f8fafc".to_string(),
                card: "#334155".to_string(),
                border: "#475569".to_string(),
                accent: self.primary_color.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Dark only when the stored preference asks for it and the brand allows it.
    pub fn resolve(brand: &RuntimeBrand, preference: Option<&str>) -> Self {
        if brand.features.dark_mode && preference.map(str::trim) == Some("dark") {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: String,
    pub text: String,
    pub card: String,
    pub border: String,
    pub accent: String,
}

/// Load a stored theme preference (`dark`/`light`).
///
/// Failures are logged and treated as "no preference".
pub fn load_theme_preference(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(body) => Some(body.trim().to_string()),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Error loading theme preference");
            None
        }
    }
}
