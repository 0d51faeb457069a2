use thiserror::Error;

use crate::model::{AssetSlot, BrandConfig, ColorKey, FeatureKey};

/// Error type for turning a dotted field path and a raw value into an update.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Unknown key '{key}' in group '{group}'")]
    UnknownKey { group: String, key: String },

    #[error("Field '{0}' is a group; address one of its keys (e.g. '{0}.<key>')")]
    GroupPath(String),

    #[error("Field 'id' cannot be changed")]
    ImmutableId,

    #[error("Invalid value '{value}' for '{path}': {reason}")]
    InvalidValue { path: String, value: String, reason: &'static str },
}

/// A single field replacement on a brand.
///
/// Each variant addresses exactly one field, so applying an update can never
/// add or drop keys from the `colors`/`features`/`assets` groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    AppName(String),
    DisplayName(String),
    PackageName(String),
    BundleId(String),
    Version(String),
    VersionCode(u32),
    ApiBaseUrl(String),
    Color(ColorKey, String),
    Feature(FeatureKey, bool),
    Asset(AssetSlot, Option<String>),
}

impl FieldUpdate {
    /// Parse a dotted path (`displayName`, `colors.primary`, ...) and a raw value.
    pub fn parse(path: &str, value: &str) -> Result<Self, FieldPathError> {
        match path.split_once('.') {
            Some((group, key)) => Self::parse_nested(path, group, key, value),
            None => Self::parse_top_level(path, value),
        }
    }

    fn parse_top_level(path: &str, value: &str) -> Result<Self, FieldPathError> {
        let text = value.to_string();
        Ok(match path {
            "appName" => FieldUpdate::AppName(text),
            "displayName" => FieldUpdate::DisplayName(text),
            "packageName" => FieldUpdate::PackageName(text),
            "bundleId" => FieldUpdate::BundleId(text),
            "version" => FieldUpdate::Version(text),
            "apiBaseUrl" => FieldUpdate::ApiBaseUrl(text),
            "versionCode" => match value.trim().parse::<u32>() {
                Ok(code) if code > 0 => FieldUpdate::VersionCode(code),
                _ => {
                    return Err(FieldPathError::InvalidValue {
                        path: path.to_string(),
                        value: text,
                        reason: "expected a positive integer",
                    })
                }
            },
            "id" => return Err(FieldPathError::ImmutableId),
            "colors" | "features" | "assets" => {
                return Err(FieldPathError::GroupPath(path.to_string()))
            }
            other => return Err(FieldPathError::UnknownField(other.to_string())),
        })
    }

    fn parse_nested(
        path: &str,
        group: &str,
        key: &str,
        value: &str,
    ) -> Result<Self, FieldPathError> {
        let unknown_key =
            || FieldPathError::UnknownKey { group: group.to_string(), key: key.to_string() };
        match group {
            "colors" => {
                let key = ColorKey::parse(key).ok_or_else(unknown_key)?;
                Ok(FieldUpdate::Color(key, value.to_string()))
            }
            "features" => {
                let key = FeatureKey::parse(key).ok_or_else(unknown_key)?;
                let flag = parse_flag(value).ok_or_else(|| FieldPathError::InvalidValue {
                    path: path.to_string(),
                    value: value.to_string(),
                    reason: "expected true or false",
                })?;
                Ok(FieldUpdate::Feature(key, flag))
            }
            "assets" => {
                let slot = AssetSlot::parse(key).ok_or_else(unknown_key)?;
                let trimmed = value.trim();
                let data = if trimmed.is_empty() || trimmed == "none" || trimmed == "null" {
                    None
                } else {
                    Some(trimmed.to_string())
                };
                Ok(FieldUpdate::Asset(slot, data))
            }
            other => Err(FieldPathError::UnknownField(other.to_string())),
        }
    }

    /// Dotted path this update addresses.
    pub fn path(&self) -> String {
        match self {
            FieldUpdate::AppName(_) => "appName".to_string(),
            FieldUpdate::DisplayName(_) => "displayName".to_string(),
            FieldUpdate::PackageName(_) => "packageName".to_string(),
            FieldUpdate::BundleId(_) => "bundleId".to_string(),
            FieldUpdate::Version(_) => "version".to_string(),
            FieldUpdate::VersionCode(_) => "versionCode".to_string(),
            FieldUpdate::ApiBaseUrl(_) => "apiBaseUrl".to_string(),
            FieldUpdate::Color(key, _) => format!("colors.{}", key.as_str()),
            FieldUpdate::Feature(key, _) => format!("features.{}", key.as_str()),
            FieldUpdate::Asset(slot, _) => format!("assets.{}", slot.as_str()),
        }
    }

    pub(crate) fn apply(self, brand: &mut BrandConfig) {
        match self {
            FieldUpdate::AppName(v) => brand.app_name = v,
            FieldUpdate::DisplayName(v) => brand.display_name = v,
            FieldUpdate::PackageName(v) => brand.package_name = v,
            FieldUpdate::BundleId(v) => brand.bundle_id = v,
            FieldUpdate::Version(v) => brand.version = v,
            FieldUpdate::VersionCode(v) => brand.version_code = v,
            FieldUpdate::ApiBaseUrl(v) => brand.api_base_url = v,
            FieldUpdate::Color(key, v) => brand.colors.set(key, v),
            FieldUpdate::Feature(key, v) => brand.features.set(key, v),
            FieldUpdate::Asset(slot, v) => brand.assets.set(slot, v),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_dot_only() {
        let err = FieldUpdate::parse("colors.primary.dark", "#000").unwrap_err();
        assert_eq!(
            err,
            FieldPathError::UnknownKey { group: "colors".into(), key: "primary.dark".into() }
        );
    }

    #[test]
    fn parses_every_group() {
        assert_eq!(
            FieldUpdate::parse("colors.textSecondary", "#999").unwrap(),
            FieldUpdate::Color(ColorKey::TextSecondary, "#999".into())
        );
        assert_eq!(
            FieldUpdate::parse("features.biometric", "on").unwrap(),
            FieldUpdate::Feature(FeatureKey::Biometric, true)
        );
        assert_eq!(
            FieldUpdate::parse("assets.logo", "none").unwrap(),
            FieldUpdate::Asset(AssetSlot::Logo, None)
        );
        assert_eq!(FieldUpdate::parse("versionCode", " 12 ").unwrap(), FieldUpdate::VersionCode(12));
    }

    #[test]
    fn rejects_bad_values_and_paths() {
        assert!(matches!(
            FieldUpdate::parse("versionCode", "0"),
            Err(FieldPathError::InvalidValue { .. })
        ));
        assert!(matches!(
            FieldUpdate::parse("features.darkMode", "maybe"),
            Err(FieldPathError::InvalidValue { .. })
        ));
        assert_eq!(FieldUpdate::parse("id", "x"), Err(FieldPathError::ImmutableId));
        assert_eq!(
            FieldUpdate::parse("colors", "#fff"),
            Err(FieldPathError::GroupPath("colors".into()))
        );
        assert_eq!(
            FieldUpdate::parse("theme.primary", "#fff"),
            Err(FieldPathError::UnknownField("theme".into()))
        );
    }

    #[test]
    fn path_matches_parse_input() {
        for path in ["displayName", "colors.surface", "features.analytics", "assets.icon"] {
            let value = if path.starts_with("features") { "true" } else { "x" };
            assert_eq!(FieldUpdate::parse(path, value).unwrap().path(), path);
        }
    }
}
