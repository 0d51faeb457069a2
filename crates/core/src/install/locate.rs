use serde::Deserialize;
use serde_json::Value;

use crate::install::InstallError;

/// The part of a build configuration the installer needs.
///
/// Extra fields (bundle id, surface colors, build scripts) are ignored, so
/// hand-written documents only have to carry what is actually installed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallConfig {
    pub app_config: InstallAppConfig,
    pub colors: InstallColors,
    pub api_config: InstallApiConfig,
    pub features: InstallFeatures,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallAppConfig {
    pub name: String,
    pub display_name: String,
    pub package: String,
    pub version: String,
    pub version_code: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstallColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallFeatures {
    pub dark_mode: bool,
    pub analytics: bool,
    pub push_notifications: bool,
    pub biometric: bool,
}

/// Find the configuration of `brand_id` in an exported document.
///
/// Lists are searched for an element whose `brandId` matches (string or
/// numeric ids compare by their string form) and yield its `config`;
/// mappings are indexed by the id directly. A single-brand export is itself a
/// mapping, so looking it up by one of its own keys (`appConfig`) finds a
/// non-config value and yields `InvalidConfig` rather than `BrandNotFound`.
pub fn locate_brand_config(document: &Value, brand_id: &str) -> Result<InstallConfig, InstallError> {
    let found = match document {
        Value::Array(entries) => entries
            .iter()
            .find(|entry| entry.get("brandId").is_some_and(|id| id_matches(id, brand_id)))
            .and_then(|entry| entry.get("config")),
        Value::Object(map) => map.get(brand_id),
        _ => None,
    };

    let config = found
        .filter(|v| !v.is_null())
        .ok_or_else(|| InstallError::BrandNotFound { brand_id: brand_id.to_string() })?;

    InstallConfig::deserialize(config)
        .map_err(|source| InstallError::InvalidConfig { brand_id: brand_id.to_string(), source })
}

fn id_matches(id: &Value, wanted: &str) -> bool {
    match id {
        Value::String(s) => s == wanted,
        Value::Number(n) => n.to_string() == wanted,
        _ => false,
    }
}
