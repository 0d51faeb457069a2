//! Build-configuration export.
//!
//! `to_build_config` is a pure projection of a brand into the document the
//! installer and mobile build pipeline consume. The `export_*` helpers wrap
//! the serialized output in an [`ExportArtifact`]: a named byte payload that
//! frontends write to disk (or offer for download).

pub mod script;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{BrandColors, BrandConfig, BrandFeatures, BrandId};

/// File name of the combined export document.
pub const ALL_CONFIGS_FILE_NAME: &str = "white-label-configs.json";

/// File name of the generic build script.
pub const BUILD_SCRIPT_FILE_NAME: &str = "build-apk.sh";

/// Default brand used by the build script when no brands exist.
pub const DEFAULT_BRAND_PLACEHOLDER: &str = "default";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize build configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub name: String,
    pub display_name: String,
    pub version: String,
    pub version_code: u32,
    pub package: String,
    pub bundle_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildScripts {
    pub android: String,
    pub ios: String,
}

/// Flattened build configuration derived from one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub app_config: AppConfig,
    pub colors: BrandColors,
    pub features: BrandFeatures,
    pub api_config: ApiConfig,
    pub build_scripts: BuildScripts,
}

/// One element of the combined export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandBundleEntry {
    pub brand_id: BrandId,
    pub config: BuildConfig,
}

/// A named, downloadable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the artifact into `dir` under its own file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(flat_file_name(&self.file_name));
        fs::write(&path, &self.bytes)
            .map_err(|source| ExportError::Write { path: path.clone(), source })?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "Wrote export artifact");
        Ok(path)
    }
}

/// Project a brand into its build configuration.
pub fn to_build_config(brand: &BrandConfig) -> BuildConfig {
    let id = brand.id.as_str();
    BuildConfig {
        app_config: AppConfig {
            name: brand.app_name.clone(),
            display_name: brand.display_name.clone(),
            version: brand.version.clone(),
            version_code: brand.version_code,
            package: brand.package_name.clone(),
            bundle_id: brand.bundle_id.clone(),
        },
        colors: brand.colors.clone(),
        features: brand.features,
        api_config: ApiConfig { base_url: brand.api_base_url.clone() },
        build_scripts: BuildScripts {
            android: script::android_script(&brand.display_name, id),
            ios: script::ios_script(&brand.display_name, id),
        },
    }
}

/// Export a single brand as `<packageName>-config.json`.
pub fn export_one(brand: &BrandConfig) -> Result<ExportArtifact, ExportError> {
    let json = serde_json::to_string_pretty(&to_build_config(brand))?;
    Ok(ExportArtifact {
        file_name: flat_file_name(&format!("{}-config.json", brand.package_name)),
        media_type: "application/json",
        bytes: json.into_bytes(),
    })
}

/// Reduce `name` to a single path component: separators become `_`, as does
/// a leading `.`.
pub fn flat_file_name(name: &str) -> String {
    let mut flat: String =
        name.chars().map(|c| if c == '/' || c == '\\' { '_' } else { c }).collect();
    if flat.starts_with('.') {
        flat.replace_range(..1, "_");
    }
    flat
}

/// Export every brand as a list of `{brandId, config}` entries.
pub fn export_all(brands: &[BrandConfig]) -> Result<ExportArtifact, ExportError> {
    let entries: Vec<BrandBundleEntry> = brands
        .iter()
        .map(|b| BrandBundleEntry { brand_id: b.id.clone(), config: to_build_config(b) })
        .collect();
    let json = serde_json::to_string_pretty(&entries)?;
    Ok(ExportArtifact {
        file_name: ALL_CONFIGS_FILE_NAME.to_string(),
        media_type: "application/json",
        bytes: json.into_bytes(),
    })
}

/// Generic build script defaulting to the first brand's id.
pub fn export_build_script(brands: &[BrandConfig], generated_at: DateTime<Utc>) -> ExportArtifact {
    let default_brand = brands.first().map(|b| b.id.as_str()).unwrap_or(DEFAULT_BRAND_PLACEHOLDER);
    ExportArtifact {
        file_name: BUILD_SCRIPT_FILE_NAME.to_string(),
        media_type: "text/plain",
        bytes: script::apk_build_script(default_brand, generated_at).into_bytes(),
    }
}
