//! Brand installer: copies one brand's exported configuration into the files
//! native build tooling reads.
//!
//! Outputs, all relative to the layout root:
//! - `.env`: one `KEY=value` line per installed field (always written)
//! - `android/app/src/main/res/values/strings.xml`: only if the directory exists
//! - `package.json`: `name` patched only if the file exists
//!
//! Files are written in that order and nothing is rolled back when a later
//! step fails.

mod layout;
mod locate;
mod render;

pub use layout::InstallLayout;
pub use locate::{
    locate_brand_config, InstallApiConfig, InstallAppConfig, InstallColors, InstallConfig,
    InstallFeatures,
};
pub use render::{render_env, render_strings_xml};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Error type for installer operations.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Brand configuration not found for ID: {brand_id}")]
    BrandNotFound { brand_id: String },

    #[error("Value for {key} contains a line break")]
    InvalidValue { key: String },

    #[error("Brand configuration for ID {brand_id} is incomplete: {source}")]
    InvalidConfig {
        brand_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Package manifest {path} is not a JSON object")]
    ManifestNotObject { path: PathBuf },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What an install run touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub brand_id: String,
    pub display_name: String,
    pub package: String,
    pub version: String,
    pub version_code: u32,
    pub env_path: PathBuf,
    /// Set when the Android resource directory existed and the file was written.
    pub strings_xml_path: Option<PathBuf>,
    /// Set when the manifest existed and was patched.
    pub manifest_path: Option<PathBuf>,
}

/// Read a JSON document from disk.
pub fn read_document(path: &Path) -> Result<serde_json::Value, InstallError> {
    let body = fs::read_to_string(path)
        .map_err(|source| InstallError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&body)
        .map_err(|source| InstallError::Parse { path: path.to_path_buf(), source })
}

/// Install `brand_id` from the document at `config_path` into `layout`.
pub fn install_brand(
    layout: &InstallLayout,
    config_path: &Path,
    brand_id: &str,
) -> Result<InstallReport, InstallError> {
    let document = read_document(config_path)?;
    let config = locate_brand_config(&document, brand_id)?;
    info!(brand_id, display_name = %config.app_config.display_name, "Setting up brand");

    write_file(&layout.env_path, &render_env(&config)?)?;
    debug!(path = %layout.env_path.display(), "Environment file written");

    let strings_xml_path = if layout.android_values_dir.is_dir() {
        write_file(&layout.strings_xml_path, &render_strings_xml(&config.app_config.display_name))?;
        Some(layout.strings_xml_path.clone())
    } else {
        debug!(dir = %layout.android_values_dir.display(), "Android resources missing; skipping");
        None
    };

    let manifest_path = if layout.manifest_path.is_file() {
        patch_manifest_name(&layout.manifest_path, &config.app_config.name)?;
        Some(layout.manifest_path.clone())
    } else {
        debug!(path = %layout.manifest_path.display(), "No package manifest; skipping");
        None
    };

    Ok(InstallReport {
        brand_id: brand_id.to_string(),
        display_name: config.app_config.display_name,
        package: config.app_config.package,
        version: config.app_config.version,
        version_code: config.app_config.version_code,
        env_path: layout.env_path.clone(),
        strings_xml_path,
        manifest_path,
    })
}

/// Replace the manifest's `name`, keeping every other field in place.
pub fn patch_manifest_name(path: &Path, name: &str) -> Result<(), InstallError> {
    let mut manifest = read_document(path)?;
    let object = manifest
        .as_object_mut()
        .ok_or_else(|| InstallError::ManifestNotObject { path: path.to_path_buf() })?;
    object.insert("name".to_string(), serde_json::Value::String(name.to_string()));
    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|source| InstallError::Parse { path: path.to_path_buf(), source })?;
    write_file(path, &json)
}

fn write_file(path: &Path, contents: &str) -> Result<(), InstallError> {
    fs::write(path, contents).map_err(|source| InstallError::Write { path: path.to_path_buf(), source })
}
