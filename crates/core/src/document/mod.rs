//! Brands document: explicit save/load of an editing session.
//!
//! Nothing is saved implicitly; frontends call [`save_brands_document`] and
//! [`load_brands_document`] when the user asks. The on-disk format is chosen
//! by file extension (`.json`, `.yaml`, `.yml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{BrandConfig, BrandId};
use crate::store::BrandStore;

/// Current document format version.
pub const DOCUMENT_FORMAT_VERSION: &str = "1";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read brands document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write brands document {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in brands document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in brands document {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported brands document extension for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Result<Self, DocumentError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml" | "yml") => Ok(DocumentFormat::Yaml),
            _ => Err(DocumentError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }
}

/// Serializable snapshot of a brand store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandsDocument {
    #[serde(default = "default_format_version")]
    pub format_version: String,
    #[serde(default)]
    pub brands: Vec<BrandConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<BrandId>,
}

fn default_format_version() -> String {
    DOCUMENT_FORMAT_VERSION.to_string()
}

impl BrandsDocument {
    pub fn from_store(store: &BrandStore) -> Self {
        Self {
            format_version: default_format_version(),
            brands: store.brands().to_vec(),
            selected: store.selected_id().cloned(),
        }
    }

    /// Rebuild a store. The saved selection is restored when it still names
    /// a brand; otherwise the first brand is selected.
    pub fn into_store(self) -> BrandStore {
        let mut store = BrandStore::new();
        store.replace_all(self.brands);
        if let Some(id) = self.selected {
            store.select_brand(&id);
        }
        store
    }
}

pub fn load_brands_document(path: &Path) -> Result<BrandsDocument, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let body = fs::read_to_string(path)
        .map_err(|source| DocumentError::Read { path: path.to_path_buf(), source })?;
    let doc = match format {
        DocumentFormat::Json => serde_json::from_str(&body)
            .map_err(|source| DocumentError::Json { path: path.to_path_buf(), source })?,
        DocumentFormat::Yaml => serde_yaml::from_str(&body)
            .map_err(|source| DocumentError::Yaml { path: path.to_path_buf(), source })?,
    };
    tracing::debug!(path = %path.display(), "Loaded brands document");
    Ok(doc)
}

pub fn save_brands_document(path: &Path, doc: &BrandsDocument) -> Result<(), DocumentError> {
    let body = match DocumentFormat::from_path(path)? {
        DocumentFormat::Json => serde_json::to_string_pretty(doc)
            .map_err(|source| DocumentError::Json { path: path.to_path_buf(), source })?,
        DocumentFormat::Yaml => serde_yaml::to_string(doc)
            .map_err(|source| DocumentError::Yaml { path: path.to_path_buf(), source })?,
    };
    fs::write(path, body)
        .map_err(|source| DocumentError::Write { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), brands = doc.brands.len(), "Saved brands document");
    Ok(())
}
