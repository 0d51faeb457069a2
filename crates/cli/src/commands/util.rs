use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brandkit_core::document::load_brands_document;
use brandkit_core::export::ExportArtifact;
use brandkit_core::model::BrandConfig;
use brandkit_core::store::BrandStore;

/// Load a saved brands document into a fresh store.
pub fn load_store(path: &Path) -> Result<BrandStore> {
    let doc = load_brands_document(path)
        .with_context(|| format!("Failed to load brands from {}", path.display()))?;
    Ok(doc.into_store())
}

/// Write an export artifact into `out_dir`, creating the directory if needed.
pub fn write_artifact(out_dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output dir: {}", out_dir.display()))?;
    let path = artifact
        .write_to(out_dir)
        .with_context(|| format!("Failed to export {}", artifact.file_name))?;
    Ok(path)
}

/// One-line summary of a brand for listings.
pub fn brand_summary_line(brand: &BrandConfig, selected: bool) -> String {
    format!(
        "{} {} {} ({}, v{} build {})",
        if selected { "*" } else { "-" },
        brand.id,
        brand.display_name,
        brand.package_name,
        brand.version,
        brand.version_code
    )
}
