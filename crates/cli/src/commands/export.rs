use std::path::Path;

use anyhow::{anyhow, Context, Result};
use brandkit_core::export::{export_all, export_build_script, export_one};
use brandkit_core::model::BrandId;
use chrono::Utc;

use crate::canonicalize_or_current;
use crate::commands::{brand_summary_line, load_store, write_artifact};

/// Export build configurations from a saved brands document.
///
/// With `brand`, writes `<packageName>-config.json` for that brand;
/// otherwise writes the combined `white-label-configs.json`.
pub fn export_command(brands_file: &str, brand: Option<&str>, out: &str) -> Result<()> {
    let store = load_store(Path::new(brands_file))?;
    let out_dir = canonicalize_or_current(out)?;

    let artifact = match brand {
        Some(id) => {
            let brand = store
                .get(&BrandId::from(id))
                .ok_or_else(|| anyhow!("Brand '{}' not found in {}", id, brands_file))?;
            export_one(brand).context("Failed to build brand configuration")?
        }
        None => export_all(store.brands()).context("Failed to build brand configurations")?,
    };

    let path = write_artifact(&out_dir, &artifact)?;
    println!("Exported: {}", path.display());
    Ok(())
}

/// Write the generic `build-apk.sh` script for a saved brands document.
pub fn build_script_command(brands_file: &str, out: &str) -> Result<()> {
    let store = load_store(Path::new(brands_file))?;
    let out_dir = canonicalize_or_current(out)?;
    let artifact = export_build_script(store.brands(), Utc::now());
    let path = write_artifact(&out_dir, &artifact)?;
    println!("Build script: {}", path.display());
    Ok(())
}

/// List the brands in a saved brands document.
pub fn list_brands_command(brands_file: &str, json: bool) -> Result<()> {
    let store = load_store(Path::new(brands_file))?;

    if json {
        let serialized = serde_json::to_string_pretty(store.brands())?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Brands:");
    if store.is_empty() {
        println!("(none)");
        return Ok(());
    }
    for brand in store.brands() {
        println!("{}", brand_summary_line(brand, store.selected_id() == Some(&brand.id)));
    }
    Ok(())
}
