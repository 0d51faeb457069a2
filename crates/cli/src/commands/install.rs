use std::path::Path;

use anyhow::{anyhow, Context, Result};
use brandkit_core::install::{install_brand, InstallLayout};

use crate::canonicalize_or_current;

pub const INSTALL_USAGE: &str = "Usage: brandkit install <config-file> <brand-id>";

/// Install one brand from an exported configuration document into the app
/// checkout at `root`.
pub fn install_command(config: Option<&str>, brand_id: Option<&str>, root: &str) -> Result<()> {
    let (Some(config), Some(brand_id)) = (config, brand_id) else {
        return Err(anyhow!(INSTALL_USAGE));
    };

    let root_path = canonicalize_or_current(root)?;
    let layout = InstallLayout::new(&root_path);
    let config_path = Path::new(config);

    let report = install_brand(&layout, config_path, brand_id)
        .with_context(|| format!("Error setting up brand from {}", config_path.display()))?;

    println!("Setting up brand: {}", report.display_name);
    println!("  Environment: {}", report.env_path.display());
    match &report.strings_xml_path {
        Some(path) => println!("  Android strings: {}", path.display()),
        None => println!("  Android strings: skipped (no res/values directory)"),
    }
    match &report.manifest_path {
        Some(path) => println!("  Package manifest: {}", path.display()),
        None => println!("  Package manifest: skipped (no package.json)"),
    }
    println!();
    println!("Brand setup complete for: {}", report.display_name);
    println!("Package: {}", report.package);
    println!("Version: {} ({})", report.version, report.version_code);

    Ok(())
}
