use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use brandkit_core::runtime::{load_theme_preference, parse_env, Palette, RuntimeBrand, ThemeMode};
use serde::Serialize;

#[derive(Serialize)]
pub struct RuntimeSnapshot {
    pub brand: RuntimeBrand,
    pub theme: ThemeMode,
    pub palette: Palette,
}

/// Resolve what the app would see for the environment file at `env_file`.
pub fn resolve_runtime(env_file: &Path, theme_pref: Option<&Path>) -> Result<RuntimeSnapshot> {
    let body = fs::read_to_string(env_file)
        .with_context(|| format!("Failed to read environment file {}", env_file.display()))?;
    let brand = RuntimeBrand::from_env(&parse_env(&body));
    let preference = theme_pref.and_then(load_theme_preference);
    let theme = ThemeMode::resolve(&brand, preference.as_deref());
    let palette = brand.palette(theme);
    Ok(RuntimeSnapshot { brand, theme, palette })
}

pub fn runtime_command(env_file: &str, theme_pref: Option<&str>, json: bool) -> Result<()> {
    let snapshot = resolve_runtime(Path::new(env_file), theme_pref.map(Path::new))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let brand = &snapshot.brand;
    println!("{} ({})", brand.display_name, brand.app_name);
    println!("Package: {}", brand.package_name);
    println!("Version: {} ({})", brand.version_name, brand.version_code);
    println!("API: {}", brand.api_base_url);
    println!("Theme: {:?}", snapshot.theme);
    println!("  background {}", snapshot.palette.background);
    println!("  text       {}", snapshot.palette.text);
    println!("  card       {}", snapshot.palette.card);
    println!("  border     {}", snapshot.palette.border);
    println!("  accent     {}", snapshot.palette.accent);
    println!("Features:");
    let features = [
        ("dark mode", brand.features.dark_mode),
        ("analytics", brand.features.analytics),
        ("push notifications", brand.features.push_notifications),
        ("biometric", brand.features.biometric),
    ];
    for (label, enabled) in features {
        println!("- {label}: {}", if enabled { "on" } else { "off" });
    }
    Ok(())
}
