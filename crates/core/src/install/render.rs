use crate::install::{InstallConfig, InstallError};

/// Render the `.env` file contents (no trailing newline).
///
/// Values containing a line break are rejected; each key must stay on its
/// own line.
pub fn render_env(config: &InstallConfig) -> Result<String, InstallError> {
    let app = &config.app_config;
    let colors = &config.colors;
    let features = &config.features;

    let lines = [
        ("APP_NAME", app.name.clone()),
        ("DISPLAY_NAME", app.display_name.clone()),
        ("PACKAGE_NAME", app.package.clone()),
        ("VERSION_NAME", app.version.clone()),
        ("VERSION_CODE", app.version_code.to_string()),
        ("PRIMARY_COLOR", colors.primary.clone()),
        ("SECONDARY_COLOR", colors.secondary.clone()),
        ("BACKGROUND_COLOR", colors.background.clone()),
        ("TEXT_COLOR", colors.text.clone()),
        ("API_BASE_URL", config.api_config.base_url.clone()),
        ("FEATURE_DARK_MODE", features.dark_mode.to_string()),
        ("FEATURE_ANALYTICS", features.analytics.to_string()),
        ("FEATURE_PUSH_NOTIFICATIONS", features.push_notifications.to_string()),
        ("FEATURE_BIOMETRIC", features.biometric.to_string()),
    ];

    if let Some((key, _)) = lines.iter().find(|(_, value)| value.contains(['\n', '\r'])) {
        return Err(InstallError::InvalidValue { key: (*key).to_string() });
    }

    Ok(lines.iter().map(|(key, value)| format!("{key}={value}")).collect::<Vec<_>>().join("\n"))
}

/// Render the Android `strings.xml` resource holding the app name.
pub fn render_strings_xml(display_name: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n    <string name=\"app_name\">{}</string>\n</resources>",
        escape_xml(display_name)
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            // Android resource strings treat a bare apostrophe as a syntax error.
            '\'' => out.push_str("\\'"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_escapes_markup_and_apostrophes() {
        let xml = render_strings_xml("Tom & Jerry's <Shop>");
        assert!(xml.contains(r"Tom &amp; Jerry\'s &lt;Shop&gt;"), "{xml}");
    }
}
