//! Shell script templates emitted alongside build configurations.

use chrono::{DateTime, SecondsFormat, Utc};

/// Quote `value` for safe use as a single POSIX shell word.
///
/// Plain words made of `[A-Za-z0-9_./:@%+=,-]` are returned unchanged;
/// anything else is wrapped in single quotes with embedded quotes escaped.
pub fn shell_quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value.chars().all(|c| c.is_ascii_alphanumeric() || "_./:@%+=,-".contains(c));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

/// Per-brand Android build script.
pub fn android_script(display_name: &str, brand_id: &str) -> String {
    let mut script = String::from("#!/bin/bash\n");
    script.push_str(&format!("echo {}\n", shell_quote(&format!("Building {display_name}..."))));
    script.push_str(&format!("npm run setup-brand {}\n", shell_quote(brand_id)));
    script.push_str("cd android && ./gradlew assembleRelease");
    script
}

/// Per-brand iOS build script.
pub fn ios_script(display_name: &str, brand_id: &str) -> String {
    let mut script = String::from("#!/bin/bash\n");
    script.push_str(&format!(
        "echo {}\n",
        shell_quote(&format!("Building {display_name} for iOS..."))
    ));
    script.push_str(&format!("npm run setup-brand {}\n", shell_quote(brand_id)));
    script.push_str("cd ios && xcodebuild -workspace App.xcworkspace -scheme App archive");
    script
}

/// Generic APK build script; the brand defaults to `default_brand` when no
/// argument is passed.
pub fn apk_build_script(default_brand: &str, generated_at: DateTime<Utc>) -> String {
    let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    format!(
        r#"#!/bin/bash
# White Label APK Build Script
# Generated on {timestamp}

set -e

BRAND_NAME=${{1:-{default}}}

echo "Building APK for brand: $BRAND_NAME"

# Setup brand configuration
node scripts/setup-brand.js "$BRAND_NAME"

# Install dependencies
npm install

# Build Android APK
cd android
./gradlew assembleRelease

echo "Build completed! APK location: android/app/build/outputs/apk/release/"
"#,
        default = shell_quote(default_brand),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_leaves_plain_words_alone() {
        assert_eq!(shell_quote("1700000000000"), "1700000000000");
        assert_eq!(shell_quote("com.acme.app"), "com.acme.app");
    }

    #[test]
    fn quote_neutralizes_metacharacters() {
        assert_eq!(shell_quote("a b"), "'a b'");
        assert_eq!(shell_quote("$(rm -rf /)"), "'$(rm -rf /)'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn android_script_has_fixed_shape() {
        let script = android_script("Acme", "42");
        assert_eq!(
            script,
            "#!/bin/bash\necho 'Building Acme...'\nnpm run setup-brand 42\ncd android && ./gradlew assembleRelease"
        );
    }
}
