use std::path::{Path, PathBuf};

/// Fixed output locations of the installer, relative to an app root.
///
/// This does not perform any IO itself.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    /// Root directory of the mobile app checkout.
    pub root: PathBuf,
    /// Environment file read by the app's build-time config loader (.env).
    pub env_path: PathBuf,
    /// Directory holding Android string resources.
    pub android_values_dir: PathBuf,
    /// Android string resource file with the display name.
    pub strings_xml_path: PathBuf,
    /// Package manifest whose `name` field is patched (package.json).
    pub manifest_path: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let env_path = root.join(".env");
        let android_values_dir =
            root.join("android").join("app").join("src").join("main").join("res").join("values");
        let strings_xml_path = android_values_dir.join("strings.xml");
        let manifest_path = root.join("package.json");

        Self { root, env_path, android_values_dir, strings_xml_path, manifest_path }
    }
}
