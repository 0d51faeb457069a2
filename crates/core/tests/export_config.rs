use brandkit_core::export::{
    export_all, export_build_script, export_one, to_build_config, BrandBundleEntry, BuildConfig,
    ALL_CONFIGS_FILE_NAME, BUILD_SCRIPT_FILE_NAME,
};
use brandkit_core::model::{BrandConfig, BrandId};
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

fn sample_brand() -> BrandConfig {
    let mut brand = BrandConfig::with_defaults(BrandId::new("1700000000000"), 1);
    brand.display_name = "Acme Shop".into();
    brand.package_name = "com.acme.shop".into();
    brand.api_base_url = "https://api.acme.test".into();
    brand
}

#[test]
fn build_config_reshapes_brand_fields() {
    let brand = sample_brand();
    let config = to_build_config(&brand);

    assert_eq!(config.app_config.name, "App 1");
    assert_eq!(config.app_config.display_name, "Acme Shop");
    assert_eq!(config.app_config.package, "com.acme.shop");
    assert_eq!(config.app_config.bundle_id, "com.brand1.app");
    assert_eq!(config.api_config.base_url, "https://api.acme.test");
    assert_eq!(config.colors, brand.colors);
    assert_eq!(config.features, brand.features);
    assert!(config.build_scripts.android.contains("npm run setup-brand 1700000000000"));
    assert!(config.build_scripts.android.ends_with("cd android && ./gradlew assembleRelease"));
    assert!(config.build_scripts.ios.contains("echo 'Building Acme Shop for iOS...'"));
    assert!(config
        .build_scripts
        .ios
        .ends_with("cd ios && xcodebuild -workspace App.xcworkspace -scheme App archive"));
}

#[test]
fn build_config_is_deterministic() {
    let brand = sample_brand();
    assert_eq!(to_build_config(&brand), to_build_config(&brand));
}

#[test]
fn exported_json_parses_back_to_the_same_config() {
    let brand = sample_brand();
    let artifact = export_one(&brand).expect("export");
    assert_eq!(artifact.file_name, "com.acme.shop-config.json");
    assert_eq!(artifact.media_type, "application/json");

    let parsed: BuildConfig = serde_json::from_slice(&artifact.bytes).expect("parse");
    assert_eq!(parsed, to_build_config(&brand));

    let value: serde_json::Value = serde_json::from_slice(&artifact.bytes).unwrap();
    assert_eq!(value["appConfig"]["versionCode"], 1);
    assert_eq!(value["apiConfig"]["baseUrl"], "https://api.acme.test");
    assert!(value["buildScripts"]["android"].is_string());
}

#[test]
fn export_all_lists_brand_id_and_config_pairs() {
    let first = sample_brand();
    let second = BrandConfig::with_defaults(BrandId::new("b2"), 2);
    let artifact = export_all(&[first.clone(), second.clone()]).expect("export all");
    assert_eq!(artifact.file_name, ALL_CONFIGS_FILE_NAME);

    let entries: Vec<BrandBundleEntry> = serde_json::from_slice(&artifact.bytes).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].brand_id, first.id);
    assert_eq!(entries[1].brand_id.as_str(), "b2");
    assert_eq!(entries[1].config, to_build_config(&second));

    let text = String::from_utf8(artifact.bytes).unwrap();
    assert!(text.contains("\"brandId\": \"1700000000000\""), "{text}");
}

#[test]
fn build_script_defaults_to_first_brand_or_placeholder() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let script = export_build_script(&[sample_brand()], at);
    assert_eq!(script.file_name, BUILD_SCRIPT_FILE_NAME);
    let text = String::from_utf8(script.bytes).unwrap();
    assert!(text.starts_with("#!/bin/bash\n"));
    assert!(text.contains("# Generated on 2024-05-01T12:00:00.000Z"));
    assert!(text.contains("BRAND_NAME=${1:-1700000000000}"));
    assert!(text.contains("node scripts/setup-brand.js \"$BRAND_NAME\""));

    let empty = String::from_utf8(export_build_script(&[], at).bytes).unwrap();
    assert!(empty.contains("BRAND_NAME=${1:-default}"));
}

#[test]
fn scripts_quote_hostile_display_names() {
    let mut brand = sample_brand();
    brand.display_name = "x\"; rm -rf ~; echo \"".into();
    let config = to_build_config(&brand);
    assert!(config.build_scripts.android.contains("echo 'Building x\"; rm -rf ~; echo \"...'"));
}

#[test]
fn artifact_writes_under_its_file_name() {
    let dir = tempdir().unwrap();
    let artifact = export_one(&sample_brand()).unwrap();
    let path = artifact.write_to(dir.path()).expect("write");
    assert_eq!(path, dir.path().join("com.acme.shop-config.json"));
    assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
}

#[test]
fn package_names_with_path_segments_stay_inside_the_output_dir() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir_all(&out).unwrap();

    for (package, expected) in [
        ("../escaped", "_._escaped-config.json"),
        ("/abs", "_abs-config.json"),
        (r"..\win", r"_._win-config.json"),
    ] {
        let mut brand = sample_brand();
        brand.package_name = package.into();
        let artifact = export_one(&brand).unwrap();
        assert_eq!(artifact.file_name, expected);

        let path = artifact.write_to(&out).expect("write");
        assert_eq!(path.parent(), Some(out.as_path()));
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn write_to_flattens_hand_built_file_names() {
    let dir = tempdir().unwrap();
    let artifact = brandkit_core::export::ExportArtifact {
        file_name: "nested/../name.json".into(),
        media_type: "application/json",
        bytes: b"{}".to_vec(),
    };
    let path = artifact.write_to(dir.path()).expect("write");
    assert_eq!(path, dir.path().join("nested_.._name.json"));
}
