use std::fs;
use std::io::Cursor;

use brandkit::commands::{run_session, Flow, Session};
use brandkit_core::store::BrandStore;
use tempfile::tempdir;

fn run(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    run_session(session, Cursor::new(script.to_string()), &mut out).expect("session runs");
    String::from_utf8(out).unwrap()
}

#[test]
fn add_set_and_show_selected_brand() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(BrandStore::new(), dir.path());

    let output = run(
        &mut session,
        "add\nset displayName Acme Shop\nset colors.primary #123456\nset features.biometric true\nshow\n",
    );

    assert!(output.contains("Added brand"), "{output}");
    assert!(output.contains("Updated colors.primary"), "{output}");
    assert!(output.contains("displayName:  Acme Shop"), "{output}");
    let brand = session.store().selected().unwrap();
    assert_eq!(brand.display_name, "Acme Shop");
    assert_eq!(brand.colors.primary, "#123456");
    assert_eq!(brand.colors.secondary, "#7c3aed");
    assert!(brand.features.biometric);
}

#[test]
fn set_without_selection_reports_and_continues() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(BrandStore::new(), dir.path());
    let output = run(&mut session, "set appName X\nlist\n");
    assert!(output.contains("No brand selected; nothing updated"), "{output}");
    assert!(output.contains("(none)"), "{output}");
}

#[test]
fn errors_do_not_end_the_session() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(BrandStore::new(), dir.path());
    let output = run(&mut session, "frobnicate\nadd\nset versionCode abc\nset colors.accent #fff\nadd\n");
    assert!(output.contains("error: Unknown command 'frobnicate'"), "{output}");
    assert!(output.contains("error: Invalid value 'abc' for 'versionCode'"), "{output}");
    assert!(output.contains("error: Unknown key 'accent' in group 'colors'"), "{output}");
    assert_eq!(session.store().len(), 2);
}

#[test]
fn quit_stops_reading_input() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(BrandStore::new(), dir.path());
    run(&mut session, "add\nquit\nadd\n");
    assert_eq!(session.store().len(), 1);

    let mut sink = Vec::new();
    assert_eq!(session.execute("exit", &mut sink).unwrap(), Flow::Quit);
    assert_eq!(session.execute("   ", &mut sink).unwrap(), Flow::Continue);
}

#[test]
fn delete_and_select_follow_store_rules() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(BrandStore::new(), dir.path());
    run(&mut session, "add\nadd\n");
    let first = session.store().brands()[0].id.clone();
    let second = session.store().brands()[1].id.clone();

    let output = run(&mut session, &format!("select missing\ndelete {second}\nlist\n"));
    assert!(output.contains("No brand with id missing; selection unchanged"), "{output}");
    assert!(output.contains(&format!("Deleted {second}")), "{output}");
    assert_eq!(session.store().selected_id(), Some(&first));
    assert!(output.contains(&format!("* {first} Brand 1")), "{output}");
}

#[test]
fn export_commands_write_artifacts_into_out_dir() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(BrandStore::new(), dir.path());
    let output = run(
        &mut session,
        "add\nset packageName com.acme.app\nexport\nexport-all\nbuild-script\n",
    );
    assert!(!output.contains("error:"), "{output}");

    let single: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("com.acme.app-config.json")).unwrap())
            .unwrap();
    assert_eq!(single["appConfig"]["package"], "com.acme.app");

    let all: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("white-label-configs.json")).unwrap(),
    )
    .unwrap();
    let id = session.store().brands()[0].id.to_string();
    assert_eq!(all[0]["brandId"], id);

    let script = fs::read_to_string(dir.path().join("build-apk.sh")).unwrap();
    assert!(script.contains(&format!("BRAND_NAME=${{1:-{id}}}")), "{script}");
}

#[test]
fn asset_command_embeds_and_clears_images() {
    let dir = tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    fs::write(&logo, b"\x89PNG\r\n").unwrap();
    let mut session = Session::new(BrandStore::new(), dir.path());

    let output = run(&mut session, &format!("add\nasset logo {}\nshow\n", logo.display()));
    assert!(output.contains("Updated assets.logo"), "{output}");
    assert!(output.contains("image/png, 6 bytes"), "{output}");
    let stored = session.store().selected().unwrap().assets.logo.clone().unwrap();
    assert!(stored.starts_with("data:image/png;base64,"));

    run(&mut session, "asset logo none\n");
    assert!(session.store().selected().unwrap().assets.logo.is_none());
}

#[test]
fn save_and_load_round_trip_through_a_document() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("brands.yaml");
    let mut session = Session::new(BrandStore::new(), dir.path());
    run(&mut session, &format!("add\nset appName Saved\nsave {}\n", doc.display()));

    let mut fresh = Session::new(BrandStore::new(), dir.path());
    let output = run(&mut fresh, &format!("load {}\n", doc.display()));
    assert!(output.contains("Loaded 1 brands"), "{output}");
    assert_eq!(fresh.store().selected().unwrap().app_name, "Saved");
}
