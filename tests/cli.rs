//! Binary-level tests for the wixgen CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, file_name: &str, source: &std::path::Path) -> std::path::PathBuf {
    let config = format!(
        r#"
source = "{}"
name = "Test App"
version = "1.2.3"
manufacturer = "Acme"
upgradeCode = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee"
iconPath = "app.ico"
executable = "app.exe"
"#,
        source.display()
    );
    let path = dir.path().join(file_name);
    fs::write(&path, config).unwrap();
    path
}

#[test]
fn writes_descriptor_to_output_path() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("app");
    fs::create_dir_all(source.join("sub")).unwrap();
    fs::write(source.join("app.exe"), b"binary").unwrap();
    fs::write(source.join("sub/data.txt"), b"data").unwrap();

    let config = write_config(&dir, "app.toml", &source);
    let output = dir.path().join("app.wxs");

    Command::cargo_bin("wixgen")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let wxs = fs::read_to_string(&output).unwrap();
    assert!(wxs.starts_with("<?xml"));
    assert!(wxs.contains(r#"<Wix xmlns="http://schemas.microsoft.com/wix/2006/wi">"#));
    assert!(wxs.contains(r#"<ComponentRef Id="app.exe"/>"#));
    assert!(wxs.contains(r#"<ComponentRef Id="sub%2Fdata.txt"/>"#));
}

#[test]
fn prints_to_stdout_without_output_path() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("app");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("app.exe"), b"binary").unwrap();

    let config = write_config(&dir, "app.toml", &source);

    Command::cargo_bin("wixgen")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains("<Product "))
        .stdout(predicate::str::contains("\n").not());
}

#[test]
fn rejects_unsupported_config_extension() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("app.yaml");
    fs::write(&config, "name: Test App").unwrap();

    Command::cargo_bin("wixgen")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported config format"));
}

#[test]
fn fails_when_config_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nope.toml");

    Command::cargo_bin("wixgen")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn fails_when_source_directory_is_missing() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "app.toml", &dir.path().join("does-not-exist"));

    Command::cargo_bin("wixgen")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to list directory"));
}

#[test]
fn source_flag_overrides_config_source() {
    let dir = TempDir::new().unwrap();
    let real_source = dir.path().join("real");
    fs::create_dir_all(&real_source).unwrap();
    fs::write(real_source.join("app.exe"), b"binary").unwrap();

    // Config points at a directory that does not exist; the override wins.
    let config = write_config(&dir, "app.toml", &dir.path().join("bogus"));

    Command::cargo_bin("wixgen")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--source")
        .arg(&real_source)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Id="app.exe""#));
}
