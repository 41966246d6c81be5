#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test points `XDG_CONFIG_HOME` at a temp directory so the real
//! key file is never touched. No test here reaches the network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn deepl(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("deepl").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("DEEPL_AUTH_KEY")
        .env_remove("DEEPL_API_URL")
        .env("NO_COLOR", "1");
    cmd
}

fn key_file(config_home: &TempDir) -> std::path::PathBuf {
    config_home.path().join(".deepl").join("key.json")
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DeepL"))
        .stdout(predicate::str::contains("translate"))
        .stdout(predicate::str::contains("view-key"))
        .stdout(predicate::str::contains("update-key"))
        .stdout(predicate::str::contains("delete-key"));
}

#[test]
fn test_help_does_not_create_key_file() {
    let home = TempDir::new().unwrap();
    deepl(&home).arg("--help").assert().success();
    assert!(!key_file(&home).exists());
}

#[test]
fn test_help_and_languages_work_when_config_home_is_a_file() {
    let home = TempDir::new().unwrap();
    let not_a_dir = home.path().join("config-home");
    fs::write(&not_a_dir, "").unwrap();

    for args in [&["--help"][..], &["languages"][..], &["translate", "--help"][..]] {
        deepl(&home)
            .env("XDG_CONFIG_HOME", &not_a_dir)
            .args(args)
            .assert()
            .success();
    }

    deepl(&home)
        .env("XDG_CONFIG_HOME", &not_a_dir)
        .arg("view-key")
        .assert()
        .failure()
        .code(exitcode::IOERR)
        .stderr(predicate::str::contains("Failed to create config directory"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("EN"))
        .stdout(predicate::str::contains("RU"))
        .stdout(predicate::str::contains("PT-BR"));
    assert!(!key_file(&home).exists());
}

#[test]
fn test_view_key_first_use_writes_placeholder() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("view-key")
        .assert()
        .success()
        .stdout("apiapiapi\n")
        .stderr(predicate::str::contains("First use detected"));

    let raw = fs::read_to_string(key_file(&home)).unwrap();
    assert!(raw.contains("\"apikey\":\"apiapiapi\""));
}

#[test]
fn test_quiet_hides_first_use_notice() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["--quiet", "view-key"])
        .assert()
        .success()
        .stdout("apiapiapi\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_update_key_from_argument_then_view() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["update-key", "  newkey123  "])
        .assert()
        .success()
        .stderr(predicate::str::contains("API key updated"));

    deepl(&home)
        .arg("view-key")
        .assert()
        .success()
        .stdout("newkey123\n");
}

#[test]
fn test_update_key_from_piped_stdin() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("update-key")
        .write_stdin("  newkey123  \n")
        .assert()
        .success();

    deepl(&home)
        .arg("view-key")
        .assert()
        .success()
        .stdout("newkey123\n");
}

#[test]
fn test_update_key_blank_is_rejected() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("update-key")
        .write_stdin("   \n")
        .assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("API key cannot be empty"));
}

#[test]
fn test_delete_key_removes_file() {
    let home = TempDir::new().unwrap();
    deepl(&home).args(["update-key", "secret"]).assert().success();
    assert!(key_file(&home).exists());

    deepl(&home)
        .arg("delete-key")
        .assert()
        .success()
        .stderr(predicate::str::contains("API key deleted"));
    assert!(!key_file(&home).exists());

    deepl(&home)
        .arg("delete-key")
        .assert()
        .success()
        .stderr(predicate::str::contains("No API key stored"));
}

#[test]
fn test_malformed_key_file_is_reported() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".deepl")).unwrap();
    fs::write(key_file(&home), "{ not json").unwrap();

    deepl(&home)
        .arg("view-key")
        .assert()
        .failure()
        .code(exitcode::IOERR)
        .stderr(predicate::str::contains("Failed to parse key file"));
}

#[test]
fn test_translate_requires_target_language() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["translate", "--from", "EN", "hello"])
        .assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("--to"));
}

#[test]
fn test_translate_rejects_non_utf8_stdin() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["translate", "--to", "DE"])
        .write_stdin(vec![0xff_u8, 0xfe, 0xfd])
        .assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_translate_rejects_invalid_language_code() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["translate", "--to", "invalid_lang_xyz", "hello"])
        .assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Invalid target language code"));
}

#[test]
fn test_translate_requires_text() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["translate", "--to", "DE"])
        .write_stdin("")
        .assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("No text to translate"));
    assert!(!key_file(&home).exists());
}
