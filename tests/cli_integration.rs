mod common;

use assert_cmd::Command;
use common::{USERS_JSON, serve_once};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn roster(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("ROSTER_DATA_DIR")
        .arg("--data-dir")
        .arg(dir.path());
    cmd
}

fn add_jane(dir: &TempDir) {
    roster(dir)
        .args(["add", "--name", "Jane Doe", "--email", "jane@x.com"])
        .args(["--phone", "9876543210", "--gender", "female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe has been added!"));
}

#[test]
fn naked_run_shows_status() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Students saved"))
        .stdout(predicate::str::contains("Counter"));
}

#[test]
fn add_list_edit_delete() {
    let dir = TempDir::new().unwrap();
    add_jane(&dir);

    roster(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe <jane@x.com>"))
        .stdout(predicate::str::contains("9876543210"));

    roster(&dir)
        .args(["edit", "1", "--name", "Jane Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Smith updated successfully!"))
        .stdout(predicate::str::contains("jane@x.com"));

    roster(&dir)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Smith removed."));

    roster(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn invalid_student_is_rejected_per_field() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["add", "--name", " ", "--email", "jane", "--phone", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name is required."))
        .stderr(predicate::str::contains("must contain"))
        .stderr(predicate::str::contains("Phone must be exactly 10 digits."));

    assert!(!dir.path().join("students").exists());
}

#[test]
fn phone_with_separators_is_refused() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["add", "--name", "Al", "--email", "al@x.com", "--phone", "987-654-3210"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("may only contain digits"));
}

#[test]
fn long_phone_is_cut_to_ten_digits() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["add", "--name", "Al", "--email", "al@x.com", "--phone", "987654321099"])
        .assert()
        .success();
    roster(&dir)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone:  9876543210\n"))
        .stdout(predicate::str::contains("Male"));
}

#[test]
fn unknown_index_fails() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["rm", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student 5 not found"));
    roster(&dir)
        .args(["view", "first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index format"));
}

#[test]
fn search_matches_names() {
    let dir = TempDir::new().unwrap();
    add_jane(&dir);
    roster(&dir)
        .args(["add", "--name", "Bob", "--email", "bob@x.com", "--phone", "1234567890"])
        .assert()
        .success();

    roster(&dir)
        .args(["search", "JANE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn counter_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    roster(&dir).args(["counter", "inc"]).assert().success();
    roster(&dir)
        .args(["counter", "inc"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2"));
    roster(&dir).args(["counter", "dec"]).assert().success();

    roster(&dir)
        .arg("counter")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1"));
    assert_eq!(fs::read_to_string(dir.path().join("counter")).unwrap(), "1");

    roster(&dir).args(["counter", "reset"]).assert().success();
    roster(&dir)
        .args(["counter", "dec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already at 0"));
}

#[test]
fn config_set_and_get() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["config", "directory-limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("directory-limit set to 3"));
    roster(&dir)
        .args(["config", "directory-limit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
    roster(&dir)
        .args(["config", "log-level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported log level"));
    roster(&dir)
        .args(["config", "notification-ms", "9223372036854775807"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("from 1 to 86400000"));
    roster(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("notification-ms"));
}

#[test]
fn directory_uses_configured_url_and_limit() {
    let dir = TempDir::new().unwrap();
    let (url, server) = serve_once("200 OK", USERS_JSON);
    roster(&dir).args(["config", "directory-url", &url]).assert().success();

    roster(&dir)
        .args(["dir", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[LG] Leanne Graham"))
        .stdout(predicate::str::contains("Ervin Howell"))
        .stdout(predicate::str::contains("Clementine").not());
    server.join().unwrap();
}

#[test]
fn directory_error_is_reported() {
    let dir = TempDir::new().unwrap();
    let (url, server) = serve_once("500 Internal Server Error", "{}");
    roster(&dir).args(["config", "directory-url", &url]).assert().success();

    roster(&dir)
        .arg("directory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error: 500"));
    server.join().unwrap();
}

#[test]
fn data_dir_from_env() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_DATA_DIR", dir.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            dir.path().join("students").display().to_string(),
        ));
}

#[test]
fn logs_land_in_data_dir() {
    let dir = TempDir::new().unwrap();
    add_jane(&dir);
    assert!(dir.path().join("logs").is_dir());
}
