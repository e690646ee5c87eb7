use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MISSING_ENGINE: &str = "wargame-test-missing-engine";

fn wargame(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wargame").unwrap();
    cmd.env_remove("WARGAME_HOME")
        .env_remove("WARGAME_ENGINE")
        .env_remove("WARGAME_IMAGE_REPOSITORY")
        .env("NO_COLOR", "1")
        .arg("--home")
        .arg(home)
        .arg("--engine")
        .arg(MISSING_ENGINE);
    cmd
}

#[test]
fn test_reset_without_user() {
    let home = TempDir::new().unwrap();

    wargame(home.path())
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resetting User"))
        .stdout(predicate::str::contains("No user found to reset."));

    assert!(!home.path().join(".ctf_progress").exists());
}

#[test]
fn test_reset_existing_user() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".ctf_user"), "neo").unwrap();
    fs::write(home.path().join(".ctf_progress"), "7").unwrap();

    wargame(home.path())
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress reset to level 1!"));

    let level = fs::read_to_string(home.path().join(".ctf_progress")).unwrap();
    assert_eq!(level, "1");
    let user = fs::read_to_string(home.path().join(".ctf_user")).unwrap();
    assert_eq!(user, "neo");
}

#[test]
fn test_reset_blank_user_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".ctf_user"), "  \n").unwrap();

    wargame(home.path())
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::contains("No user found to reset."));
}

#[test]
fn test_status_json() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".ctf_user"), "trinity").unwrap();
    fs::write(home.path().join(".ctf_progress"), "4").unwrap();

    let output = wargame(home.path())
        .args(["--status", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["user"], "trinity");
    assert_eq!(value["level"], 4);
    assert_eq!(value["total_levels"], 10);
    assert_eq!(value["completed"], false);
}

#[test]
fn test_status_corrupt_progress() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".ctf_progress"), "not a number").unwrap();

    wargame(home.path())
        .arg("--status")
        .assert()
        .success()
        .stdout(predicate::str::contains("User:      (none)"))
        .stdout(predicate::str::contains("Level:     1/10"));
}

#[test]
fn test_status_completed() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".ctf_user"), "neo").unwrap();
    fs::write(home.path().join(".ctf_progress"), "11").unwrap();

    wargame(home.path())
        .arg("--status")
        .assert()
        .success()
        .stdout(predicate::str::contains("all 10 levels completed"));
}

#[test]
fn test_json_requires_status() {
    let home = TempDir::new().unwrap();

    wargame(home.path()).arg("--json").assert().failure();
}

#[test]
fn test_interactive_first_level_without_engine() {
    let home = TempDir::new().unwrap();

    wargame(home.path())
        .arg("--skip-setup")
        .write_stdin("neo\nsubmit FLAG{welcome_to_ctf}\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your username is set to neo."))
        .stdout(predicate::str::contains("Correct flag"))
        .stdout(predicate::str::contains("See you next time, neo!"));

    let level = fs::read_to_string(home.path().join(".ctf_progress")).unwrap();
    assert_eq!(level, "2");
    let user = fs::read_to_string(home.path().join(".ctf_user")).unwrap();
    assert_eq!(user, "neo");
}

#[test]
fn test_interactive_wrong_token_keeps_level() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".ctf_user"), "neo").unwrap();
    fs::write(home.path().join(".ctf_progress"), "3").unwrap();

    wargame(home.path())
        .write_stdin("submit FLAG{wrong}\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, neo!"))
        .stdout(predicate::str::contains("Incorrect flag"));

    let level = fs::read_to_string(home.path().join(".ctf_progress")).unwrap();
    assert_eq!(level, "3");
}

#[test]
fn test_interactive_delete() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".ctf_user"), "neo").unwrap();
    fs::write(home.path().join(".ctf_progress"), "5").unwrap();

    wargame(home.path())
        .write_stdin("delete\nyes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted! Goodbye!"));

    assert!(!home.path().join(".ctf_user").exists());
    assert!(!home.path().join(".ctf_progress").exists());
}

#[test]
fn test_interactive_leaves_username_prompt_cleanly() {
    let home = TempDir::new().unwrap();

    wargame(home.path())
        .arg("--skip-setup")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No username entered. Goodbye!"));

    assert!(!home.path().join(".ctf_user").exists());
    assert!(!home.path().join(".ctf_progress").exists());
}
