//! Command-line tests for the hovertip binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn hovertip() -> Command {
    Command::cargo_bin("hovertip").unwrap()
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_help_lists_options() {
    hovertip()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--placement"))
        .stdout(predicate::str::contains("--delay"))
        .stdout(predicate::str::contains("--check-config"));
}

#[test]
fn test_check_config_reads_file() {
    let file = config_file("[tooltip]\nplacement = \"bottom\"\nshow_delay_ms = 150\n");

    hovertip()
        .arg("--config")
        .arg(file.path())
        .arg("--check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("placement = bottom"))
        .stdout(predicate::str::contains("show_delay_ms = 150"))
        .stdout(predicate::str::contains("el = div#tooltip"))
        .stdout(predicate::str::contains("metrics = 1/1/2"));
}

#[test]
fn test_flags_override_config() {
    let file = config_file("[tooltip]\nplacement = \"bottom\"\nfade_ms = 100\n");

    hovertip()
        .arg("--config")
        .arg(file.path())
        .args(["--placement", "right", "--delay", "50", "--check-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("placement = right"))
        .stdout(predicate::str::contains("show_delay_ms = 50"))
        .stdout(predicate::str::contains("fade_ms = 100"));
}

#[test]
fn test_unknown_placement_in_file_falls_back_to_top() {
    let file = config_file("[tooltip]\nplacement = \"upside-down\"\n");

    hovertip()
        .arg("--config")
        .arg(file.path())
        .arg("--check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("placement = top"));
}

#[test]
fn test_invalid_placement_flag_is_rejected() {
    hovertip()
        .args(["--placement", "diagonal", "--check-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("diagonal"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    hovertip()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--check-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_malformed_config_file_fails() {
    let file = config_file("[tooltip\n");

    hovertip()
        .arg("--config")
        .arg(file.path())
        .arg("--check-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
