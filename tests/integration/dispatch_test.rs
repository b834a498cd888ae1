//! Integration tests for tool selection and dispatch (CLI)

use assert_cmd::Command;
use predicates::prelude::*;

fn termwrap() -> Command {
    Command::cargo_bin("termwrap").expect("binary builds")
}

#[test]
fn tools_lists_every_bundled_selector() {
    termwrap()
        .arg("tools")
        .assert()
        .success()
        .stdout("tools\nwrap\n");
}

#[test]
fn unknown_selector_fails_and_names_the_alternatives() {
    termwrap()
        .arg("shrink")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool 'shrink'"))
        .stderr(predicate::str::contains("tools, wrap"));
}

#[test]
fn missing_selector_shows_usage() {
    termwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_reports_a_version() {
    termwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
