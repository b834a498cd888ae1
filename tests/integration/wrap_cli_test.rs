//! Integration tests for the wrap tool (CLI)

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a termwrap invocation.
fn termwrap() -> Command {
    Command::cargo_bin("termwrap").expect("binary builds")
}

// ============================================================================
// Wrapping Behavior
// ============================================================================

#[test]
fn wrap_reflows_stdin_at_the_requested_width() {
    termwrap()
        .args(["wrap", "--width", "5", "--marker", "+"])
        .write_stdin("abcdefghij")
        .assert()
        .success()
        .stdout("abcd+\nefgh+\nij");
}

#[test]
fn wrap_leaves_short_lines_alone() {
    termwrap()
        .args(["wrap", "--width", "80"])
        .write_stdin("foo\nbar\n")
        .assert()
        .success()
        .stdout("foo\nbar\n");
}

#[test]
fn wrap_default_marker_is_a_backslash() {
    termwrap()
        .args(["wrap", "--width", "4"])
        .write_stdin("abcdef")
        .assert()
        .success()
        .stdout("abc\\\ndef");
}

#[test]
fn wrap_input_ending_on_a_line_boundary_has_no_trailing_marker() {
    termwrap()
        .args(["wrap", "--width", "5", "--marker", "+"])
        .write_stdin("1234")
        .assert()
        .success()
        .stdout("1234");
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn wrap_rejects_widths_below_two() {
    termwrap()
        .args(["wrap", "--width", "1"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("width 1 is too small"));
}

#[test]
fn wrap_help_exits_0_and_shows_usage() {
    termwrap()
        .args(["wrap", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--marker"));
}
