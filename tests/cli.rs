use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Working directory with `contents` written to its input file
fn with_input(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input"), contents).unwrap();
    dir
}

fn day1_in(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_both_totals() {
    let dir = with_input("12\n14\n1969\n100756\n");

    day1_in(dir.path())
        .assert()
        .success()
        .stdout("1-1:\n34241\n1-2:\n51316\n");
}

#[test]
fn empty_input_sums_to_zero() {
    let dir = with_input("");

    day1_in(dir.path())
        .assert()
        .success()
        .stdout("1-1:\n0\n1-2:\n0\n");
}

#[test]
fn trailing_whitespace_is_ignored() {
    let dir = with_input("1969 \r\n 100756\n");

    day1_in(dir.path())
        .assert()
        .success()
        .stdout("1-1:\n34237\n1-2:\n51312\n");
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    day1_in(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unable to open input"));
}

#[test]
fn bad_line_fails() {
    let dir = with_input("12\nfourteen\n");

    day1_in(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 2: \"fourteen\" is not a mass"));
}

#[test]
fn blank_line_fails() {
    let dir = with_input("12\n\n14\n");

    day1_in(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 2: \"\" is not a mass"));
}

#[test]
fn total_overflow_fails() {
    let dir = with_input(&format!("{}\n", i64::MAX).repeat(4));

    day1_in(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("total fuel for input overflows"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let dir = with_input("12\n");

    day1_in(dir.path())
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("1-1:\n2\n1-2:\n2\n")
        .stderr(predicate::str::contains("total fuel 2"));
}
