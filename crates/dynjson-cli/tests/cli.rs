// SPDX-License-Identifier: MIT OR Apache-2.0
//! Runs the built `dynjson` binary and checks its exit status and output.

use std::io::Write;
use std::process::{Command, Output};

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dynjson"))
}

fn run_with_file(args: &[&str]) -> Output {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(br#"{"users": [{"name": "Amy", "tags": null}]}"#)
        .expect("write input");

    cmd()
        .args(args)
        .arg(file.path())
        .output()
        .expect("run dynjson")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn test_get_present_node_succeeds() {
    let output = run_with_file(&["get", "-r", "users[0].name"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Amy\n");
}

#[test]
fn test_get_missing_node_exits_with_status_one() {
    let output = run_with_file(&["get", "users[5].name"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no value at users[5].name"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_get_missing_node_with_default_succeeds() {
    let output = run_with_file(&["get", "--default", "unknown", "users[5].name"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "unknown\n");
}

#[test]
fn test_invalid_path_fails() {
    let output = run_with_file(&["type", "users[x]"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_type_reports_absent() {
    let output = run_with_file(&["type", "users[0].nope"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "absent\n");
}
