//! Integration tests for the standings CLI

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::tempdir;

const CALIBRATION_RESULTS: &str = "Lions 3, Snakes 3\n\
Tarantulas 1, FC Awesome 0\n\
Lions 1, FC Awesome 1\n\
Tarantulas 3, Snakes 1\n\
Lions 4, Grouches 0\n";

const CALIBRATION_TABLE: &str = "1. Tarantulas, 6 pts\n\
2. Lions, 5 pts\n\
3. FC Awesome, 1 pt\n\
3. Snakes, 1 pt\n\
5. Grouches, 0 pts\n";

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..")
}

fn run_standings(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "standings", "--quiet", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(workspace_root())
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn run_standings_with_stdin(args: &[&str], input: &str) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "standings", "--quiet", "--"];
    cmd_args.extend(args);

    let mut child = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(workspace_root())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_results(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("results.txt");
    fs::write(&path, content).expect("Failed to write results file");
    let path_str = path.to_string_lossy().to_string();
    (dir, path_str)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_standings(&["--help"]);

    assert!(success);
    assert!(stdout.contains("standings"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--quiet"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_standings(&["--version"]);

    assert!(success);
    assert!(stdout.contains("standings"));
}

#[test]
fn test_file_mode_renders_table() {
    let (_dir, path) = write_results(CALIBRATION_RESULTS);
    let (stdout, _, success) = run_standings(&[&path]);

    assert!(success);
    assert_eq!(stdout, CALIBRATION_TABLE);
}

#[test]
fn test_json_output() {
    let (_dir, path) = write_results(CALIBRATION_RESULTS);
    let (stdout, _, success) = run_standings(&[&path, "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let rows = parsed["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["team"], "Tarantulas");
    assert_eq!(rows[0]["points"], 6);
    // FC Awesome and Snakes tie on 1 point and share rank 3.
    assert_eq!(rows[2]["rank"], 3);
    assert_eq!(rows[3]["rank"], 3);
    assert_eq!(rows[4]["rank"], 5);
}

#[test]
fn test_rejected_lines_warn_but_do_not_fail() {
    let (_dir, path) = write_results("Lions 3, Snakes 1\nLions -1, Snakes 3\n");
    let (stdout, stderr, success) = run_standings(&[&path]);

    assert!(success);
    assert!(stderr.contains("skipping \"Lions -1, Snakes 3\""));
    assert!(stdout.contains("1. Lions, 3 pts"));
    assert!(stdout.contains("2. Snakes, 0 pts"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let (_dir, path) = write_results("Lions 3, Snakes 1\ngarbage\n");
    let (stdout, stderr, success) = run_standings(&[&path, "--quiet"]);

    assert!(success);
    assert!(!stderr.contains("skipping"));
    assert!(stdout.contains("1. Lions, 3 pts"));
}

#[test]
fn test_invalid_batch_renders_nothing() {
    let (_dir, path) = write_results("Lions -1, Snakes 3\nLions 2, Lions 2\nTigers A, Lions 2\n");
    let (stdout, stderr, success) = run_standings(&[&path]);

    assert!(success);
    assert_eq!(stdout, "");
    assert!(stderr.contains("skipping"));
}

#[test]
fn test_empty_file_renders_nothing() {
    let (_dir, path) = write_results("");
    let (stdout, _, success) = run_standings(&[&path]);

    assert!(success);
    assert_eq!(stdout, "");
}

#[test]
fn test_missing_file_is_fatal() {
    let (_, stderr, success) = run_standings(&["/nonexistent/results.txt"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("/nonexistent/results.txt"));
}

#[test]
fn test_interactive_mode_stops_at_end() {
    let (stdout, _, success) =
        run_standings_with_stdin(&[], "Lions 3, Snakes 1\nEND\nTarantulas 1, FC Awesome 0\n");

    assert!(success);
    assert_eq!(stdout, "1. Lions, 3 pts\n2. Snakes, 0 pts\n");
}

#[test]
fn test_interactive_mode_eof_without_sentinel() {
    let (stdout, _, success) = run_standings_with_stdin(&[], "Lions 1, Snakes 1\n");

    assert!(success);
    assert_eq!(stdout, "1. Lions, 1 pt\n1. Snakes, 1 pt\n");
}
