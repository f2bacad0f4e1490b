//! CLI integration tests
//!
//! These tests run the compiled `nova` binary directly against report files
//! written into a temporary directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nova"))
}

/// Runs `nova <args..> --input <input>` and captures its output
fn run(args: &[&str], input: &Path) -> Output {
    bin()
        .args(args)
        .arg("--input")
        .arg(input)
        .output()
        .expect("failed to run binary")
}

// ── fixtures ─────────────────────────────────────────────────────────────────

const REPORT: &str = r#"{"helm_releases":[
  {"release":"myapp","chartName":"myapp-chart","namespace":"default","description":"My app",
   "Installed":{"version":"1.0.0","appVersion":"v1"},
   "Latest":{"version":"1.2.0","appVersion":"v2"},"outdated":true},
  {"release":"cache","chartName":"redis","description":"Redis","deprecated":true,
   "Installed":{"version":"17.0.0","appVersion":"7.0"},
   "Latest":{"version":"17.0.0","appVersion":"7.0"},"outdated":false}
]}"#;

fn write_report(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("report.json");
    std::fs::write(&path, body).expect("failed to write fixture");
    path
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_exits_zero() {
    let status = bin().arg("--help").status().expect("failed to run binary");
    assert!(status.success(), "--help should exit 0");
}

#[test]
fn test_version_flag() {
    let output = bin().arg("--version").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("nova"),
        "version output should contain binary name, got: {}",
        stdout
    );
}

// ── table ─────────────────────────────────────────────────────────────────────

#[test]
fn test_table_prints_header_and_rows() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), REPORT);

    let output = run(&["table"], &input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ReleaseName"));
    assert!(lines[1].starts_with("myapp "));
    assert!(lines[2].starts_with("cache "));
}

#[test]
fn test_table_show_old_filters_current_releases() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), REPORT);

    let output = run(&["table", "--show-old"], &input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("myapp"));
    assert!(!stdout.contains("cache"));
}

#[test]
fn test_table_on_empty_report() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), r#"{"helm_releases":[]}"#);

    let output = run(&["table"], &input);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "No releases found\n");
}

#[test]
fn test_table_on_null_release_list() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), r#"{"helm_releases":null}"#);

    let output = run(&["table"], &input);
    assert!(
        output.status.success(),
        "a null release list should be accepted, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "No releases found\n");
}

#[test]
fn test_table_missing_input_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(&["table"], &tmp.path().join("nope.json"));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load releases"));
}

// ── markdown ──────────────────────────────────────────────────────────────────

#[test]
fn test_markdown_for_single_release() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), REPORT);

    let output = run(&["markdown", "--release", "myapp"], &input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "### myapp (myapp-chart)\n\n\
         | | Old | New |\n\
         |-|-|-|\n\
         | Version | 1.0.0 | 1.2.0 |\n\
         | AppVersion | v1 | v2 |\n"
    );
}

#[test]
fn test_markdown_unknown_release_fails() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), REPORT);

    let output = run(&["markdown", "--release", "ghost"], &input);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ghost"));
}

#[test]
fn test_markdown_on_empty_report_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), r#"{"helm_releases":[]}"#);

    let output = run(&["markdown"], &input);
    assert!(output.status.success(), "empty report should exit 0 like `table`");
    assert!(output.stdout.is_empty());
}

// ── export ────────────────────────────────────────────────────────────────────

#[test]
fn test_export_writes_filtered_json() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), REPORT);
    let dest = tmp.path().join("out.json");

    let output = bin()
        .arg("export")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&dest)
        .arg("--show-old")
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let body = std::fs::read_to_string(&dest).unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let releases = json["helm_releases"].as_array().unwrap();
    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0]["release"], "myapp");
    assert!(releases[0].get("deprecated").is_none());
}

#[test]
fn test_export_to_missing_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let input = write_report(tmp.path(), REPORT);

    let status = bin()
        .arg("export")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(tmp.path().join("missing").join("out.json"))
        .status()
        .expect("failed to run binary");
    assert!(!status.success());
}
