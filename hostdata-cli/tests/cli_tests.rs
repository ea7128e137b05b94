// CLI tests
// Drive the built `hostdata` binary against temporary files

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const SCENARIO: &str = "\
08:00:00 2024-01-10 hostA 10 0 100
09:00:00 2024-01-10 hostB 5 0 200
bad line
10:00:00 2024-01-11 hostA 2 0 50
";

fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    let config_dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_hostdata"))
        .args(args)
        // Keep any local .hostdata.toml or user config out of the picture
        .current_dir(config_dir.path())
        .env("HOME", config_dir.path())
        .env_remove("HOSTDATA_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_load_prints_total() {
    let file = log_file(SCENARIO);
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total volume: 2100 bytes"), "stdout: {}", stdout);
    assert!(stdout.contains("Skipped lines: 1"));
}

#[test]
fn test_filter_by_date() {
    let file = log_file(SCENARIO);
    let output = run(&[file.path().to_str().unwrap(), "--date", "2024-01-10"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total volume: 2000 bytes"), "stdout: {}", stdout);
    assert!(!stdout.contains("2024-01-11"));
}

#[test]
fn test_json_output() {
    let file = log_file(SCENARIO);
    let output = run(&[file.path().to_str().unwrap(), "-d", "2024-01-11", "-f", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_bytes"], 100);
    assert_eq!(value["records"].as_array().unwrap().len(), 1);
}

#[test]
fn test_config_file_sets_display_text() {
    let file = log_file(SCENARIO);
    let config = log_file("[display]\ntotal_label = \"Загальний обсяг\"\nunit = \"байт\"\n");
    let output = run(&[
        file.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Загальний обсяг: 2100 байт"), "stdout: {}", stdout);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = run(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not load"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_filter_date_fails() {
    let file = log_file(SCENARIO);
    let output = run(&[file.path().to_str().unwrap(), "--date", "someday"]);

    assert!(!output.status.success());
}

#[test]
fn test_file_without_valid_lines() {
    let file = log_file("nothing\nto see here\n");
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total volume: 0 bytes"));
}
