//! End-to-end tests for the `mixtape` binary
//!
//! Runs the built binary against the fixture documents and compares the
//! written catalog byte for byte with the golden output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// ===== Test Helpers =====

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn mixtape(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mixtape"))
        .args(args)
        .output()
        .expect("failed to spawn mixtape binary")
}

fn apply_files(catalog: &Path, changes: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mixtape"))
        .args(extra)
        .arg("-m")
        .arg(catalog)
        .arg("-c")
        .arg(changes)
        .arg("-o")
        .arg(output)
        .output()
        .expect("failed to spawn mixtape binary")
}

// ===== Golden Output =====

#[test]
fn composite_change_list_matches_golden_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.json");

    let result = apply_files(
        &fixture("input.json"),
        &fixture("changes.json"),
        &output,
        &[],
    );

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    let expected = fs::read(fixture("output_compact.json")).unwrap();
    let actual = fs::read(&output).unwrap();
    assert_eq!(
        String::from_utf8(actual).unwrap(),
        String::from_utf8(expected).unwrap()
    );
}

#[test]
fn outcomes_are_logged_to_stdout() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.json");

    let result = apply_files(
        &fixture("input.json"),
        &fixture("changes.json"),
        &output,
        &[],
    );

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("[AddPlaylist] added playlist_id playlist_x"));
    assert!(stdout.contains("[RemovePlaylist] removed playlist_id playlist_1"));
    assert!(stdout.contains(
        "[AddSongToPlaylist] song_id song_x not in mixtape, not added to playlist_id playlist_2, skipping"
    ));
}

#[test]
fn quiet_flag_suppresses_outcome_lines() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.json");

    let result = apply_files(
        &fixture("input.json"),
        &fixture("changes.json"),
        &output,
        &["-q"],
    );

    assert!(result.status.success());
    assert!(!String::from_utf8_lossy(&result.stdout).contains("[AddPlaylist]"));
    assert_eq!(
        fs::read(&output).unwrap(),
        fs::read(fixture("output_compact.json")).unwrap()
    );
}

// ===== Failures =====

#[test]
fn missing_required_flags_print_usage_and_exit_1() {
    let result = mixtape(&["-m", "input.json"]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn unreadable_input_reports_error_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let output = dir.path().join("results.json");

    let result = apply_files(
        &missing,
        &fixture("changes.json"),
        &output,
        &[],
    );

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error: "), "stderr: {stderr}");
    assert!(stderr.contains("missing.json"));
    assert!(!output.exists());
}

#[test]
fn malformed_json_reports_error_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{\"users\": [").unwrap();

    let result = apply_files(
        &broken,
        &fixture("changes.json"),
        &dir.path().join("results.json"),
        &[],
    );

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("error decoding"), "stderr: {stderr}");
}
