// tests/cli_exit.rs - Exit code and output tests for the binary
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const CSV: &str = "id,x,y,quality\nA,0,0,1\nB,10,0,1\nC,20,0,1\n";

fn temp() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("patches.csv"), CSV).unwrap();
    d
}

fn patchrank(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_patchrank"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_exit_0_rank() {
    let d = temp();
    let out = patchrank(d.path(), &["rank", "patches.csv", "--quiet"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("Habitat Importance Ranking"));
    assert!(lines[1].contains("Patch B:"));
    assert!(lines[1].contains("Importance Score = 0."));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_json_and_top() {
    let d = temp();
    let out = patchrank(
        d.path(),
        &["rank", "patches.csv", "--quiet", "--format", "json", "--top", "1"],
    );
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "B");
    assert_eq!(rows[0]["rank"], 1);
}

#[test]
fn test_exit_3_missing_source() {
    let d = temp();
    let out = patchrank(d.path(), &["rank", "nope.csv"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.csv"));
}

#[test]
fn test_exit_2_schema_violation() {
    let d = temp();
    fs::write(d.path().join("bad.csv"), "id,x,y,quality\nA,0,0,-1\n").unwrap();
    let out = patchrank(d.path(), &["rank", "bad.csv"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_exit_2_bad_flag_value() {
    let d = temp();
    let out = patchrank(d.path(), &["rank", "patches.csv", "--damping", "1.2"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_exit_4_convergence_failure() {
    let d = temp();
    let args = [
        "rank",
        "patches.csv",
        "--quiet",
        "--tolerance",
        "1e-15",
        "--max-iterations",
        "1",
    ];
    let out = patchrank(d.path(), &args);
    assert_eq!(out.status.code(), Some(4));
    assert!(out.stdout.is_empty());

    let mut approx = args.to_vec();
    approx.push("--accept-approximate");
    let out = patchrank(d.path(), &approx);
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Patch B"));
}

#[test]
fn test_config_file_in_working_dir() {
    let d = temp();
    fs::write(d.path().join("patchrank.toml"), "[report]\nprecision = 6\n").unwrap();
    let out = patchrank(d.path(), &["rank", "patches.csv", "--quiet"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let score = stdout.lines().nth(1).unwrap().rsplit(' ').next().unwrap();
    assert_eq!(score.split('.').nth(1).unwrap().len(), 6);
}

#[test]
fn test_render_and_stats() {
    let d = temp();
    let out = patchrank(d.path(), &["render", "patches.csv", "-o", "net.dot"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(fs::read_to_string(d.path().join("net.dot"))
        .unwrap()
        .starts_with("digraph habitat"));

    let out = patchrank(d.path(), &["stats", "patches.csv"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Nodes:           3"));
    assert!(stdout.contains("Edges:           6"));
}
