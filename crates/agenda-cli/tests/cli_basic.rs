//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a snapshot file written
//! to a temp directory, always with an explicit --date so output is
//! deterministic.

use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "agenda-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_snapshot(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("tasks.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        br#"[
            {
                "_id": "t1",
                "title": "Algorithms lecture",
                "kind": "static",
                "type": "class",
                "startTime": "10:00",
                "endTime": "12:00",
                "staticDays": [2, 4]
            },
            {
                "_id": "t2",
                "title": "Thesis meeting",
                "kind": "ad_hoc",
                "type": "meeting",
                "date": "2024-03-14",
                "startTime": "14:00",
                "endTime": "14:30",
                "status": "completed"
            }
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn test_week_lists_expanded_occurrences() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());

    let (stdout, stderr, code) = run_cli(&[
        "week",
        "--tasks",
        snapshot.to_str().unwrap(),
        "--date",
        "2024-03-14",
    ]);
    assert_eq!(code, 0, "week failed: {stderr}");
    assert!(stdout.contains("Week of 2024-03-10 - 2024-03-16"));
    assert!(stdout.contains("Algorithms lecture"));
    assert!(stdout.contains("Thesis meeting"));
}

#[test]
fn test_today_reports_completion() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());

    let (stdout, stderr, code) = run_cli(&[
        "today",
        "--tasks",
        snapshot.to_str().unwrap(),
        "--date",
        "2024-03-14",
    ]);
    assert_eq!(code, 0, "today failed: {stderr}");
    // Thursday: the static lecture plus the completed ad-hoc meeting.
    assert!(stdout.contains("2 total, 1 completed, 1 pending (50%)"));
}

#[test]
fn test_report_json_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());

    let (stdout, stderr, code) = run_cli(&[
        "report",
        "--tasks",
        snapshot.to_str().unwrap(),
        "--date",
        "2024-03-14",
        "--range",
        "weekly",
        "--json",
    ]);
    assert_eq!(code, 0, "report failed: {stderr}");

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["summary"]["total"], 3);
    assert_eq!(report["by_kind"]["static"], 2);
    assert_eq!(report["by_kind"]["ad_hoc"], 1);
    assert_eq!(report["by_type"]["meeting"], 1);
}

#[test]
fn test_missing_snapshot_fails_loudly() {
    let (_, stderr, code) = run_cli(&["week", "--tasks", "/no/such/file.json"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}
