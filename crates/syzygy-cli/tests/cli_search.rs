// crates/syzygy-cli/tests/cli_search.rs

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_syzygy-cli"))
        .args(args)
        .output()
        .expect("run syzygy-cli")
}

fn run_ok(args: &[&str]) -> Vec<String> {
    let out = run(args);
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout)
        .expect("utf8 stdout")
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn simple_defaults_report_day_and_years() {
    let lines = run_ok(&["simple"]);
    assert_eq!(
        lines,
        vec![
            "Bodies realign after: 21679 days".to_string(),
            "Approximately 59.35 years".to_string(),
        ]
    );
}

#[test]
fn simple_short_horizon_reports_not_found() {
    let lines = run_ok(&["simple", "--max-days", "1000"]);
    assert_eq!(lines, vec!["No same-side alignment found within 1000 days.".to_string()]);
}

#[test]
fn dual_defaults_report_both_days() {
    let lines = run_ok(&["dual"]);
    assert_eq!(
        lines,
        vec![
            "First same-side alignment on day: 21679".to_string(),
            "First opposite-side alignment on day: 5275".to_string(),
        ]
    );
}

#[test]
fn dual_jsonl_uses_null_for_missing() {
    let lines = run_ok(&["dual", "--max-days", "10000", "--fmt", "jsonl"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("\"same_side\":null"), "{}", lines[0]);
    assert!(lines[0].contains("\"opposite_side\":5275"), "{}", lines[0]);
    assert!(lines[0].contains("\"days_scanned\":10000"), "{}", lines[0]);
}

#[test]
fn custom_periods_are_honoured() {
    let lines = run_ok(&["dual", "--p1", "2", "--p2", "2", "--p3", "4", "--max-days", "10"]);
    assert_eq!(
        lines,
        vec![
            "First same-side alignment on day: 4".to_string(),
            "First opposite-side alignment on day: 2".to_string(),
        ]
    );
}

#[test]
fn at_shows_snapshot() {
    let lines = run_ok(&["at", "--p1", "2", "--p2", "2", "--p3", "4", "--day", "2"]);
    assert!(lines.contains(&"day           = 2".to_string()), "{lines:?}");
    assert!(lines.contains(&"opposite_side = true".to_string()), "{lines:?}");
    assert!(lines.contains(&"same_side     = false".to_string()), "{lines:?}");
}

#[test]
fn output_file_receives_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.jsonl");
    let path_s = path.to_str().expect("utf8 path");

    let stdout = run_ok(&["simple", "--fmt", "jsonl", "--output", path_s]);
    assert!(stdout.is_empty(), "stdout should be empty: {stdout:?}");

    let body = std::fs::read_to_string(&path).expect("read report");
    assert!(body.contains("\"same_side\":21679"), "{body}");
    assert!(body.contains("\"years\":59.35"), "{body}");
}

#[test]
fn rejects_zero_period() {
    let out = run(&["simple", "--p2", "0"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("invalid period for second body"), "{err}");
}

#[test]
fn rejects_negative_tolerance() {
    let out = run(&["dual", "--tolerance", "-1"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("invalid tolerance"), "{err}");
}

#[test]
fn rejects_unknown_format() {
    let out = run(&["simple", "--fmt", "xml"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown --fmt"));
}

#[test]
fn wide_tolerance_is_accepted_with_a_warning() {
    let out = Command::new(env!("CARGO_BIN_EXE_syzygy-cli"))
        .args(["simple", "--tolerance", "200", "--max-days", "10"])
        .env("RUST_LOG", "warn")
        .output()
        .expect("run syzygy-cli");

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Bodies realign after: 1 days"), "{stdout}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("trivially satisfied"), "{stderr}");
}
