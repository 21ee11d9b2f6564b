// End-to-end tests against the planrecon binary.
//
// Run with: cargo test -p planrecon-cli --test cli_tests

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn planrecon() -> Command {
    Command::new(env!("CARGO_BIN_EXE_planrecon"))
}

fn write_side(dir: &Path, file: &str, toml: &str) -> String {
    let path = dir.join(file);
    std::fs::write(&path, toml).unwrap();
    path.to_str().unwrap().to_string()
}

const LEFT: &str = r#"
source = "OneKonnect"

[[plans]]
name = "Dental"
reconciled = """
Jane O'Brien
Carlos Diaz
"""
unreconciled = "Pat Lee"
"#;

const RIGHT: &str = r#"
source = "Puzzle"

[[plans]]
name = "Dental"
reconciled = """
jane obrien
Noor Khan
"""
unreconciled = "pat  lee"
"#;

#[test]
fn compare_prints_report() {
    let dir = TempDir::new().unwrap();
    let left = write_side(dir.path(), "left.toml", LEFT);
    let right = write_side(dir.path(), "right.toml", RIGHT);

    let output = planrecon()
        .args(["compare", &left, &right])
        .output()
        .expect("planrecon compare");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Plan Comparator Report\nGenerated: "));
    assert!(stdout.contains("=== Plan: Dental ==="));
    assert!(stdout.contains("- Reconciled: Partial overlap"));
    assert!(stdout.contains("  In Both: Jane O'Brien"));
    assert!(stdout.contains("  Only OneKonnect: Carlos Diaz"));
    assert!(stdout.contains("  Only Puzzle: Noor Khan"));
    assert!(stdout.contains("- Unreconciled: Exact match"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 plan(s) compared"));
}

#[test]
fn compare_json_is_single_json_value() {
    let dir = TempDir::new().unwrap();
    let left = write_side(dir.path(), "left.toml", LEFT);
    let right = write_side(dir.path(), "right.toml", RIGHT);

    let output = planrecon()
        .args(["compare", &left, &right, "--json"])
        .output()
        .expect("planrecon compare --json");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let val: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert_eq!(val[0]["plan_name"], "Dental");
    assert_eq!(val[0]["sections"]["unreconciled"]["exact_same"], true);
}

#[test]
fn compare_writes_report_file() {
    let dir = TempDir::new().unwrap();
    let left = write_side(dir.path(), "left.toml", LEFT);
    let right = write_side(dir.path(), "right.toml", RIGHT);
    let report = dir.path().join("report.txt");

    let output = planrecon()
        .args(["compare", &left, &right, "--output", report.to_str().unwrap()])
        .output()
        .expect("planrecon compare --output");

    assert!(output.status.success());
    let text = std::fs::read_to_string(&report).unwrap();
    assert!(text.contains("=== Plan: Dental ==="));
}

#[test]
fn export_writes_audit_workbook() {
    let dir = TempDir::new().unwrap();
    let left = write_side(dir.path(), "left.toml", LEFT);
    let right = write_side(dir.path(), "right.toml", RIGHT);
    let out = dir.path().join("audits");

    let output = planrecon()
        .args([
            "export",
            &left,
            &right,
            "--project",
            "Acme Benefits",
            "--out",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("planrecon export");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let entries: Vec<_> = std::fs::read_dir(&out).unwrap().map(|e| e.unwrap()).collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name().into_string().unwrap();
    assert!(name.starts_with("Acme-Benefits_Audit_"));
    assert!(name.ends_with(".xlsx"));

    let bytes = std::fs::read(entries[0].path()).unwrap();
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn validate_reports_counts() {
    let dir = TempDir::new().unwrap();
    let left = write_side(dir.path(), "left.toml", LEFT);

    let output = planrecon()
        .args(["validate", &left])
        .output()
        .expect("planrecon validate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("source: OneKonnect"));
    assert!(stdout.contains("plans: 1"));
    assert!(stdout.contains("2 Reconciled"));
}

#[test]
fn missing_file_exits_with_io_code() {
    let output = planrecon()
        .args(["compare", "/nonexistent/left.toml", "/nonexistent/right.toml"])
        .output()
        .expect("planrecon compare");

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot read"));
}

#[test]
fn malformed_toml_exits_with_parse_code() {
    let dir = TempDir::new().unwrap();
    let bad = write_side(dir.path(), "bad.toml", "plans = \"not a table\"");
    let right = write_side(dir.path(), "right.toml", RIGHT);

    let output = planrecon()
        .args(["compare", &bad, &right])
        .output()
        .expect("planrecon compare");

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn empty_sides_produce_no_plans_report() {
    let dir = TempDir::new().unwrap();
    let left = write_side(dir.path(), "left.toml", "");
    let right = write_side(dir.path(), "right.toml", "");

    let output = planrecon()
        .args(["compare", &left, &right])
        .output()
        .expect("planrecon compare");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No plans to compare."));
}
