mod common;

use std::fs;

use common::{burocrata, sample_project};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_json_report_in_check_mode() -> Result<(), Box<dyn std::error::Error>> {
  let dir = sample_project();
  let report_path = dir.path().join("report.json");

  burocrata(dir.path())
    .args(["--check", "-e", "py", "--report-json"])
    .arg(&report_path)
    .arg(".")
    .assert()
    .code(1);

  let report: Value = serde_json::from_str(&fs::read_to_string(&report_path)?)?;
  assert_eq!(report["summary"]["total_files"], 2);
  assert_eq!(report["summary"]["files_with_notice"], 1);
  assert_eq!(report["summary"]["files_without_notice"], 1);
  assert_eq!(report["summary"]["notices_added"], 0);
  assert_eq!(report["summary"]["check_only"], true);

  let files = report["files"].as_array().ok_or("files is not an array")?;
  assert_eq!(files.len(), 2);
  assert!(files[1]["path"].as_str().ok_or("path is not a string")?.ends_with("b.py"));
  assert_eq!(files[1]["has_notice"], false);
  assert!(files[1]["action"].is_null());

  Ok(())
}

#[test]
fn test_json_report_in_fix_mode() -> Result<(), Box<dyn std::error::Error>> {
  let dir = sample_project();
  let report_path = dir.path().join("report.json");

  burocrata(dir.path())
    .args(["-e", "py", "--report-json"])
    .arg(&report_path)
    .arg(".")
    .assert()
    .success()
    .stderr(predicate::str::contains("Generated JSON report at"));

  let report: Value = serde_json::from_str(&fs::read_to_string(&report_path)?)?;
  assert_eq!(report["summary"]["notices_added"], 1);
  assert_eq!(report["files"][0]["action"], "none");
  assert_eq!(report["files"][1]["action"], "added");

  Ok(())
}

#[test]
fn test_report_failure_keeps_exit_code() {
  let dir = sample_project();
  let report_path = dir.path().join("missing-dir").join("report.json");

  burocrata(dir.path())
    .args(["-e", "py", "--report-json"])
    .arg(&report_path)
    .arg(".")
    .assert()
    .success()
    .stderr(predicate::str::contains("Error generating JSON report"));
}
