mod common;

use common::{burocrata, sample_project};
use predicates::prelude::*;

#[test]
fn test_color_modes() -> Result<(), Box<dyn std::error::Error>> {
  let dir = sample_project();

  let output = burocrata(dir.path()).args(["--check", "--colors=never", "."]).output()?;
  assert_eq!(output.status.code(), Some(1));
  assert!(!String::from_utf8(output.stdout)?.contains("\x1b["));

  // Auto mode with stdout captured by the test
  let output = burocrata(dir.path()).args(["--check", "."]).output()?;
  assert!(!String::from_utf8(output.stdout)?.contains("\x1b["));

  // Forced colors even though stdout is not a terminal
  let output = burocrata(dir.path()).args(["--check", "--colors=always", "."]).output()?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8(output.stdout)?.contains("\x1b["));

  Ok(())
}

#[test]
fn test_log_env_var_enables_diagnostics() {
  let dir = sample_project();

  burocrata(dir.path())
    .env("BUROCRATA_LOG", "debug")
    .args(["--check", "--quiet", "."])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Loading config from"));
}

#[test]
fn test_no_diagnostics_by_default() {
  let dir = sample_project();

  burocrata(dir.path())
    .args(["--check", "."])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Loading config from").not());
}
