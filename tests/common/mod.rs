#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

pub const NOTICE: &str = "# Copyright 2024\n# SPDX: MIT\n";

/// Writes a `pyproject.toml` declaring `notice` into `dir`.
pub fn write_descriptor(dir: &Path, notice: &str) {
  let content = format!("[project]\nname = \"demo\"\n\n[tool.burocrata]\nnotice = '''\n{notice}'''\n");
  fs::write(dir.join("pyproject.toml"), content).expect("write pyproject.toml");
}

/// Writes `content` to `rel` under `dir`, creating parent directories.
pub fn write_file(dir: &Path, rel: &str, content: &str) {
  let path = dir.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).expect("create parent directory");
  }
  fs::write(path, content).expect("write test file");
}

pub fn read_file(dir: &Path, rel: &str) -> String {
  fs::read_to_string(dir.join(rel)).expect("read test file")
}

/// A project with the standard notice, `a.py` carrying it and `b.py`
/// lacking it.
pub fn sample_project() -> TempDir {
  let dir = TempDir::new().expect("create temp dir");
  write_descriptor(dir.path(), NOTICE);
  write_file(dir.path(), "a.py", "# Copyright 2024\n# SPDX: MIT\nprint('a')\n");
  write_file(dir.path(), "b.py", "print('b')\n");
  dir
}

/// The burocrata binary, run from `dir` with colors and log overrides
/// cleared from the environment.
pub fn burocrata(dir: &Path) -> Command {
  let mut cmd = Command::cargo_bin("burocrata").expect("binary is built");
  cmd
    .current_dir(dir)
    .env_remove("BUROCRATA_LOG")
    .env_remove("FORCE_COLOR")
    .env_remove("CLICOLOR_FORCE")
    .env("NO_COLOR", "1");
  cmd
}
