//! # Report Module
//!
//! This module holds the result of a run: what happened to every candidate
//! file, plus the totals derived from it. It can also write the result as a
//! JSON document for consumption by other tools.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Information about a processed file for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// Whether the file started with the notice when it was checked
  pub has_notice: bool,
  /// Action taken on the file, if any
  pub action: Option<FileAction>,
}

/// Possible actions taken on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
  /// The notice was prepended to the file
  Added,
  /// The file already had the notice
  #[serde(rename = "none")]
  NoActionNeeded,
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Outcome of one run over a directory.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
  /// One report per candidate file, sorted by path
  pub files: Vec<FileReport>,
  /// Whether files were only checked
  pub check_only: bool,
  pub elapsed: Duration,
}

impl RunResult {
  /// Total number of candidate files scanned.
  pub fn scanned(&self) -> usize {
    self.files.len()
  }

  /// Files that already started with the notice.
  pub fn with_notice(&self) -> impl Iterator<Item = &FileReport> {
    self.files.iter().filter(|f| f.has_notice)
  }

  /// Files that lacked the notice when checked, whether or not it was added
  /// afterwards.
  pub fn missing(&self) -> impl Iterator<Item = &FileReport> {
    self.files.iter().filter(|f| !f.has_notice)
  }

  /// Files the notice was added to.
  pub fn added(&self) -> impl Iterator<Item = &FileReport> {
    self.files.iter().filter(|f| f.action == Some(FileAction::Added))
  }

  /// Files that still lack the notice after the run.
  pub fn unresolved(&self) -> impl Iterator<Item = &FileReport> {
    self.missing().filter(|f| f.action != Some(FileAction::Added))
  }

  /// True when every candidate file carries the notice after the run.
  pub fn is_clean(&self) -> bool {
    self.unresolved().next().is_none()
  }

  pub fn summary(&self) -> RunSummary {
    RunSummary {
      total_files: self.scanned(),
      files_with_notice: self.with_notice().count(),
      files_without_notice: self.missing().count(),
      notices_added: self.added().count(),
      check_only: self.check_only,
      processing_time_seconds: self.elapsed.as_secs_f64(),
    }
  }
}

/// Counts derived from a [`RunResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
  pub total_files: usize,
  pub files_with_notice: usize,
  pub files_without_notice: usize,
  pub notices_added: usize,
  pub check_only: bool,
  pub processing_time_seconds: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: RunSummary,
  files: &'a [FileReport],
}

/// Render the run as a pretty-printed JSON document.
pub fn to_json(result: &RunResult) -> Result<String> {
  let report = JsonReport {
    summary: result.summary(),
    files: &result.files,
  };
  serde_json::to_string_pretty(&report).with_context(|| "Failed to serialize report")
}

/// Write the JSON report to `output_path`.
pub fn write_json_report(result: &RunResult, output_path: &Path) -> Result<()> {
  let content = to_json(result)?;
  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}
