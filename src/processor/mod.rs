//! # Processor Module
//!
//! This module contains the core functionality for checking files for the
//! notice and inserting it where it is missing.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and atomic replacement
//! - [`file_collector`] - Directory traversal and candidate selection
//!
//! The [`Processor`] struct is the main entry point for all file operations,
//! orchestrating the submodules to provide a cohesive API.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::detection::{LeadingLinesDetector, NoticeDetector};
use crate::diff::DiffManager;
use crate::file_filter::ExtensionFilter;
use crate::ignore::IgnoreMatcher;
use crate::notice::Notice;
use crate::output::Reporter;
use crate::report::{FileAction, FileReport, RunResult};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub notice: Notice,
  pub extensions: ExtensionFilter,
  pub ignore_matcher: IgnoreMatcher,

  /// Only report missing notices, never modify files
  pub check_only: bool,

  pub reporter: Reporter,

  // Optional components
  pub diff_manager: Option<DiffManager>,
  pub detector: Option<Box<dyn NoticeDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(notice, extensions, ignore_matcher)
  /// }
  /// ```
  pub fn new(notice: Notice, extensions: ExtensionFilter, ignore_matcher: IgnoreMatcher) -> Self {
    Self {
      notice,
      extensions,
      ignore_matcher,
      check_only: false,
      reporter: Reporter::quiet(),
      diff_manager: None,
      detector: None,
    }
  }
}

/// Processor for checking and inserting the notice.
///
/// The `Processor` is responsible for:
/// - Finding the candidate files under a directory
/// - Checking whether each file starts with the notice
/// - Prepending the notice to files that lack it (unless checking only)
/// - Previewing insertions as diffs in check mode
/// - Collecting a report entry for every candidate file
pub struct Processor {
  /// Notice to enforce
  notice: Notice,

  /// Whether to only check for the notice without modifying files
  check_only: bool,

  /// Destination for per-file progress messages
  reporter: Reporter,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,

  /// Detector for checking if files start with the notice
  detector: Box<dyn NoticeDetector>,

  /// File collector for directory traversal
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    let detector = config
      .detector
      .unwrap_or_else(|| Box::new(LeadingLinesDetector::new(&config.notice)));

    Self {
      file_collector: FileCollector::new(config.extensions, config.ignore_matcher),
      notice: config.notice,
      check_only: config.check_only,
      reporter: config.reporter,
      diff_manager: config.diff_manager.unwrap_or_default(),
      detector,
    }
  }

  /// Collects the candidate files under `dir`, sorted by path.
  ///
  /// # Errors
  ///
  /// Returns an error if directory traversal fails.
  pub fn collect_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
    self.file_collector.collect(dir)
  }

  /// Checks whether the file at `path` starts with the notice.
  ///
  /// Only the leading lines needed for the comparison are read.
  pub fn has_notice(&self, path: &Path) -> Result<bool> {
    let mut reader = FileIO::open_reader(path)?;
    self
      .detector
      .has_notice(&mut reader)
      .with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Prepends the notice to the file at `path`.
  ///
  /// The file is replaced atomically; the rest of its content is kept
  /// byte for byte.
  pub fn insert_notice(&self, path: &Path) -> Result<()> {
    let original = FileIO::read_full_content(path)?;
    let new_content = self.with_notice(&original);
    FileIO::replace_file(path, &new_content)
  }

  /// Discovers the candidate files under `dir` and processes them.
  ///
  /// # Errors
  ///
  /// Returns an error if traversal fails or if any file cannot be read or
  /// written. Files processed before the failure keep their changes.
  pub fn process(&self, dir: &Path) -> Result<RunResult> {
    let files = self.collect_files(dir)?;
    self.process_collected(files)
  }

  /// Processes files from a pre-collected list.
  ///
  /// Use this when files have already been collected via
  /// [`Processor::collect_files`], for instance to announce the count first.
  pub fn process_collected(&self, files: Vec<PathBuf>) -> Result<RunResult> {
    let start_time = Instant::now();

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
      reports.push(self.process_file(&path)?);
    }

    let elapsed = start_time.elapsed();
    debug!("Processed {} files in {}ms", reports.len(), elapsed.as_millis());

    Ok(RunResult {
      files: reports,
      check_only: self.check_only,
      elapsed,
    })
  }

  /// Checks a single file and inserts the notice if needed.
  pub fn process_file(&self, path: &Path) -> Result<FileReport> {
    if self.has_notice(path)? {
      trace!("Notice present: {}", path.display());
      return Ok(FileReport {
        path: path.to_path_buf(),
        has_notice: true,
        action: Some(FileAction::NoActionNeeded),
      });
    }

    if self.check_only {
      self.reporter.echo(format!("Missing notice: {}", path.display()));

      if self.diff_manager.is_enabled()
        && let Err(e) = self.preview_insertion(path)
      {
        self
          .reporter
          .error(format!("Warning: Failed to display diff for {}: {:#}", path.display(), e));
      }

      return Ok(FileReport {
        path: path.to_path_buf(),
        has_notice: false,
        action: None,
      });
    }

    self.insert_notice(path)?;
    self.reporter.echo(format!("Added notice to: {}", path.display()));

    Ok(FileReport {
      path: path.to_path_buf(),
      has_notice: false,
      action: Some(FileAction::Added),
    })
  }

  /// Shows the diff that inserting the notice would produce.
  fn preview_insertion(&self, path: &Path) -> Result<()> {
    let original = FileIO::read_full_content(path)?;
    let new_content = self.with_notice(&original);
    self.diff_manager.display_diff(
      path,
      &String::from_utf8_lossy(&original),
      &String::from_utf8_lossy(&new_content),
    )
  }

  fn with_notice(&self, original: &[u8]) -> Vec<u8> {
    let rendered = self.notice.render();
    let mut content = Vec::with_capacity(rendered.len() + original.len());
    content.extend_from_slice(rendered.as_bytes());
    content.extend_from_slice(original);
    content
  }
}
