//! # File Filter Module
//!
//! This module contains components for deciding which discovered files are
//! candidates for the notice check: files with a configured extension that
//! are not excluded by the ignore rules.

use std::path::Path;

use anyhow::{Result, bail};

use crate::ignore::IgnoreMatcher;

/// Result of a file filtering operation.
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  ///
  /// # Parameters
  ///
  /// * `path` - The path to the file to check
  ///
  /// # Returns
  ///
  /// A `FilterResult` indicating whether the file should be processed and why
  /// not if applicable.
  fn should_process(&self, path: &Path) -> Result<FilterResult>;
}

/// Filter that accepts files whose name ends in `.<ext>` for one of the
/// configured extensions.
///
/// Matching is on the file name suffix, so `tar.gz` selects `a.tar.gz` and
/// `py` does not select `py.typed`.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
  /// Suffixes including the leading dot, e.g. ".py"
  suffixes: Vec<String>,
}

impl ExtensionFilter {
  /// Creates a filter from extensions given without a leading dot.
  ///
  /// Surrounding whitespace and a leading dot are tolerated, empty entries
  /// are dropped, and duplicates are removed.
  ///
  /// # Errors
  ///
  /// Returns an error if no extension remains.
  pub fn new<S: AsRef<str>>(extensions: &[S]) -> Result<Self> {
    let mut suffixes: Vec<String> = Vec::with_capacity(extensions.len());
    for ext in extensions {
      let ext = ext.as_ref().trim().trim_start_matches('.');
      if ext.is_empty() {
        continue;
      }
      let suffix = format!(".{ext}");
      if !suffixes.contains(&suffix) {
        suffixes.push(suffix);
      }
    }

    if suffixes.is_empty() {
      bail!("No file extensions given");
    }

    Ok(Self { suffixes })
  }

  /// Parses a comma-separated list such as `"py,c,h,sh"`.
  pub fn from_list(list: &str) -> Result<Self> {
    let extensions: Vec<&str> = list.split(',').collect();
    Self::new(&extensions)
  }

  /// The configured extensions, without the leading dot.
  pub fn extensions(&self) -> impl Iterator<Item = &str> {
    self.suffixes.iter().map(|s| &s[1..])
  }

  /// Checks whether the file name of `path` ends in a configured extension.
  pub fn matches(&self, path: &Path) -> bool {
    let Some(name) = path.file_name() else {
      return false;
    };
    let name = name.to_string_lossy();
    self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    if self.matches(path) {
      Ok(FilterResult::process())
    } else {
      Ok(FilterResult::skip("Extension not selected"))
    }
  }
}

/// Filter that excludes files matching ignore patterns.
pub struct IgnoreFilter {
  matcher: IgnoreMatcher,
}

impl IgnoreFilter {
  /// Creates a new IgnoreFilter with the given IgnoreMatcher.
  pub const fn new(matcher: IgnoreMatcher) -> Self {
    Self { matcher }
  }

  /// Checks whether a directory is excluded, so a walk can skip it whole.
  pub fn is_dir_ignored(&self, path: &Path) -> bool {
    self.matcher.is_ignored(path, true)
  }
}

impl FileFilter for IgnoreFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    if self.matcher.is_ignored(path, false) {
      Ok(FilterResult::skip("Matches ignore pattern"))
    } else {
      Ok(FilterResult::process())
    }
  }
}

/// Filter that combines multiple filters.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  /// Adds a filter to this CompositeFilter.
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    for filter in &self.filters {
      let result = filter.should_process(path)?;
      if !result.should_process {
        return Ok(result);
      }
    }
    Ok(FilterResult::process())
  }
}

/// Constructs the candidate filter: extension first, then ignore rules.
pub fn create_default_filter(extensions: ExtensionFilter, matcher: IgnoreMatcher) -> CompositeFilter {
  CompositeFilter::new(vec![Box::new(extensions), Box::new(IgnoreFilter::new(matcher))])
}
