//! # File Collector Module
//!
//! This module walks the target directory and collects the candidate files:
//! regular files with a configured extension that are not ignored.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::file_filter::{CompositeFilter, ExtensionFilter, FileFilter, IgnoreFilter, create_default_filter};
use crate::ignore::IgnoreMatcher;

/// File collector for directory traversal.
///
/// The `FileCollector` handles:
/// - Walking a directory recursively without following symlinks
/// - Skipping ignored directories without descending into them
/// - Applying the extension and ignore filters to every regular file
pub struct FileCollector {
  /// Filter applied to every regular file
  file_filter: CompositeFilter,

  /// Used to prune ignored directories during the walk
  dir_filter: IgnoreFilter,
}

impl FileCollector {
  /// Creates a new FileCollector for the given extensions and ignore rules.
  pub fn new(extensions: ExtensionFilter, ignore_matcher: IgnoreMatcher) -> Self {
    Self {
      file_filter: create_default_filter(extensions, ignore_matcher.clone()),
      dir_filter: IgnoreFilter::new(ignore_matcher),
    }
  }

  /// Collects every candidate file under `dir`, sorted by path.
  ///
  /// # Errors
  ///
  /// Returns an error if any part of the tree cannot be read.
  pub fn collect(&self, dir: &Path) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", dir.display());
    let start_time = std::time::Instant::now();

    let mut files = Vec::new();
    let mut seen = 0usize;

    let walker = WalkDir::new(dir).follow_links(false).into_iter().filter_entry(|entry| {
      // The root itself is always walked, even if it is inside an ignored tree
      if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
      }
      if self.dir_filter.is_dir_ignored(entry.path()) {
        trace!("Skipping directory: {} (matches ignore pattern)", entry.path().display());
        return false;
      }
      true
    });

    for entry in walker {
      let entry = entry.with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
      if !entry.file_type().is_file() {
        continue;
      }
      seen += 1;

      let result = self.file_filter.should_process(entry.path())?;
      if result.should_process {
        files.push(entry.into_path());
      } else if let Some(reason) = result.reason {
        trace!("Skipping: {} ({})", entry.path().display(), reason);
      }
    }

    files.sort();

    debug!(
      "Found {} candidate files out of {} in {}ms",
      files.len(),
      seen,
      start_time.elapsed().as_millis()
    );

    Ok(files)
  }
}
