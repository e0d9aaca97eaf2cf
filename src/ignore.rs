//! # Ignore Module
//!
//! This module decides which paths are excluded from processing.
//!
//! It supports:
//! - The `.gitignore` file in the directory burocrata is run from
//! - Command-line ignore patterns, using the same gitignore syntax
//!
//! Matching follows gitignore semantics: wildcards, directory patterns,
//! anchoring and negation. A path is ignored when it, or any of its parent
//! directories, is matched.

use std::borrow::Cow;
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::{debug, trace};

/// Name of the ignore file loaded from the root directory.
pub const IGNORE_FILENAME: &str = ".gitignore";

/// Gitignore-style matcher rooted at a directory.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use burocrata::ignore::IgnoreMatcher;
///
/// # fn main() -> anyhow::Result<()> {
/// // Load ./.gitignore plus an extra pattern
/// let matcher = IgnoreMatcher::new(Path::new("."), &["build/".to_string()])?;
///
/// assert!(matcher.is_ignored(Path::new("build/gen.py"), false));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct IgnoreMatcher {
  gitignore: Gitignore,

  /// Directory that patterns are relative to
  root: PathBuf,
}

impl IgnoreMatcher {
  /// Creates a matcher that ignores nothing.
  pub fn empty(root: &Path) -> Self {
    Self {
      gitignore: Gitignore::empty(),
      root: root.to_path_buf(),
    }
  }

  /// Creates a matcher from `root/.gitignore` (if it exists) and the given
  /// command-line patterns.
  ///
  /// # Errors
  ///
  /// Returns an error if the ignore file exists but cannot be read, or if a
  /// pattern is not a valid glob.
  pub fn new(root: &Path, cli_patterns: &[String]) -> Result<Self> {
    let mut builder = GitignoreBuilder::new(root);

    let ignore_path = root.join(IGNORE_FILENAME);
    if ignore_path.is_file() {
      debug!("Loading ignore file: {}", ignore_path.display());
      let content = fs::read_to_string(&ignore_path)
        .with_context(|| format!("Failed to read ignore file: {}", ignore_path.display()))?;

      for line in content.lines() {
        builder
          .add_line(Some(ignore_path.clone()), line)
          .with_context(|| format!("Invalid pattern in {}: {}", ignore_path.display(), line))?;
      }
    } else {
      trace!("No ignore file at {}", ignore_path.display());
    }

    for pattern in cli_patterns {
      // Normalize pattern: convert backslashes to forward slashes
      let pattern = pattern.replace('\\', "/");
      builder
        .add_line(None, &pattern)
        .with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
    }

    let gitignore = builder.build().with_context(|| "Failed to build ignore matcher")?;
    debug!("Loaded {} ignore patterns", gitignore.num_ignores());

    Ok(Self {
      gitignore,
      root: root.to_path_buf(),
    })
  }

  /// Checks if a path is excluded by the ruleset.
  ///
  /// Relative paths are taken relative to the root. Paths that fall outside
  /// the root are never ignored.
  pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
    if self.gitignore.is_empty() {
      return false;
    }

    let Some(rel_path) = self.relative_to_root(path) else {
      return false;
    };

    if rel_path.as_os_str().is_empty() {
      return false;
    }

    let matched = self.gitignore.matched_path_or_any_parents(&rel_path, is_dir);
    if matched.is_ignore() {
      trace!("Skipping: {} (matches ignore pattern)", path.display());
      return true;
    }

    false
  }

  fn relative_to_root<'a>(&self, path: &'a Path) -> Option<Cow<'a, Path>> {
    let rel_path: Cow<'a, Path> = if path.is_absolute() {
      Cow::Borrowed(path.strip_prefix(&self.root).ok()?)
    } else {
      // Drop "./" and similar so the path lines up with the patterns
      Cow::Owned(path.components().filter(|c| !matches!(c, Component::CurDir)).collect())
    };

    if rel_path
      .components()
      .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
    {
      return None;
    }

    Some(rel_path)
  }
}
