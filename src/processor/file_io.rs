//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! Every operation opens, uses and closes its file handle within the call.

use std::fs::{self, File};
use std::io::{BufReader, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Opens a file for buffered reading from the start.
  pub fn open_reader(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    Ok(BufReader::new(file))
  }

  /// Read full file content as bytes.
  pub fn read_full_content(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replace the content of an existing file.
  ///
  /// The new content is written to a temporary file in the same directory,
  /// which then takes over the original's permissions and is renamed over
  /// it. Readers see either the old or the new content, never a partial
  /// write.
  pub fn replace_file(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let permissions = fs::metadata(path)
      .with_context(|| format!("Failed to read metadata: {}", path.display()))?
      .permissions();

    let mut tmp = NamedTempFile::new_in(dir)
      .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp
      .write_all(content)
      .with_context(|| format!("Failed to write temporary file for {}", path.display()))?;
    tmp
      .as_file()
      .sync_all()
      .with_context(|| format!("Failed to flush temporary file for {}", path.display()))?;
    fs::set_permissions(tmp.path(), permissions)
      .with_context(|| format!("Failed to set permissions for {}", path.display()))?;

    tmp
      .persist(path)
      .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
  }
}
