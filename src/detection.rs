//! # Notice Detection Module
//!
//! This module contains the interfaces and implementations for deciding
//! whether a file already starts with the configured notice. It allows for
//! replacing the detection algorithm without modifying the processor.

use std::io::{self, BufRead};

use crate::notice::Notice;

/// Trait for notice detectors.
///
/// Implementations read as little of the file as they need; the reader is
/// positioned at the start of the file.
pub trait NoticeDetector: Send + Sync {
  /// Checks if the content read from `reader` starts with the notice.
  ///
  /// # Errors
  ///
  /// Returns any I/O error raised while reading.
  fn has_notice(&self, reader: &mut dyn BufRead) -> io::Result<bool>;
}

/// Compares the leading lines of a file against the notice, one line at a
/// time.
///
/// A file line matches when it equals the notice line after its trailing
/// `\n` (and a `\r` before it) is stripped. Reading stops at the first
/// mismatch. A file with fewer lines than the notice never matches.
///
/// Lines are compared as bytes, so files that are not valid UTF-8 are
/// reported as missing the notice instead of failing.
pub struct LeadingLinesDetector {
  lines: Vec<Vec<u8>>,
}

impl LeadingLinesDetector {
  /// Creates a detector for the given notice.
  pub fn new(notice: &Notice) -> Self {
    let lines = notice.lines().iter().map(|line| line.as_bytes().to_vec()).collect();
    Self { lines }
  }
}

impl NoticeDetector for LeadingLinesDetector {
  fn has_notice(&self, reader: &mut dyn BufRead) -> io::Result<bool> {
    let mut buf = Vec::new();

    for expected in &self.lines {
      buf.clear();
      if reader.read_until(b'\n', &mut buf)? == 0 {
        // File is shorter than the notice
        return Ok(false);
      }

      if strip_line_terminator(&buf) != expected.as_slice() {
        return Ok(false);
      }
    }

    Ok(true)
  }
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
  let line = line.strip_suffix(b"\n").unwrap_or(line);
  line.strip_suffix(b"\r").unwrap_or(line)
}
