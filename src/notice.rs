//! # Notice Module
//!
//! The license/copyright notice enforced across source files, held as an
//! ordered list of lines.

use std::fmt;

/// The notice text to enforce, split into lines.
///
/// Trailing line terminators of the configured text are not part of the
/// notice, so a TOML multi-line string ending in a newline yields the same
/// notice as one without it. A `\r` at the end of a line is dropped.
///
/// # Examples
///
/// ```rust
/// use burocrata::notice::Notice;
///
/// let notice = Notice::from_text("# Copyright 2024\n# SPDX: MIT\n");
/// assert_eq!(notice.lines(), ["# Copyright 2024", "# SPDX: MIT"]);
/// assert_eq!(notice.render(), "# Copyright 2024\n# SPDX: MIT\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  lines: Vec<String>,
}

impl Notice {
  /// Builds a notice from its configured text.
  pub fn from_text(text: &str) -> Self {
    let trimmed = text.trim_end_matches(['\n', '\r']);
    if trimmed.is_empty() {
      return Self { lines: Vec::new() };
    }

    let lines = trimmed
      .split('\n')
      .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
      .collect();

    Self { lines }
  }

  /// The notice lines, without line terminators.
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// Number of leading file lines the notice is compared against.
  pub fn line_count(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// The text prepended to a file: every line followed by `\n`.
  pub fn render(&self) -> String {
    let mut text = self.lines.join("\n");
    text.push('\n');
    text
  }
}

impl fmt::Display for Notice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.lines.join("\n"))
  }
}
