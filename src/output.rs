//! # Output Module
//!
//! This module centralizes all user-facing output for burocrata.
//!
//! - Informational messages go to stderr and are dropped in quiet mode.
//! - Errors go to stderr and are always shown.
//! - The final result (files missing the notice, or the notice added) goes to
//!   stdout and is always shown, so it can be piped.

use std::fmt::{self, Display};
use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::report::RunResult;

/// Symbols used in output
pub mod symbols {
  /// Success/has notice
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing notice/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Verbosity-gated writer for user-facing messages.
///
/// `Reporter` is a plain value; copy it into whatever needs to talk to the
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
  verbose: bool,
}

impl Reporter {
  pub const fn new(verbose: bool) -> Self {
    Self { verbose }
  }

  /// A reporter that only emits errors and results.
  pub const fn quiet() -> Self {
    Self::new(false)
  }

  /// Print an informational message to stderr if verbosity is enabled.
  pub fn echo(&self, message: impl Display) {
    if self.verbose {
      eprintln!("{message}");
    }
  }

  /// Print a message to stderr regardless of verbosity.
  pub fn error(&self, message: impl Display) {
    let message = message.to_string();
    eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.red()));
  }

  /// Print the "Checking N files..." or "Processing N files..." message.
  pub fn start_message(&self, file_count: usize, directory: &Path, check_only: bool) {
    let verb = if check_only { "Checking" } else { "Processing" };
    self.echo(format!(
      "{} {} {} in {}...",
      verb,
      file_count,
      plural(file_count, "file"),
      directory.display()
    ));
  }

  /// Print the result of a run to stdout.
  pub fn print_result(&self, result: &RunResult) {
    print!("{}", self.result_view(result));
  }

  /// Build the text printed by [`Reporter::print_result`].
  pub fn render_result(&self, result: &RunResult) -> String {
    self.result_view(result).to_string()
  }

  const fn result_view<'a>(&self, result: &'a RunResult) -> ResultView<'a> {
    ResultView {
      result,
      verbose: self.verbose,
    }
  }
}

/// The final result of a run, formatted for stdout.
struct ResultView<'a> {
  result: &'a RunResult,
  verbose: bool,
}

impl fmt::Display for ResultView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let result = self.result;

    if result.check_only {
      let missing: Vec<_> = result.missing().collect();
      if missing.is_empty() {
        write_all_ok(f, result.scanned())?;
      } else {
        writeln!(
          f,
          "{} {} {} missing the notice:",
          symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
          missing.len(),
          plural(missing.len(), "file")
        )?;
        for file in missing {
          writeln!(f, "  {}", file.path.display())?;
        }
      }
    } else {
      let added: Vec<_> = result.added().collect();
      if added.is_empty() {
        write_all_ok(f, result.scanned())?;
      } else {
        writeln!(
          f,
          "{} Added notice to {} {}:",
          symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
          added.len(),
          plural(added.len(), "file")
        )?;
        for file in added {
          writeln!(f, "  {}", file.path.display())?;
        }
      }
    }

    let summary = result.summary();
    let missing_count = summary.files_without_notice - summary.notices_added;
    let missing_str = if missing_count > 0 {
      missing_count.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    } else {
      missing_count.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
    };

    write!(
      f,
      "Summary: {} OK, {} missing, {} added",
      summary.files_with_notice.if_supports_color(Stream::Stdout, |s| s.cyan()),
      missing_str,
      summary.notices_added.if_supports_color(Stream::Stdout, |s| s.cyan())
    )?;

    // Show timing in verbose mode
    if self.verbose {
      write!(f, " ({:.2}s)", summary.processing_time_seconds)?;
    }
    writeln!(f)?;

    if self.verbose && result.check_only && missing_count > 0 {
      writeln!(
        f,
        "{}",
        "Run without --check to insert the notice.".if_supports_color(Stream::Stdout, |s| s.yellow())
      )?;
    }

    Ok(())
  }
}

fn write_all_ok(f: &mut fmt::Formatter<'_>, scanned: usize) -> fmt::Result {
  writeln!(
    f,
    "{} All files have the notice ({} checked).",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    scanned
  )
}

fn plural(count: usize, word: &str) -> String {
  if count == 1 { word.to_string() } else { format!("{word}s") }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;
  use std::time::Duration;

  use super::*;
  use crate::report::{FileAction, FileReport};

  fn report(path: &str, has_notice: bool, action: Option<FileAction>) -> FileReport {
    FileReport {
      path: PathBuf::from(path),
      has_notice,
      action,
    }
  }

  /// Keep escape codes out of the rendered text even when stdout is a TTY.
  fn plain(verbose: bool) -> Reporter {
    owo_colors::set_override(false);
    Reporter::new(verbose)
  }

  #[test]
  fn test_check_mode_lists_missing_files() {
    let result = RunResult {
      files: vec![
        report("src/a.py", true, Some(FileAction::NoActionNeeded)),
        report("src/b.py", false, None),
      ],
      check_only: true,
      elapsed: Duration::ZERO,
    };

    let text = plain(false).render_result(&result);

    assert!(text.contains("1 file missing the notice:"));
    assert!(text.contains("  src/b.py\n"));
    assert!(!text.contains("src/a.py"));
    assert!(text.contains("Summary: 1 OK, 1 missing, 0 added"));
    assert!(!text.contains("--check"));
  }

  #[test]
  fn test_fix_mode_lists_added_files() {
    let result = RunResult {
      files: vec![
        report("a.c", false, Some(FileAction::Added)),
        report("b.c", false, Some(FileAction::Added)),
      ],
      check_only: false,
      elapsed: Duration::ZERO,
    };

    let text = plain(false).render_result(&result);

    assert!(text.contains("Added notice to 2 files:"));
    assert!(text.contains("  a.c\n  b.c\n"));
    assert!(text.contains("Summary: 0 OK, 0 missing, 2 added"));
  }

  #[test]
  fn test_all_ok_and_verbose_timing() {
    let result = RunResult {
      files: vec![report("a.sh", true, Some(FileAction::NoActionNeeded))],
      check_only: true,
      elapsed: Duration::from_millis(1500),
    };

    let text = plain(true).render_result(&result);

    assert!(text.contains("All files have the notice (1 checked)."));
    assert!(text.contains("(1.50s)"));
  }

  #[test]
  fn test_verbose_hint_in_check_mode() {
    let result = RunResult {
      files: vec![report("a.h", false, None)],
      check_only: true,
      elapsed: Duration::ZERO,
    };

    let text = plain(true).render_result(&result);
    assert!(text.contains("Run without --check to insert the notice."));
  }

  #[test]
  fn test_full_text_of_clean_fix_run() {
    let result = RunResult {
      files: vec![report("a.py", true, Some(FileAction::NoActionNeeded))],
      check_only: false,
      elapsed: Duration::ZERO,
    };

    assert_eq!(
      plain(false).render_result(&result),
      "\u{2713} All files have the notice (1 checked).\nSummary: 1 OK, 0 missing, 0 added\n"
    );
  }

  #[test]
  fn test_plural() {
    assert_eq!(plural(0, "file"), "files");
    assert_eq!(plural(1, "file"), "file");
    assert_eq!(plural(2, "file"), "files");
  }
}
