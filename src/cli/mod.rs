//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing and maps the outcome of a run to the
//! process exit code.

mod check;

use std::process::ExitCode;
use std::sync::LazyLock;

pub use check::{CheckArgs, run_check};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version string shown by `--version`, with the commit the binary was built
/// from when known.
static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
  let version = env!("CARGO_PKG_VERSION");
  match (option_env!("GIT_HASH"), option_env!("GIT_DATE")) {
    (Some(hash), Some(date)) if !hash.is_empty() => format!("{version} ({hash} {date})"),
    (Some(hash), _) if !hash.is_empty() => format!("{version} ({hash})"),
    _ => version.to_string(),
  }
});

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "burocrata",
  author,
  version,
  long_version = LONG_VERSION.as_str(),
  about = "Check for and insert a license notice into source files.",
  long_about = "Check for and insert a license notice into source files.

The notice is read from the `notice` key of the [tool.burocrata] table in the
pyproject.toml of the current directory. Files matching the .gitignore of the
current directory are skipped.",
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Report files under src/ that lack the notice
  burocrata --check src

  # Insert the notice into Python and shell files that lack it
  burocrata --extension py,sh .

  # Preview the insertions without touching any file
  burocrata --check --show-diff .

  # Skip generated code and write a JSON report
  burocrata --ignore \"*_pb2.py\" --report-json report.json src
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub check_args: CheckArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Outcome of a run, as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
  /// Every candidate file carries the notice
  Success,
  /// Files are missing the notice, or the run failed
  Failure,
}

impl From<ExitStatus> for ExitCode {
  fn from(status: ExitStatus) -> Self {
    match status {
      ExitStatus::Success => ExitCode::SUCCESS,
      ExitStatus::Failure => ExitCode::FAILURE,
    }
  }
}

/// Parse the command line and run burocrata.
pub fn run() -> ExitCode {
  let cli = Cli::parse_args();
  run_check(cli.check_args).into()
}
