//! # Check Command
//!
//! This module implements the check/insert run over a directory. It is the
//! only command burocrata has.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use super::ExitStatus;
use crate::config::{ConfigError, load_notice};
use crate::diff::DiffManager;
use crate::file_filter::ExtensionFilter;
use crate::ignore::IgnoreMatcher;
use crate::logging::{ColorMode, init_tracing};
use crate::output::Reporter;
use crate::processor::{Processor, ProcessorConfig};
use crate::report::write_json_report;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Directory to scan recursively for source files
  #[arg(value_name = "DIRECTORY", value_parser = parse_directory)]
  pub directory: PathBuf,

  /// Comma-separated file extensions to check, without the leading dot
  #[arg(
    long,
    short = 'e',
    value_name = "LIST",
    default_value = "py,c,h,sh",
    value_parser = ExtensionFilter::from_list
  )]
  pub extension: ExtensionFilter,

  /// Only check for the notice and exit with an error if any file lacks it,
  /// without modifying files
  #[arg(long, short = 'c')]
  pub check: bool,

  /// Print information about the files being processed (default)
  #[arg(long, short = 'v', overrides_with = "quiet")]
  pub verbose: bool,

  /// Only print errors and the final result
  #[arg(long, short = 'q', overrides_with = "verbose")]
  pub quiet: bool,

  /// Additional gitignore-style patterns to skip (repeatable)
  #[arg(long, short = 'i', value_name = "PATTERN")]
  pub ignore: Vec<String>,

  /// Show the diff of the insertions in check mode
  #[arg(long, requires = "check")]
  pub show_diff: bool,

  /// Save the diff of the insertions to a file in check mode
  #[arg(long, value_name = "FILE", requires = "check")]
  pub save_diff: Option<PathBuf>,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Accept only paths that exist and are directories.
fn parse_directory(value: &str) -> Result<PathBuf, String> {
  let path = PathBuf::from(value);
  if !path.exists() {
    return Err(format!("Directory '{value}' does not exist."));
  }
  if !path.is_dir() {
    return Err(format!("'{value}' is not a directory."));
  }
  Ok(path)
}

/// Run the check command with the given arguments.
///
/// Every error is reported to stderr here; the returned status is all that
/// reaches the shell.
pub fn run_check(args: CheckArgs) -> ExitStatus {
  init_tracing(args.quiet);
  args.colors.apply();

  let reporter = Reporter::new(!args.quiet);

  match execute(args, reporter) {
    Ok(status) => status,
    Err(err) => {
      report_failure(&err, reporter);
      ExitStatus::Failure
    }
  }
}

fn execute(args: CheckArgs, reporter: Reporter) -> Result<ExitStatus> {
  let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
  debug!("Running in {}", current_dir.display());

  let notice = load_notice(&current_dir)?;
  reporter.echo(format!("License/copyright notice:\n{notice}\n"));

  let ignore_matcher = IgnoreMatcher::new(&current_dir, &args.ignore)?;

  let extensions: Vec<&str> = args.extension.extensions().collect();
  debug!("Selected extensions: {}", extensions.join(", "));

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let processor = Processor::new(ProcessorConfig {
    check_only: args.check,
    reporter,
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(notice, args.extension, ignore_matcher)
  });

  let files = processor.collect_files(&args.directory)?;
  reporter.start_message(files.len(), &args.directory, args.check);

  let result = processor.process_collected(files)?;

  reporter.echo("");
  reporter.print_result(&result);

  if let Some(ref output_path) = args.report_json {
    match write_json_report(&result, output_path) {
      Ok(()) => reporter.echo(format!("Generated JSON report at {}", output_path.display())),
      Err(e) => reporter.error(format!("Error generating JSON report: {e:#}")),
    }
  }

  if result.is_clean() {
    Ok(ExitStatus::Success)
  } else {
    Ok(ExitStatus::Failure)
  }
}

/// Print an error that stopped the run.
///
/// Configuration problems get their own message; anything else is shown with
/// its full context chain.
fn report_failure(err: &anyhow::Error, reporter: Reporter) {
  if let Some(config_err) = err.downcast_ref::<ConfigError>() {
    reporter.error(config_err);
    if let ConfigError::MissingNotice { content, .. } = config_err {
      eprintln!("\n{content}");
    }
    return;
  }

  eprintln!("\nError encountered while processing:\n");
  eprintln!("{err:?}");
  reporter.error("\nOh no! Something went wrong. See the messages above.");
}

#[cfg(test)]
mod tests {
  use clap::Parser;
  use tempfile::TempDir;

  use super::*;

  #[derive(Parser, Debug)]
  struct TestCli {
    #[command(flatten)]
    args: CheckArgs,
  }

  fn parse(extra: &[&str]) -> Result<CheckArgs, clap::Error> {
    let dir = TempDir::new().unwrap();
    let dir_arg = dir.path().to_string_lossy().into_owned();
    let mut argv = vec!["burocrata", dir_arg.as_str()];
    argv.extend_from_slice(extra);
    TestCli::try_parse_from(argv).map(|cli| cli.args)
  }

  #[test]
  fn test_defaults() {
    let args = parse(&[]).unwrap();

    let extensions: Vec<&str> = args.extension.extensions().collect();
    assert_eq!(extensions, ["py", "c", "h", "sh"]);
    assert!(!args.check);
    assert!(!args.quiet);
    assert_eq!(args.colors, ColorMode::Auto);
  }

  #[test]
  fn test_extension_list() {
    let args = parse(&["-e", "py,.pyx"]).unwrap();
    let extensions: Vec<&str> = args.extension.extensions().collect();
    assert_eq!(extensions, ["py", "pyx"]);

    assert!(parse(&["--extension", ","]).is_err());
  }

  #[test]
  fn test_last_verbosity_flag_wins() {
    assert!(parse(&["--verbose", "--quiet"]).unwrap().quiet);
    assert!(!parse(&["-q", "-v"]).unwrap().quiet);
  }

  #[test]
  fn test_diff_flags_require_check() {
    assert!(parse(&["--show-diff"]).is_err());
    assert!(parse(&["--save-diff", "out.diff"]).is_err());
    assert!(parse(&["--check", "--show-diff"]).unwrap().show_diff);
  }

  #[test]
  fn test_colors_without_value_means_always() {
    let args = parse(&["--check", "--colors"]).unwrap();
    assert_eq!(args.colors, ColorMode::Always);
  }

  #[test]
  fn test_parse_directory() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("file.py");
    std::fs::write(&file, "").unwrap();

    assert!(parse_directory(&dir.path().to_string_lossy()).is_ok());
    assert!(parse_directory(&file.to_string_lossy()).unwrap_err().contains("is not a directory"));
    assert!(
      parse_directory(&dir.path().join("nope").to_string_lossy())
        .unwrap_err()
        .contains("does not exist")
    );
  }
}
