//! # burocrata
//!
//! Check for and insert a license notice into source files.

use std::process::ExitCode;

fn main() -> ExitCode {
  burocrata::cli::run()
}
