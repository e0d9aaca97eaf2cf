//! # Logging Module
//!
//! Internal diagnostics for burocrata go through [`tracing`]. They are off by
//! default apart from warnings and can be raised with the `BUROCRATA_LOG`
//! environment variable, which takes an [`EnvFilter`] directive:
//!
//! ```text
//! BUROCRATA_LOG=debug burocrata --check src
//! ```
//!
//! User-facing output (progress, results, errors) is written by
//! [`crate::output::Reporter`] and does not depend on this module, except for
//! the color choice made by [`ColorMode::apply`].

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "BUROCRATA_LOG";

/// Enum representing the color mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Make this the process-wide color choice for `owo-colors` output.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }
}

/// The filter used when `BUROCRATA_LOG` is unset or invalid.
const fn default_directive(quiet: bool) -> &'static str {
  if quiet { "error" } else { "warn" }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(quiet: bool) {
  let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_directive() {
    assert_eq!(default_directive(true), "error");
    assert_eq!(default_directive(false), "warn");
  }

  #[test]
  fn test_color_mode_values() {
    assert_eq!(ColorMode::from_str("never", true), Ok(ColorMode::Never));
    assert_eq!(ColorMode::from_str("ALWAYS", true), Ok(ColorMode::Always));
    assert!(ColorMode::from_str("sometimes", true).is_err());
    assert_eq!(ColorMode::default(), ColorMode::Auto);
  }

  #[test]
  fn test_init_tracing_twice() {
    init_tracing(false);
    init_tracing(true);
  }
}
