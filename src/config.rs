//! # Configuration Module
//!
//! This module loads the notice to enforce from the project descriptor,
//! `pyproject.toml`, located in the directory burocrata is run from:
//!
//! ```toml
//! [tool.burocrata]
//! notice = '''
//! # Copyright (c) YYYY Name of Developer.
//! # Distributed under the terms of the BSD 3-Clause License.
//! # SPDX-License-Identifier: BSD-3-Clause
//! '''
//! ```
//!
//! Every other table and key in the descriptor is ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::notice::Notice;

/// The project descriptor file name.
pub const DEFAULT_CONFIG_FILENAME: &str = "pyproject.toml";

/// Top level of the project descriptor. Only `[tool]` is of interest.
#[derive(Debug, Default, Deserialize)]
struct Descriptor {
  #[serde(default)]
  tool: Option<ToolTable>,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
  #[serde(default)]
  burocrata: Option<BurocrataConfig>,
}

/// The `[tool.burocrata]` table.
#[derive(Debug, Default, Deserialize)]
pub struct BurocrataConfig {
  /// Exact notice text, including comment markers.
  #[serde(default)]
  pub notice: Option<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The descriptor does not exist.
  #[error("Missing {} configuration file in the current directory.", DEFAULT_CONFIG_FILENAME)]
  Missing { path: PathBuf },

  /// The descriptor could not be read.
  #[error("Failed to read config file '{}': {source}", .path.display())]
  Read { path: PathBuf, source: std::io::Error },

  /// The descriptor contains invalid TOML.
  #[error("Failed to parse config file '{}': {source}", .path.display())]
  Parse { path: PathBuf, source: toml::de::Error },

  /// `tool.burocrata.notice` is absent. Carries the descriptor content so it
  /// can be shown to the user.
  #[error("Missing license/copyright notice in {} configuration file:", DEFAULT_CONFIG_FILENAME)]
  MissingNotice { path: PathBuf, content: String },

  /// The notice is present but contains no lines.
  #[error("The license/copyright notice in '{}' is empty.", .path.display())]
  EmptyNotice { path: PathBuf },
}

impl ConfigError {
  /// Path of the descriptor the error refers to.
  pub fn path(&self) -> &Path {
    match self {
      Self::Missing { path }
      | Self::Read { path, .. }
      | Self::Parse { path, .. }
      | Self::MissingNotice { path, .. }
      | Self::EmptyNotice { path } => path,
    }
  }
}

/// Parse the `[tool.burocrata]` table out of descriptor content.
///
/// Returns `Ok(None)` when the table is absent.
pub fn parse_descriptor(content: &str) -> Result<Option<BurocrataConfig>, toml::de::Error> {
  let descriptor: Descriptor = toml::from_str(content)?;
  Ok(descriptor.tool.and_then(|tool| tool.burocrata))
}

/// Load the notice from the `pyproject.toml` in `dir`.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the descriptor is missing, unreadable, not
/// valid TOML, or does not define a non-empty `tool.burocrata.notice`.
pub fn load_notice(dir: &Path) -> Result<Notice, ConfigError> {
  let path = dir.join(DEFAULT_CONFIG_FILENAME);
  if !path.is_file() {
    return Err(ConfigError::Missing { path });
  }

  debug!("Loading config from: {}", path.display());

  let content = match std::fs::read_to_string(&path) {
    Ok(content) => content,
    Err(source) => return Err(ConfigError::Read { path, source }),
  };

  let config = match parse_descriptor(&content) {
    Ok(config) => config,
    Err(source) => return Err(ConfigError::Parse { path, source }),
  };

  let Some(text) = config.and_then(|c| c.notice) else {
    return Err(ConfigError::MissingNotice { path, content });
  };

  let notice = Notice::from_text(&text);
  if notice.is_empty() {
    return Err(ConfigError::EmptyNotice { path });
  }

  debug!("Loaded notice with {} lines", notice.line_count());

  Ok(notice)
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_load_multiline_notice() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
      dir.path().join(DEFAULT_CONFIG_FILENAME),
      concat!(
        "[project]\n",
        "name = \"demo\"\n",
        "\n",
        "[tool.burocrata]\n",
        "notice = '''\n",
        "# Copyright (c) 2024 Demo.\n",
        "# SPDX-License-Identifier: MIT\n",
        "'''\n",
      ),
    )
    .unwrap();

    let notice = load_notice(dir.path()).unwrap();
    assert_eq!(
      notice.lines(),
      ["# Copyright (c) 2024 Demo.", "# SPDX-License-Identifier: MIT"]
    );
  }

  #[test]
  fn test_missing_descriptor() {
    let dir = TempDir::new().unwrap();

    let err = load_notice(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { .. }));
    assert_eq!(err.path(), dir.path().join(DEFAULT_CONFIG_FILENAME));
  }

  #[test]
  fn test_missing_notice_keeps_content() {
    let dir = TempDir::new().unwrap();
    let content = "[tool.black]\nline-length = 88\n";
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILENAME), content).unwrap();

    match load_notice(dir.path()).unwrap_err() {
      ConfigError::MissingNotice { content: reported, .. } => assert_eq!(reported, content),
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn test_burocrata_table_without_notice() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILENAME), "[tool.burocrata]\n").unwrap();

    let err = load_notice(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingNotice { .. }));
  }

  #[test]
  fn test_empty_notice() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
      dir.path().join(DEFAULT_CONFIG_FILENAME),
      "[tool.burocrata]\nnotice = \"\"\n",
    )
    .unwrap();

    let err = load_notice(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyNotice { .. }));
  }

  #[test]
  fn test_invalid_toml() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILENAME), "[tool.burocrata\nnotice = 1").unwrap();

    let err = load_notice(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
  }

  #[test]
  fn test_parse_descriptor_ignores_other_tables() {
    let config = parse_descriptor("[tool.other]\nnotice = \"x\"\n").unwrap();
    assert!(config.is_none());

    let config = parse_descriptor("[tool.burocrata]\nnotice = \"# hi\"\nextra = 1\n").unwrap();
    assert_eq!(config.and_then(|c| c.notice).as_deref(), Some("# hi"));
  }
}
