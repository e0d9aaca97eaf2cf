//! # burocrata
//!
//! A tool that checks that source files start with a license/copyright notice
//! and inserts the notice into the files that lack it.
//!
//! The notice is configured in the `[tool.burocrata]` table of the
//! `pyproject.toml` in the current directory. Files are selected by extension
//! under a target directory, skipping anything matched by the `.gitignore` of
//! the current directory.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use burocrata::config::load_notice;
//! use burocrata::file_filter::ExtensionFilter;
//! use burocrata::ignore::IgnoreMatcher;
//! use burocrata::processor::{Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let root = std::env::current_dir()?;
//!     let notice = load_notice(&root)?;
//!
//!     let processor = Processor::new(ProcessorConfig {
//!         check_only: true,
//!         ..ProcessorConfig::new(
//!             notice,
//!             ExtensionFilter::from_list("py,sh")?,
//!             IgnoreMatcher::new(&root, &[])?,
//!         )
//!     });
//!
//!     let result = processor.process(Path::new("src"))?;
//!     for file in result.missing() {
//!         println!("Missing notice: {}", file.path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Discovery, checking and insertion
//! * [`config`] - Loading the notice from `pyproject.toml`
//! * [`ignore`] - Gitignore-style exclusion rules
//! * [`output`] - User-facing messages
//!
//! [`processor`]: crate::processor
//! [`config`]: crate::config
//! [`ignore`]: crate::ignore
//! [`output`]: crate::output

pub mod cli;
pub mod config;
pub mod detection;
pub mod diff;
pub mod file_filter;
pub mod ignore;
pub mod logging;
pub mod notice;
pub mod output;
pub mod processor;
pub mod report;
