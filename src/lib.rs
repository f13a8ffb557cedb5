#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Buildfix - Build-Tree Maintenance Utilities
//!
//! Buildfix bundles two small filesystem utilities used while maintaining
//! build-output trees:
//!
//! - **fix**: recursively replaces a literal token inside text-based build
//!   artifacts, skipping known-binary extensions, with per-file error
//!   isolation (a failing file never aborts the run).
//! - **list**: recursively lists project and solution files sorted by
//!   modification time, newest first.
//!
//! ## Architecture
//!
//! - [`commands`]: Command implementations (fix, list, config)
//! - [`replacer`]: Token replacement engine with lossy text decoding
//! - [`listing`]: Project-file collection and timestamp ordering
//! - [`scanner`]: Filesystem traversal utilities
//! - [`config`]: Configuration parsing and persistence
//!
//! ## Example Usage
//!
//! ```no_run
//! use buildfix::BuildfixContext;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = BuildfixContext::new()?;
//!
//! // Replace the configured token under a build tree
//! buildfix::commands::fix::execute(&ctx, Some(Path::new("build")), None, None, &[])?;
//!
//! // List project files by modification time
//! buildfix::commands::list::execute(&ctx, Some(Path::new("build")), &[])?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Configuration parsing, persistence, and key access.
pub mod config;

/// Project-file collection and modification-time ordering.
pub mod listing;

/// Token replacement engine with binary-extension exclusion.
pub mod replacer;

/// Filesystem scanning and directory traversal utilities.
pub mod scanner;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Current version of the buildfix binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/buildfix/config.toml";

/// Central context for all buildfix operations.
///
/// Holds the configuration file path and the loaded configuration. Commands
/// resolve their effective settings by layering CLI arguments over this
/// configuration over built-in defaults.
#[derive(Debug, Clone)]
pub struct BuildfixContext {
    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl BuildfixContext {
    /// Creates a new `BuildfixContext` by loading the configuration from the
    /// default path, or from `BUILDFIX_CONFIG_PATH` when set.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined or if the
    /// configuration file cannot be read or created.
    pub fn new() -> Result<Self> {
        let config_path = if let Ok(path) = std::env::var("BUILDFIX_CONFIG_PATH") {
            PathBuf::from(path)
        } else {
            let home = dirs::home_dir().context("Could not find home directory")?;
            home.join(DEFAULT_CONFIG_PATH)
        };

        let config = config::Config::load(&config_path)?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Creates a new `BuildfixContext` with an explicit configuration path.
    /// This avoids environment variable manipulation in tests.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be loaded or created.
    pub fn new_explicit(config_path: PathBuf) -> Result<Self> {
        let config = config::Config::load(&config_path)?;
        Ok(Self {
            config_path,
            config,
        })
    }

    /// Resolves the effective scan root: an explicit CLI path wins, otherwise
    /// the configured default root is used.
    #[must_use]
    pub fn resolve_root(&self, cli_root: Option<&Path>) -> PathBuf {
        cli_root.map_or_else(|| self.config.core.root_path.clone(), Path::to_path_buf)
    }
}
