//! Command-line interface definitions for buildfix.
//!
//! This module contains all CLI argument parsing structures using clap's derive macros.
//! The CLI definitions are shared between the main binary and build tools (like xtask)
//! for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes, so we allow
//! missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for buildfix.
#[derive(Parser)]
#[command(
    name = "bfix",
    version = crate::VERSION,
    about = "Build-tree maintenance utilities",
    long_about = "Recursive token replacement and project-file listing for build-output trees"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Replace a token in every text file under a directory tree
    Fix {
        /// Root directory to scan (defaults to the configured root)
        root: Option<PathBuf>,

        /// Token to search for
        #[arg(long)]
        from: Option<String>,

        /// Token to substitute
        #[arg(long)]
        to: Option<String>,

        /// File extensions to skip, case-insensitive (overrides the configured set)
        #[arg(long = "exclude", value_name = "EXT")]
        exclude: Vec<String>,
    },

    /// List project and solution files sorted by modification time, newest first
    List {
        /// Root directory to scan (defaults to the configured root)
        root: Option<PathBuf>,

        /// Filename suffixes to match (overrides the configured set)
        #[arg(long = "suffix", value_name = "SUFFIX")]
        suffix: Vec<String>,
    },

    /// Get and set configuration options
    Config {
        /// Configuration key
        key: Option<String>,

        /// Configuration value to set
        value: Option<String>,

        /// Reset the configuration key to its built-in default
        #[arg(long)]
        unset: bool,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
