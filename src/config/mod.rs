//! Configuration parsing, persistence, and key access.
//!
//! Configuration lives in a TOML file (default `~/.config/buildfix/config.toml`,
//! overridable via `BUILDFIX_CONFIG_PATH`). CLI arguments override configured
//! values, which in turn override built-in defaults; the historical hard-coded
//! scan root survives only as the configurable `core.root_path` default.

use crate::{listing, replacer};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level configuration for buildfix.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Core settings shared by all commands.
    #[serde(default)]
    pub core: CoreConfig,

    /// Token replacement settings.
    #[serde(default)]
    pub replace: ReplaceConfig,

    /// Project-file listing settings.
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Core settings shared by all commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Default root directory to scan when none is given on the command line.
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,
}

/// Token replacement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceConfig {
    /// Default token to search for.
    #[serde(default = "default_target")]
    pub target: String,

    /// Default token to substitute.
    #[serde(default = "default_replacement")]
    pub replacement: String,

    /// Extensions treated as binary and never opened (case-insensitive).
    #[serde(default = "default_excluded_extensions")]
    pub excluded_extensions: Vec<String>,
}

/// Project-file listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Filename suffixes recognized as project or solution files.
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
        }
    }
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            replacement: default_replacement(),
            excluded_extensions: default_excluded_extensions(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            suffixes: default_suffixes(),
        }
    }
}

impl Config {
    /// Load configuration from a file, creating a default one if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot read the configuration file
    /// - Configuration file contains invalid UTF-8 or invalid TOML
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let content = simdutf8::basic::from_utf8(&bytes)
            .with_context(|| format!("Config file is not valid UTF-8: {}", path.display()))?;

        toml::from_str(content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return None;
        }

        match (parts[0], parts[1]) {
            ("core", "root_path") => Some(self.core.root_path.display().to_string()),
            ("replace", "target") => Some(self.replace.target.clone()),
            ("replace", "replacement") => Some(self.replace.replacement.clone()),
            ("replace", "excluded_extensions") => {
                Some(self.replace.excluded_extensions.join(","))
            }
            ("listing", "suffixes") => Some(self.listing.suffixes.join(",")),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key format is invalid (must be section.key)
    /// - The key is unknown
    /// - The value is invalid for the key (e.g., empty replacement target)
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return Err(anyhow::anyhow!("Invalid configuration key: {key}"));
        }

        match (parts[0], parts[1]) {
            ("core", "root_path") => self.core.root_path = PathBuf::from(value),
            ("replace", "target") => {
                if value.is_empty() {
                    return Err(anyhow::anyhow!("Replacement target must not be empty"));
                }
                self.replace.target = value;
            }
            ("replace", "replacement") => self.replace.replacement = value,
            ("replace", "excluded_extensions") => {
                self.replace.excluded_extensions =
                    value.split(',').map(str::to_string).collect();
            }
            ("listing", "suffixes") => {
                self.listing.suffixes = value.split(',').map(str::to_string).collect();
            }
            _ => return Err(anyhow::anyhow!("Unknown configuration key: {key}")),
        }
        Ok(())
    }

    /// Reset a configuration value to its built-in default
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key format is invalid (must be section.key)
    /// - The key is unknown
    pub fn unset(&mut self, key: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return Err(anyhow::anyhow!("Invalid configuration key: {key}"));
        }

        match (parts[0], parts[1]) {
            ("core", "root_path") => self.core.root_path = default_root_path(),
            ("replace", "target") => self.replace.target = default_target(),
            ("replace", "replacement") => self.replace.replacement = default_replacement(),
            ("replace", "excluded_extensions") => {
                self.replace.excluded_extensions = default_excluded_extensions();
            }
            ("listing", "suffixes") => self.listing.suffixes = default_suffixes(),
            _ => return Err(anyhow::anyhow!("Unknown configuration key: {key}")),
        }
        Ok(())
    }
}

// Default functions for serde

/// Default scan root: the current working directory.
fn default_root_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Default search token.
fn default_target() -> String {
    "QtPie".to_string()
}

/// Default replacement token.
fn default_replacement() -> String {
    "FURRY".to_string()
}

/// Default binary-extension blocklist.
fn default_excluded_extensions() -> Vec<String> {
    replacer::DEFAULT_EXCLUDED_EXTENSIONS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Default project-file suffixes.
fn default_suffixes() -> Vec<String> {
    listing::DEFAULT_SUFFIXES
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}
