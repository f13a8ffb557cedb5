//! Token replacement engine for text-based build artifacts.
//!
//! Files are matched against a case-insensitive extension blocklist before
//! being opened; everything else is decoded permissively (malformed byte
//! sequences are dropped, not fatal), scanned for a literal target token, and
//! rewritten in full only when the token occurs. Replacement is a single pass
//! over the whole content, so a replacement that reintroduces the target is
//! never re-scanned and idempotence holds whenever the replacement does not
//! contain the target.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extensions presumed binary and never opened for content inspection:
/// object files, incremental-build state, debug symbols, static libraries,
/// executables, generic binaries, build recipes, and build stamps.
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[
    "obj",
    "tlog",
    "pdb",
    "lib",
    "exe",
    "bin",
    "recipe",
    "stamp",
    "lastbuildstate",
];

/// Case-insensitive set of file extensions to skip without reading.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    /// Lower-cased extensions without a leading dot.
    extensions: HashSet<String>,
}

impl ExclusionSet {
    /// Builds an exclusion set from extension strings. A leading dot is
    /// accepted and stripped, and comparison is case-insensitive.
    #[must_use]
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Returns true if the file at `path` has an excluded extension.
    /// Files without an extension are never excluded.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(&e.to_lowercase()))
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_EXTENSIONS)
    }
}

/// Outcome of processing a single file during a fix run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The target token occurred and the file was rewritten.
    Updated,
    /// The file was read but the token did not occur; nothing was written.
    Unchanged,
    /// The file's extension is in the exclusion set; it was never opened.
    Excluded,
    /// Reading or writing the file failed; the run continues.
    Failed(String),
}

/// Aggregate counts for a whole fix run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixSummary {
    /// Files rewritten with the replacement token.
    pub updated: usize,
    /// Files read and left untouched.
    pub unchanged: usize,
    /// Files skipped by the exclusion set.
    pub excluded: usize,
    /// Files that failed to read or write.
    pub failed: usize,
}

impl FixSummary {
    /// Records one file outcome into the summary.
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Updated => self.updated += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Excluded => self.excluded += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Decodes bytes as text, dropping malformed sequences.
///
/// Valid UTF-8 passes through byte-identically (validated with the SIMD fast
/// path). Invalid input goes through a lossy decode and the substitution
/// characters produced for malformed sequences are removed, matching a
/// decode-with-ignore policy.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> String {
    match simdutf8::basic::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(bytes)
            .chars()
            .filter(|c| *c != '\u{FFFD}')
            .collect(),
    }
}

/// Replaces every occurrence of `target` with `replacement` in the file at
/// `path`, rewriting the file in full only when the token occurs.
///
/// Zero-byte files and files without the token are left untouched, so their
/// modification timestamps do not churn.
///
/// # Errors
/// Returns an error if the file cannot be read or written.
pub fn replace_in_file(path: &Path, target: &str, replacement: &str) -> Result<FileOutcome> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    if bytes.is_empty() {
        return Ok(FileOutcome::Unchanged);
    }

    let content = decode_lossy(&bytes);
    if !content.contains(target) {
        return Ok(FileOutcome::Unchanged);
    }

    let updated = content.replace(target, replacement);
    fs::write(path, updated)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(FileOutcome::Updated)
}

/// Processes one file: exclusion check, then replacement with the per-file
/// failure isolated into the outcome so the caller can keep traversing.
#[must_use]
pub fn process_file(
    path: &Path,
    target: &str,
    replacement: &str,
    exclusions: &ExclusionSet,
) -> FileOutcome {
    if exclusions.contains(path) {
        debug!("Excluded by extension: {}", path.display());
        return FileOutcome::Excluded;
    }

    match replace_in_file(path, target, replacement) {
        Ok(outcome) => outcome,
        Err(e) => FileOutcome::Failed(format!("{e:#}")),
    }
}
