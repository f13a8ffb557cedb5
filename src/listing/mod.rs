//! Project-file collection and modification-time ordering.
//!
//! Files are identified solely by filename suffix, not by content inspection.
//! Collection is read-only; a file vanishing between the directory walk and
//! the timestamp read is skipped like any other per-file failure.

use crate::scanner;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filename suffixes recognized as project and solution files.
pub const DEFAULT_SUFFIXES: &[&str] = &[".vcxproj", ".slnx"];

/// A project file with its last-modification time on the local clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    /// Last modification time.
    pub modified: DateTime<Local>,
    /// Full path to the file.
    pub path: PathBuf,
}

impl fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}",
            self.modified.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.path.display()
        )
    }
}

/// Returns true if `name` ends with one of the recognized suffixes.
#[must_use]
pub fn matches_suffix<S: AsRef<str>>(name: &str, suffixes: &[S]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s.as_ref()))
}

/// Collects every file under `root` whose name ends with a recognized suffix,
/// sorted by modification time descending (newest first). The sort is stable,
/// so timestamp ties keep collection order.
///
/// # Errors
/// Returns an error if `root` is missing or not a directory.
pub fn collect_project_files<S: AsRef<str>>(
    root: &Path,
    suffixes: &[S],
) -> Result<Vec<ProjectFile>> {
    let mut entries = Vec::new();

    for path in scanner::walk_files(root)? {
        let matched = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| matches_suffix(n, suffixes));
        if !matched {
            continue;
        }

        // The file may vanish between the walk and the stat
        match fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(mtime) => entries.push(ProjectFile {
                modified: DateTime::<Local>::from(mtime),
                path,
            }),
            Err(e) => debug!("Skipping {}: {e}", path.display()),
        }
    }

    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(entries)
}
