//! Filesystem scanning and directory traversal utilities.
//!
//! Traversal is single-threaded and synchronous. Every regular file in the
//! subtree is visited exactly once; unreadable entries are skipped rather
//! than aborting the walk. Symlinks are not followed.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Validates that `root` exists and is a directory.
///
/// A missing or non-directory root is the one failure with nothing meaningful
/// to iterate over, so it propagates instead of being skipped.
///
/// # Errors
/// Returns an error if the path does not exist or is not a directory.
pub fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        bail!("Root path does not exist: {}", root.display());
    }
    if !root.is_dir() {
        bail!("Root path is not a directory: {}", root.display());
    }
    Ok(())
}

/// Walks the subtree rooted at `root` and returns every regular file in it.
///
/// Entries that cannot be read (permission errors, files vanishing mid-walk)
/// are logged at debug level and skipped.
///
/// # Errors
/// Returns an error if `root` is missing or not a directory.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    check_root(root)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        match entry {
            Ok(e) if e.file_type().is_file() => files.push(e.into_path()),
            Ok(_) => {}
            Err(e) => debug!("Skipping unreadable entry: {e}"),
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_files_visits_nested_files() -> Result<()> {
        let temp = TempDir::new()?;
        let sub = temp.path().join("sub").join("deeper");
        fs::create_dir_all(&sub)?;

        fs::write(temp.path().join("a.txt"), "a")?;
        fs::write(sub.join("b.txt"), "b")?;

        let files = walk_files(temp.path())?;
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("a.txt")));
        assert!(files.iter().any(|p| p.ends_with("b.txt")));
        Ok(())
    }

    #[test]
    fn test_walk_files_skips_directories() -> Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir(temp.path().join("empty"))?;

        let files = walk_files(temp.path())?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn test_check_root_rejects_missing_path() {
        let result = check_root(Path::new("/nonexistent/buildfix/root"));
        assert!(result.is_err());
    }

    #[test]
    fn test_check_root_rejects_file() -> Result<()> {
        let temp = TempDir::new()?;
        let file = temp.path().join("file.txt");
        fs::write(&file, "not a directory")?;

        assert!(check_root(&file).is_err());
        Ok(())
    }
}
