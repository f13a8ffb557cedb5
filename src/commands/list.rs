use crate::BuildfixContext;
use crate::listing::collect_project_files;
use anyhow::Result;
use std::path::Path;

/// Execute the list command: print project and solution files under the root,
/// one `<timestamp> | <path>` line each, newest first.
///
/// # Errors
///
/// Returns an error if the root path is missing or not a directory.
pub fn execute(ctx: &BuildfixContext, root: Option<&Path>, suffixes: &[String]) -> Result<()> {
    let root = ctx.resolve_root(root);
    let suffixes: &[String] = if suffixes.is_empty() {
        &ctx.config.listing.suffixes
    } else {
        suffixes
    };

    let entries = collect_project_files(&root, suffixes)?;

    if entries.is_empty() {
        super::print_info("No project files found");
        return Ok(());
    }

    for entry in &entries {
        println!("{entry}");
    }

    Ok(())
}
