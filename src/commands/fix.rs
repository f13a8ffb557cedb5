use crate::BuildfixContext;
use crate::replacer::{ExclusionSet, FileOutcome, FixSummary, process_file};
use crate::scanner;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Execute the fix command: walk the tree and replace the target token in
/// every non-excluded text file.
///
/// Per-file failures are reported and counted but never abort the run; only a
/// root that cannot be traversed at all is an error.
///
/// # Errors
///
/// Returns an error if the root path is missing or not a directory.
pub fn execute(
    ctx: &BuildfixContext,
    root: Option<&Path>,
    from: Option<&str>,
    to: Option<&str>,
    exclude: &[String],
) -> Result<()> {
    let root = ctx.resolve_root(root);
    let target = from.unwrap_or(&ctx.config.replace.target);
    let replacement = to.unwrap_or(&ctx.config.replace.replacement);

    if target.is_empty() {
        return Err(anyhow::anyhow!("Target token must not be empty"));
    }

    let exclusions = if exclude.is_empty() {
        ExclusionSet::new(&ctx.config.replace.excluded_extensions)
    } else {
        ExclusionSet::new(exclude)
    };

    debug!(
        "Replacing '{target}' with '{replacement}' under {}",
        root.display()
    );

    let files = scanner::walk_files(&root)?;

    let mut summary = FixSummary::default();
    for path in &files {
        let outcome = process_file(path, target, replacement, &exclusions);
        match &outcome {
            FileOutcome::Updated => println!("Updated: {}", path.display()),
            FileOutcome::Failed(reason) => {
                println!("Error processing {}: {reason}", path.display());
            }
            FileOutcome::Unchanged | FileOutcome::Excluded => {}
        }
        summary.record(&outcome);
    }

    super::print_info(&format!(
        "{} updated, {} unchanged, {} excluded, {} failed",
        summary.updated, summary.unchanged, summary.excluded, summary.failed
    ));
    if summary.failed > 0 {
        super::print_warning(&format!("{} file(s) could not be processed", summary.failed));
    }

    Ok(())
}
