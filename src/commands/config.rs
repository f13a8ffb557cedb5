use crate::BuildfixContext;
use anyhow::Result;
use colored::Colorize;

/// Execute config command to get/set configuration values
///
/// # Errors
///
/// Returns an error if:
/// - Failed to set or unset configuration value
/// - Failed to save configuration
pub fn execute(
    ctx: &mut BuildfixContext,
    key: Option<&str>,
    value: Option<String>,
    unset: bool,
    list: bool,
) -> Result<()> {
    // If --list flag is set or no key is provided, show all configuration
    if list || key.is_none() {
        show_all_config(ctx);
        return Ok(());
    }

    let key =
        key.ok_or_else(|| anyhow::anyhow!("Key must be provided when not using --list flag"))?;

    if unset {
        ctx.config.unset(key)?;
        ctx.config.save(&ctx.config_path)?;
        super::print_success(&format!("Reset {key} to default"));
    } else if let Some(val) = value {
        ctx.config.set(key, val.clone())?;
        ctx.config.save(&ctx.config_path)?;
        super::print_success(&format!("Set {key} = {val}"));
    } else if let Some(val) = ctx.config.get(key) {
        println!("{val}");
    } else {
        super::print_warning(&format!("Configuration key '{key}' is not set"));
    }

    Ok(())
}

/// Show all configuration values
fn show_all_config(ctx: &BuildfixContext) {
    println!("{}", "[core]".bold());
    println!("  root_path = {}", ctx.config.core.root_path.display());

    println!("\n{}", "[replace]".bold());
    println!("  target = {}", ctx.config.replace.target);
    println!("  replacement = {}", ctx.config.replace.replacement);
    println!(
        "  excluded_extensions = {}",
        ctx.config.replace.excluded_extensions.join(",")
    );

    println!("\n{}", "[listing]".bold());
    println!("  suffixes = {}", ctx.config.listing.suffixes.join(","));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists_to_disk() -> Result<()> {
        let dir = TempDir::new()?;
        let config_path = dir.path().join("config.toml");
        let mut ctx = BuildfixContext::new_explicit(config_path.clone())?;

        execute(
            &mut ctx,
            Some("replace.target"),
            Some("OldName".to_string()),
            false,
            false,
        )?;

        let reloaded = BuildfixContext::new_explicit(config_path)?;
        assert_eq!(reloaded.config.replace.target, "OldName");
        Ok(())
    }

    #[test]
    fn test_unset_restores_default() -> Result<()> {
        let dir = TempDir::new()?;
        let config_path = dir.path().join("config.toml");
        let mut ctx = BuildfixContext::new_explicit(config_path.clone())?;

        ctx.config.set("replace.target", "Other".to_string())?;
        ctx.config.save(&config_path)?;

        execute(&mut ctx, Some("replace.target"), None, true, false)?;

        let reloaded = BuildfixContext::new_explicit(config_path)?;
        assert_eq!(reloaded.config.replace.target, "QtPie");
        Ok(())
    }

    #[test]
    fn test_unknown_key_errors() -> Result<()> {
        let dir = TempDir::new()?;
        let mut ctx = BuildfixContext::new_explicit(dir.path().join("config.toml"))?;

        let result = execute(
            &mut ctx,
            Some("bogus.key"),
            Some("x".to_string()),
            false,
            false,
        );
        assert!(result.is_err());
        Ok(())
    }
}
