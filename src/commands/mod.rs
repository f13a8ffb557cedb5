//! Command implementations for the buildfix CLI.

/// Get and set configuration options.
pub mod config;
/// Recursive token replacement across a build tree.
pub mod fix;
/// Project-file listing sorted by modification time.
pub mod list;

use colored::Colorize;

/// Prints a success message with a green check mark.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message with a red cross to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints an informational message with a blue marker.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Prints a warning message with a yellow marker.
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
