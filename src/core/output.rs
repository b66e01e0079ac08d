//! Unified output formatting for repo-navigator commands.
//!
//! Errors are red, headers and info messages white, secondary detail
//! (paths, hints) bright black. Every block is padded with blank lines so
//! consecutive command outputs stay visually separated.

use colored::*;
use std::path::Path;

/// Prints `✕ Error: <message>` surrounded by blank lines.
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints `✓ <message>`.
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Prints `<header>:` followed by a blank line.
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints a numbered row: `[index] name  indicators  path`.
pub fn print_indexed_row(index: usize, name: &str, indicators: &str, path: &Path) {
    println!(
        "{}{}{} {} {} {}",
        "[".bright_black(),
        index.to_string().white(),
        "]".bright_black(),
        name.blue(),
        indicators,
        path.display().to_string().bright_black()
    );
}

/// Prints an indented worktree row under its bare repository.
pub fn print_worktree_row(label: &str, indicators: &str, path: &Path) {
    println!(
        "    {} {} {} {}",
        "├─".bright_black(),
        label.cyan(),
        indicators,
        path.display().to_string().bright_black()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_functions_do_not_panic() {
        print_error("Test error message");
        print_success("Operation completed");
        print_info("Information message");
        print_section_header("Repositories");
        print_indexed_row(1, "app", "✓", Path::new("/repos/app"));
        print_worktree_row("app.git-main", "●2", Path::new("/repos/app-main"));
    }
}
