use crate::core::{
    colors::entry_indicators,
    command_init::CommandContext,
    entry::FileSystemEntry,
    error::Result,
    explorer::DirectoryExplorer,
    paths::normalize_path,
    print_info, print_section_header,
};
use colored::*;
use std::env;
use std::path::{Path, PathBuf};

/// Lists `path` (default: the current directory) with repository status.
pub fn execute_explore(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => env::current_dir()?,
    };
    let path = normalize_path(&path);

    let context = CommandContext::initialize()?;
    let entries = explore_with_context(&context, &path)?;

    print_section_header(&path.display().to_string());
    if entries.iter().all(FileSystemEntry::is_parent_link) {
        print_info("Empty directory");
        return Ok(());
    }
    for (index, entry) in entries.iter().enumerate() {
        println!("{}", format_entry(index + 1, entry));
    }
    println!();
    Ok(())
}

fn explore_with_context(context: &CommandContext, path: &Path) -> Result<Vec<FileSystemEntry>> {
    let managed = context.registry.paths();
    DirectoryExplorer::new(&context.oracle).explore(path, &managed)
}

fn format_entry(index: usize, entry: &FileSystemEntry) -> String {
    let repository = entry.repository();
    let name = if repository.is_worktree() {
        entry.name().cyan()
    } else if repository.is_git_repository() {
        entry.name().blue().bold()
    } else if entry.is_directory() {
        entry.name().white()
    } else {
        entry.name().bright_black()
    };

    let mut line = format!(
        "{}{}{} {}",
        "[".bright_black(),
        index.to_string().white(),
        "]".bright_black(),
        name
    );
    let indicators = entry_indicators(repository);
    if !indicators.is_empty() {
        line.push(' ');
        line.push_str(&indicators);
    }
    if repository.is_already_managed() {
        line.push_str(&format!(" {}", "(managed)".bright_black()));
    }
    line
}
