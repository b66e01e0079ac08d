use crate::core::{
    colors::{record_indicators, summary_line},
    command_init::CommandContext,
    error::{NavigatorError, Result},
    paths::base_name,
    print_indexed_row, print_section_header, print_worktree_row,
    refresher::StatusRefresher,
    registry::{NavigableItem, RepositoryRecord},
};
use std::path::Path;

/// Refreshes every registered repository and prints the results.
pub fn execute_status() -> Result<()> {
    let mut context = CommandContext::initialize()?;
    if context.registry.is_empty() {
        return Err(NavigatorError::NoRepositories);
    }

    let refresher = StatusRefresher::new(&context.oracle);
    refresher.refresh_all(context.registry.records_mut());
    let items = context
        .registry
        .refresh_navigable_items(&context.oracle)
        .to_vec();

    print_section_header("Repositories");
    for item in &items {
        match item {
            NavigableItem::Repository { index } => {
                let Some(record) = context.registry.get(*index) else {
                    continue;
                };
                print_indexed_row(
                    index + 1,
                    &record.name,
                    &record_indicators(record),
                    &record.path,
                );
            }
            NavigableItem::Worktree {
                parent_path,
                worktree,
                ..
            } => {
                let mut record = RepositoryRecord::new(&worktree.path, false);
                refresher.refresh_one(&mut record);
                let label = worktree_label(parent_path, &worktree.branch);
                print_worktree_row(&label, &record_indicators(&record), &worktree.path);
            }
        }
    }

    let summary = context.registry.navigable_summary(&context.oracle);
    println!("\n{}\n", summary_line(&summary));
    Ok(())
}

fn worktree_label(parent_path: &Path, branch: &str) -> String {
    let parent = base_name(parent_path);
    if branch.is_empty() {
        format!("{parent}-detached")
    } else {
        format!("{parent}-{branch}")
    }
}
