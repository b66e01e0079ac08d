use crate::core::{
    command_init::CommandContext,
    error::{NavigatorError, Result},
    paths::normalize_path,
    print_success,
    registry::RepositoryRecord,
};
use std::path::Path;

/// Removes a registered repository by 1-based index or by path.
pub fn execute_remove(target: &str) -> Result<()> {
    let mut context = CommandContext::initialize()?;
    let removed = remove_target(&mut context, target)?;
    context.save()?;
    print_success(&format!(
        "Removed {} ({})",
        removed.name,
        removed.path.display()
    ));
    Ok(())
}

fn remove_target(context: &mut CommandContext, target: &str) -> Result<RepositoryRecord> {
    match target.parse::<usize>() {
        Ok(0) => Err(NavigatorError::index_out_of_range(0, context.registry.len())),
        Ok(index) => context.registry.remove_repository(index - 1),
        Err(_) => context
            .registry
            .remove_repository_by_path(&normalize_path(Path::new(target))),
    }
}
