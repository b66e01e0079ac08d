use crate::core::{
    command_init::CommandContext,
    error::{NavigatorError, Result},
    oracle::StatusOracle,
    paths::{base_name, normalize_path},
    print_info, print_success,
};
use std::path::Path;

pub fn execute_add(path: &Path) -> Result<()> {
    let mut context = CommandContext::initialize()?;
    if add_repository(&mut context, path)? {
        context.save()?;
    }
    Ok(())
}

/// Register `path` if it is a repository. Returns whether the registry changed.
fn add_repository(context: &mut CommandContext, path: &Path) -> Result<bool> {
    let path = normalize_path(path);
    if !context.oracle.is_repository(&path) {
        return Err(NavigatorError::not_a_repository(path));
    }

    if context.registry.add_repository(&path) {
        print_success(&format!(
            "Added {} ({})",
            base_name(&path),
            path.display()
        ));
        Ok(true)
    } else {
        print_info(&format!("Already registered: {}", path.display()));
        Ok(false)
    }
}
