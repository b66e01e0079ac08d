use crate::core::{
    command_init::CommandContext, discovery::discover_repositories, error::Result,
    paths::normalize_path, print_info, print_success,
};
use std::path::Path;

pub fn execute_scan(root: &Path, depth: Option<usize>) -> Result<()> {
    let mut context = CommandContext::initialize()?;
    let depth = depth.unwrap_or(context.config.scan_depth);
    let (found, added) = scan_into_registry(&mut context, root, depth)?;

    if added > 0 {
        context.save()?;
        print_success(&format!("Found {found} repositories, registered {added} new"));
    } else {
        print_info(&format!("Found {found} repositories, nothing new to register"));
    }
    Ok(())
}

/// Returns `(found, newly registered)`.
fn scan_into_registry(
    context: &mut CommandContext,
    root: &Path,
    depth: usize,
) -> Result<(usize, usize)> {
    let root = normalize_path(root);
    log::info!("Scanning '{}' (depth {depth})", root.display());
    let found = discover_repositories(&context.oracle, &root, depth)?;
    let added = found
        .iter()
        .filter(|path| context.registry.add_discovered(path))
        .count();
    Ok((found.len(), added))
}
