//! Repository discovery under a root directory.

use crate::core::error::{NavigatorError, Result};
use crate::core::oracle::StatusOracle;
use std::fs;
use std::path::{Path, PathBuf};

/// Depth used when the caller does not choose one.
pub const DEFAULT_SCAN_DEPTH: usize = 3;

/// Find repositories under `root`, at most `max_depth` levels down.
///
/// Hidden directories are skipped and a discovered repository is not
/// descended into. `root` itself counts as depth 0. Results are sorted.
pub fn discover_repositories<O: StatusOracle + ?Sized>(
    oracle: &O,
    root: &Path,
    max_depth: usize,
) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(NavigatorError::directory_read(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let mut found = Vec::new();
    collect_repositories(oracle, root, 0, max_depth, &mut found)?;
    found.sort();
    log::debug!(
        "Discovered {} repositories under '{}'",
        found.len(),
        root.display()
    );
    Ok(found)
}

fn collect_repositories<O: StatusOracle + ?Sized>(
    oracle: &O,
    dir: &Path,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<PathBuf>,
) -> Result<()> {
    if oracle.is_repository(dir) {
        out.push(dir.to_path_buf());
        return Ok(());
    }
    if depth >= max_depth {
        return Ok(());
    }

    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        // The root must be readable; below it, unreadable directories are skipped.
        Err(e) if depth == 0 => return Err(NavigatorError::directory_read(dir, e)),
        Err(e) => {
            log::debug!("Skipping unreadable directory '{}': {e}", dir.display());
            return Ok(());
        }
    };

    let mut children = Vec::new();
    for entry in read_dir.flatten() {
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let path = entry.path();
        if !hidden && path.is_dir() {
            children.push(path);
        }
    }
    children.sort();

    for child in children {
        collect_repositories(oracle, &child, depth + 1, max_depth, out)?;
    }
    Ok(())
}
