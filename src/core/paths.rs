//! Path normalization shared by the registry and the explorer.

use std::path::{Component, Path, PathBuf};

/// Canonical form of `path` used for identity comparisons.
///
/// Existing paths are canonicalized (symlinks resolved). Paths that cannot
/// be canonicalized fall back to a lexical cleanup: `.` components dropped,
/// `..` folded into the parent and trailing separators ignored, so `/a/b/`
/// and `/a/b` normalize identically either way.
pub fn normalize_path(path: &Path) -> PathBuf {
    match path.canonicalize() {
        Ok(canonical) => canonical,
        Err(_) => lexical_normalize(path),
    }
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Exact match after normalization (never a prefix match).
pub fn paths_equal(a: &Path, b: &Path) -> bool {
    normalize_path(a) == normalize_path(b)
}

/// Whether `path` appears among `candidates` after normalization.
pub fn contains_path(candidates: &[PathBuf], path: &Path) -> bool {
    let target = normalize_path(path);
    candidates
        .iter()
        .any(|candidate| normalize_path(candidate) == target)
}

/// Final path component as a display string, or the whole path for roots.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
