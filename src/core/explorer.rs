//! Directory exploration with repository classification.
//!
//! [`DirectoryExplorer::explore`] lists one directory and classifies each
//! visible entry as a plain file/directory, a repository or a bare
//! repository. Bare repositories are followed by one synthetic entry per
//! worktree, so the listing reads like a small tree:
//!
//! ```text
//! ..
//! notes
//! project.git
//!   ├─ project.git-main
//!   ├─ project.git-feature
//! tools
//! ```
//!
//! Only an unreadable directory fails the call. Problems with a single
//! entry, such as a worktree that no longer exists, end up as
//! [`RepositoryInfo::has_error`] on that entry.

use crate::core::entry::{FileSystemEntry, RepositoryInfo};
use crate::core::error::{NavigatorError, Result};
use crate::core::oracle::{child_worktrees, StatusOracle};
use crate::core::paths::{base_name, contains_path};
use crate::core::porcelain::WorktreeDescriptor;
use std::fs;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

const HIDDEN_PREFIX: &[u8] = b".";
const WORKTREE_BRANCH_PREFIX: &str = "  ├─ ";

/// Parent of `path`, or the filesystem root when `path` is already a root.
///
/// A single relative component resolves against the current directory:
/// `a` goes to `.` and `.` goes to `..`.
pub fn navigate_to_parent(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => match path.components().next_back() {
            Some(Component::CurDir) => PathBuf::from(".."),
            Some(Component::ParentDir) => path.join(".."),
            _ => PathBuf::from("."),
        },
        None => PathBuf::from(MAIN_SEPARATOR_STR),
    }
}

fn is_root(path: &Path) -> bool {
    path.parent().is_none()
}

pub struct DirectoryExplorer<'a, O: ?Sized> {
    oracle: &'a O,
}

impl<'a, O: StatusOracle + ?Sized> DirectoryExplorer<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// List `path`, marking entries found in `managed` as already managed.
    ///
    /// Hidden entries are skipped. Entries are ordered by file name, with
    /// worktree entries directly after their bare repository.
    pub fn explore(&self, path: &Path, managed: &[PathBuf]) -> Result<Vec<FileSystemEntry>> {
        let mut children = Vec::new();
        for dir_entry in fs::read_dir(path).map_err(|e| NavigatorError::directory_read(path, e))? {
            let dir_entry = dir_entry.map_err(|e| NavigatorError::directory_read(path, e))?;
            children.push((dir_entry.file_name(), dir_entry.path()));
        }
        children.sort();

        let mut entries = Vec::with_capacity(children.len() + 1);
        if !is_root(path) {
            entries.push(FileSystemEntry::parent(navigate_to_parent(path)));
        }

        for (file_name, entry_path) in children {
            if file_name.as_encoded_bytes().starts_with(HIDDEN_PREFIX) {
                continue;
            }
            let name = file_name.to_string_lossy().into_owned();
            let is_directory = entry_path.is_dir();
            let is_repository = is_directory && self.oracle.is_repository(&entry_path);

            let mut info = RepositoryInfo::new()
                .with_git_repository(is_repository)
                .with_already_managed(contains_path(managed, &entry_path));

            let is_bare = is_repository && self.oracle.is_bare_repository(&entry_path);
            if is_repository && !is_bare {
                info = info.with_status(
                    self.oracle.has_uncommitted_changes(&entry_path),
                    self.oracle.has_unpushed_commits(&entry_path),
                    self.oracle.has_untracked_files(&entry_path),
                );
            }

            entries.push(
                FileSystemEntry::new(name, entry_path.clone())
                    .with_directory(is_directory)
                    .with_repository(info),
            );

            if is_bare {
                entries.extend(self.worktree_entries(&entry_path, managed));
            }
        }

        log::debug!("Explored '{}': {} entries", path.display(), entries.len());
        Ok(entries)
    }

    fn worktree_entries(&self, bare_path: &Path, managed: &[PathBuf]) -> Vec<FileSystemEntry> {
        let bare_name = base_name(bare_path);
        child_worktrees(self.oracle, bare_path)
            .into_iter()
            .map(|worktree| self.worktree_entry(&bare_name, worktree, managed))
            .collect()
    }

    fn worktree_entry(
        &self,
        bare_name: &str,
        worktree: WorktreeDescriptor,
        managed: &[PathBuf],
    ) -> FileSystemEntry {
        let path = worktree.path.clone();
        let accessible = self.oracle.is_repository(&path);
        if !accessible {
            log::warn!("Listed worktree is not accessible: {}", path.display());
        }

        let info = RepositoryInfo::new()
            .with_git_repository(true)
            .with_already_managed(contains_path(managed, &path))
            .with_status(
                self.oracle.has_uncommitted_changes(&path),
                self.oracle.has_unpushed_commits(&path),
                self.oracle.has_untracked_files(&path),
            )
            .with_error(!accessible);

        FileSystemEntry::new(
            format!("{WORKTREE_BRANCH_PREFIX}{bare_name}-{}", worktree.branch),
            path,
        )
        .with_directory(true)
        .with_repository(info.with_worktree(worktree))
    }
}
