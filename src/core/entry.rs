//! Immutable directory listing entries produced by the explorer.
//!
//! Both [`FileSystemEntry`] and [`RepositoryInfo`] are built through
//! `with_*` methods that consume the value and return an updated copy; once
//! handed out an entry never changes, so listings can be shared freely.

use crate::core::porcelain::WorktreeDescriptor;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Name of the synthetic entry pointing at the parent directory.
pub const PARENT_ENTRY_NAME: &str = "..";

/// Git classification and status of a listing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryInfo {
    is_git_repository: bool,
    is_already_managed: bool,
    is_worktree: bool,
    worktree: Option<WorktreeDescriptor>,
    has_uncommitted: bool,
    has_unpushed: bool,
    has_untracked: bool,
    has_error: bool,
}

impl RepositoryInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_git_repository(self, is_git_repository: bool) -> Self {
        Self {
            is_git_repository,
            ..self
        }
    }

    pub fn with_already_managed(self, is_already_managed: bool) -> Self {
        Self {
            is_already_managed,
            ..self
        }
    }

    /// Mark as a worktree of a bare repository, carrying its descriptor.
    pub fn with_worktree(self, worktree: WorktreeDescriptor) -> Self {
        Self {
            is_worktree: true,
            worktree: Some(worktree),
            ..self
        }
    }

    pub fn with_status(self, has_uncommitted: bool, has_unpushed: bool, has_untracked: bool) -> Self {
        Self {
            has_uncommitted,
            has_unpushed,
            has_untracked,
            ..self
        }
    }

    pub fn with_error(self, has_error: bool) -> Self {
        Self { has_error, ..self }
    }

    pub fn is_git_repository(&self) -> bool {
        self.is_git_repository
    }

    pub fn is_already_managed(&self) -> bool {
        self.is_already_managed
    }

    pub fn is_worktree(&self) -> bool {
        self.is_worktree
    }

    pub fn worktree(&self) -> Option<&WorktreeDescriptor> {
        self.worktree.as_ref()
    }

    pub fn has_uncommitted(&self) -> bool {
        self.has_uncommitted
    }

    pub fn has_unpushed(&self) -> bool {
        self.has_unpushed
    }

    pub fn has_untracked(&self) -> bool {
        self.has_untracked
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

/// One row of a directory exploration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSystemEntry {
    name: String,
    absolute_path: PathBuf,
    is_directory: bool,
    repository: RepositoryInfo,
}

impl FileSystemEntry {
    pub fn new(name: impl Into<String>, absolute_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            absolute_path: absolute_path.into(),
            is_directory: false,
            repository: RepositoryInfo::default(),
        }
    }

    /// The `..` entry for `parent`: a directory, never a repository.
    pub fn parent(parent: impl Into<PathBuf>) -> Self {
        Self::new(PARENT_ENTRY_NAME, parent)
            .with_directory(true)
            .with_repository(RepositoryInfo::new().with_git_repository(false))
    }

    pub fn with_directory(self, is_directory: bool) -> Self {
        Self {
            is_directory,
            ..self
        }
    }

    pub fn with_repository(self, repository: RepositoryInfo) -> Self {
        Self { repository, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    pub fn is_parent_link(&self) -> bool {
        self.name == PARENT_ENTRY_NAME
    }

    pub fn repository(&self) -> &RepositoryInfo {
        &self.repository
    }
}
