//! Git status queries against a single repository path.
//!
//! [`StatusOracle`] is the narrow capability interface the explorer, registry
//! and refresher depend on. [`GitOracle`] is the real implementation: every
//! query spawns `git` with its working directory set to the target path and
//! parses the porcelain output.
//!
//! # Failure policy
//! Predicates and counts treat a failed git invocation as "no signal"
//! (`false` / `0`). [`StatusOracle::list_worktrees`] is the exception and
//! returns the [`QueryError`], since an enumeration failure changes which
//! items exist rather than how they are decorated.

use crate::core::error::QueryError;
use crate::core::paths::normalize_path;
use crate::core::porcelain::{
    branch_status_is_ahead, count_lines, parse_worktree_list, ShortStatus, WorktreeDescriptor,
};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

/// Placeholder returned by [`StatusOracle::current_branch`] when HEAD can't be read.
pub const UNKNOWN_BRANCH: &str = "unknown";

const GIT_DIR_NAME: &str = ".git";
const WORKTREE_LINK_MARKER: &str = "gitdir:";

const ARGS_GIT_DIR: &[&str] = &["rev-parse", "--git-dir"];
const ARGS_COMMON_DIR: &[&str] = &["rev-parse", "--git-common-dir"];
const ARGS_IS_BARE: &[&str] = &["rev-parse", "--is-bare-repository"];
const ARGS_INSIDE_WORK_TREE: &[&str] = &["rev-parse", "--is-inside-work-tree"];
const ARGS_WORKTREE_LIST: &[&str] = &["worktree", "list", "--porcelain"];
const ARGS_SHORT_STATUS: &[&str] = &["status", "--porcelain"];
const ARGS_BRANCH_STATUS: &[&str] = &["status", "--porcelain", "--branch"];
const ARGS_UNPUSHED_LOG: &[&str] = &["log", "@{u}..HEAD", "--oneline"];
const ARGS_CURRENT_BRANCH: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];

/// Status questions answerable for any filesystem path.
///
/// Implementations must be shareable across the refresh worker threads.
pub trait StatusOracle: Send + Sync {
    fn is_repository(&self, path: &Path) -> bool;
    fn is_bare_repository(&self, path: &Path) -> bool;
    fn is_worktree(&self, path: &Path) -> bool;
    fn list_worktrees(&self, path: &Path) -> Result<Vec<WorktreeDescriptor>, QueryError>;
    fn has_uncommitted_changes(&self, path: &Path) -> bool;
    fn has_unpushed_commits(&self, path: &Path) -> bool;
    fn has_untracked_files(&self, path: &Path) -> bool;
    /// Uncommitted changes, untracked lines excluded.
    fn count_uncommitted_changes(&self, path: &Path) -> usize;
    fn count_unpushed_commits(&self, path: &Path) -> usize;
    fn count_untracked_files(&self, path: &Path) -> usize;
    fn current_branch(&self, path: &Path) -> String;
}

macro_rules! forward_status_oracle {
    ($target:ty) => {
        impl<T: StatusOracle + ?Sized> StatusOracle for $target {
            fn is_repository(&self, path: &Path) -> bool {
                (**self).is_repository(path)
            }
            fn is_bare_repository(&self, path: &Path) -> bool {
                (**self).is_bare_repository(path)
            }
            fn is_worktree(&self, path: &Path) -> bool {
                (**self).is_worktree(path)
            }
            fn list_worktrees(&self, path: &Path) -> Result<Vec<WorktreeDescriptor>, QueryError> {
                (**self).list_worktrees(path)
            }
            fn has_uncommitted_changes(&self, path: &Path) -> bool {
                (**self).has_uncommitted_changes(path)
            }
            fn has_unpushed_commits(&self, path: &Path) -> bool {
                (**self).has_unpushed_commits(path)
            }
            fn has_untracked_files(&self, path: &Path) -> bool {
                (**self).has_untracked_files(path)
            }
            fn count_uncommitted_changes(&self, path: &Path) -> usize {
                (**self).count_uncommitted_changes(path)
            }
            fn count_unpushed_commits(&self, path: &Path) -> usize {
                (**self).count_unpushed_commits(path)
            }
            fn count_untracked_files(&self, path: &Path) -> usize {
                (**self).count_untracked_files(path)
            }
            fn current_branch(&self, path: &Path) -> String {
                (**self).current_branch(path)
            }
        }
    };
}

forward_status_oracle!(&T);
forward_status_oracle!(Box<T>);
forward_status_oracle!(Arc<T>);

/// Worktrees of a bare repository other than the bare entry itself.
///
/// Listing failures degrade to an empty expansion.
pub fn child_worktrees<O: StatusOracle + ?Sized>(
    oracle: &O,
    bare_path: &Path,
) -> Vec<WorktreeDescriptor> {
    match oracle.list_worktrees(bare_path) {
        Ok(worktrees) => worktrees
            .into_iter()
            .filter(|worktree| !worktree.duplicates_parent(bare_path))
            .collect(),
        Err(e) => {
            log::warn!(
                "Could not list worktrees of '{}': {e}",
                bare_path.display()
            );
            Vec::new()
        }
    }
}

/// Oracle backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitOracle {
    program: OsString,
}

impl Default for GitOracle {
    fn default() -> Self {
        Self {
            program: OsString::from("git"),
        }
    }
}

impl GitOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different git executable (e.g. an absolute path).
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run git in `path` and return stdout on success.
    fn run(&self, path: &Path, args: &[&str]) -> Result<String, QueryError> {
        log::debug!("git {} (in {})", args.join(" "), path.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(path)
            .env("GIT_OPTIONAL_LOCKS", "0")
            .output()
            .map_err(|e| QueryError::spawn(args, &e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(QueryError::command_failed(args, stderr.trim()));
        }

        String::from_utf8(output.stdout).map_err(|_| QueryError::invalid_output(args))
    }

    /// Like [`Self::run`], with failures collapsed to `None`.
    fn probe(&self, path: &Path, args: &[&str]) -> Option<String> {
        match self.run(path, args) {
            Ok(output) => Some(output),
            Err(e) => {
                log::debug!("Query treated as no signal: {e}");
                None
            }
        }
    }

    fn short_status(&self, path: &Path) -> ShortStatus {
        self.probe(path, ARGS_SHORT_STATUS)
            .map(|output| ShortStatus::parse(&output))
            .unwrap_or_default()
    }

    fn unpushed_log(&self, path: &Path) -> Option<String> {
        self.probe(path, ARGS_UNPUSHED_LOG)
    }

    fn resolve_git_path(base: &Path, reported: &str) -> PathBuf {
        let reported = Path::new(reported.trim());
        if reported.is_absolute() {
            normalize_path(reported)
        } else {
            normalize_path(&base.join(reported))
        }
    }
}

fn has_metadata(path: &Path) -> bool {
    let metadata_path = path.join(GIT_DIR_NAME);
    if metadata_path.is_dir() {
        return true;
    }
    metadata_path.is_file()
        && fs::read_to_string(&metadata_path)
            .map(|content| content.starts_with(WORKTREE_LINK_MARKER))
            .unwrap_or(false)
}

impl StatusOracle for GitOracle {
    fn is_repository(&self, path: &Path) -> bool {
        has_metadata(path) || self.probe(path, ARGS_GIT_DIR).is_some()
    }

    fn is_bare_repository(&self, path: &Path) -> bool {
        self.probe(path, ARGS_IS_BARE)
            .is_some_and(|output| output.trim() == "true")
    }

    fn is_worktree(&self, path: &Path) -> bool {
        let inside = self
            .probe(path, ARGS_INSIDE_WORK_TREE)
            .is_some_and(|output| output.trim() == "true");
        if !inside {
            return false;
        }

        let (Some(git_dir), Some(common_dir)) = (
            self.probe(path, ARGS_GIT_DIR),
            self.probe(path, ARGS_COMMON_DIR),
        ) else {
            return false;
        };

        Self::resolve_git_path(path, &git_dir) != Self::resolve_git_path(path, &common_dir)
    }

    fn list_worktrees(&self, path: &Path) -> Result<Vec<WorktreeDescriptor>, QueryError> {
        let output = self.run(path, ARGS_WORKTREE_LIST)?;
        Ok(parse_worktree_list(&output))
    }

    fn has_uncommitted_changes(&self, path: &Path) -> bool {
        self.short_status(path).uncommitted > 0
    }

    fn has_unpushed_commits(&self, path: &Path) -> bool {
        let ahead = self
            .probe(path, ARGS_BRANCH_STATUS)
            .is_some_and(|output| branch_status_is_ahead(&output));
        ahead
            || self
                .unpushed_log(path)
                .is_some_and(|output| count_lines(&output) > 0)
    }

    fn has_untracked_files(&self, path: &Path) -> bool {
        self.short_status(path).untracked > 0
    }

    fn count_uncommitted_changes(&self, path: &Path) -> usize {
        self.short_status(path).uncommitted
    }

    fn count_unpushed_commits(&self, path: &Path) -> usize {
        self.unpushed_log(path)
            .map(|output| count_lines(&output))
            .unwrap_or(0)
    }

    fn count_untracked_files(&self, path: &Path) -> usize {
        self.short_status(path).untracked
    }

    fn current_branch(&self, path: &Path) -> String {
        self.probe(path, ARGS_CURRENT_BRANCH)
            .map(|output| output.trim().to_string())
            .unwrap_or_else(|| UNKNOWN_BRANCH.to_string())
    }
}
