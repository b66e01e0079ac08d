//! In-memory [`StatusOracle`] for unit tests; compiled only under `cfg(test)`.
//!
//! [`FakeOracle`] answers from a table of [`FakeRepository`] descriptions
//! instead of spawning git. Answers are returned verbatim, even ones git
//! would never give (a dirty bare repository). It also records how many
//! queries it served and how many ran at once, so cache hits and worker-pool
//! bounds are observable.

use crate::core::error::QueryError;
use crate::core::oracle::{StatusOracle, UNKNOWN_BRANCH};
use crate::core::porcelain::WorktreeDescriptor;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// Canned answers for one repository path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeRepository {
    pub is_bare: bool,
    pub is_worktree: bool,
    pub uncommitted: usize,
    pub unpushed: usize,
    pub untracked: usize,
    pub branch: Option<String>,
    pub worktrees: Vec<WorktreeDescriptor>,
    pub fail_worktree_list: bool,
}

impl FakeRepository {
    pub fn regular() -> Self {
        Self {
            branch: Some("main".to_string()),
            ..Self::default()
        }
    }

    pub fn bare() -> Self {
        Self {
            is_bare: true,
            ..Self::default()
        }
    }

    /// A linked worktree checked out on `branch`.
    pub fn linked_worktree(branch: &str) -> Self {
        Self {
            is_worktree: true,
            branch: Some(branch.to_string()),
            ..Self::default()
        }
    }

    pub fn uncommitted(mut self, count: usize) -> Self {
        self.uncommitted = count;
        self
    }

    pub fn unpushed(mut self, count: usize) -> Self {
        self.unpushed = count;
        self
    }

    pub fn untracked(mut self, count: usize) -> Self {
        self.untracked = count;
        self
    }

    pub fn failing_worktree_list(mut self) -> Self {
        self.fail_worktree_list = true;
        self
    }
}

#[derive(Debug, Default)]
pub struct FakeOracle {
    repositories: HashMap<PathBuf, FakeRepository>,
    latency: Option<Duration>,
    calls: AtomicUsize,
    active: AtomicUsize,
    peak: AtomicUsize,
}

/// Tracks one in-flight query for peak concurrency accounting.
struct InFlight<'a> {
    active: &'a AtomicUsize,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, path: impl Into<PathBuf>, repository: FakeRepository) -> Self {
        self.repositories.insert(path.into(), repository);
        self
    }

    /// Attach a worktree on `branch` to the listing of `parent`.
    ///
    /// Only the listing changes: register `path` separately to make the
    /// worktree itself answer as a repository.
    pub fn with_worktree(
        mut self,
        parent: impl AsRef<Path>,
        path: impl Into<PathBuf>,
        branch: &str,
    ) -> Self {
        let descriptor = WorktreeDescriptor {
            path: path.into(),
            branch: branch.to_string(),
            is_bare: false,
        };
        self.repositories
            .entry(parent.as_ref().to_path_buf())
            .or_default()
            .worktrees
            .push(descriptor);
        self
    }

    /// Sleep this long inside every query.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Total number of queries answered.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of queries observed running at the same time.
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn enter(&self) -> InFlight<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now_active, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            thread::sleep(latency);
        }
        InFlight {
            active: &self.active,
        }
    }

    fn lookup(&self, path: &Path) -> Option<&FakeRepository> {
        self.repositories.get(path)
    }

    fn answer<T>(&self, path: &Path, default: T, query: impl FnOnce(&FakeRepository) -> T) -> T {
        let _in_flight = self.enter();
        self.lookup(path).map(query).unwrap_or(default)
    }
}

impl StatusOracle for FakeOracle {
    fn is_repository(&self, path: &Path) -> bool {
        self.answer(path, false, |_| true)
    }

    fn is_bare_repository(&self, path: &Path) -> bool {
        self.answer(path, false, |repo| repo.is_bare)
    }

    fn is_worktree(&self, path: &Path) -> bool {
        self.answer(path, false, |repo| repo.is_worktree)
    }

    fn list_worktrees(&self, path: &Path) -> Result<Vec<WorktreeDescriptor>, QueryError> {
        let _in_flight = self.enter();
        let args = ["worktree", "list", "--porcelain"];
        let repo = self
            .lookup(path)
            .ok_or_else(|| QueryError::command_failed(&args, "fatal: not a git repository"))?;
        if repo.fail_worktree_list {
            return Err(QueryError::command_failed(&args, "fatal: simulated failure"));
        }

        let main = WorktreeDescriptor {
            path: path.to_path_buf(),
            branch: repo.branch.clone().unwrap_or_default(),
            is_bare: repo.is_bare,
        };
        Ok(std::iter::once(main)
            .chain(repo.worktrees.iter().cloned())
            .collect())
    }

    fn has_uncommitted_changes(&self, path: &Path) -> bool {
        self.answer(path, false, |repo| repo.uncommitted > 0)
    }

    fn has_unpushed_commits(&self, path: &Path) -> bool {
        self.answer(path, false, |repo| repo.unpushed > 0)
    }

    fn has_untracked_files(&self, path: &Path) -> bool {
        self.answer(path, false, |repo| repo.untracked > 0)
    }

    fn count_uncommitted_changes(&self, path: &Path) -> usize {
        self.answer(path, 0, |repo| repo.uncommitted)
    }

    fn count_unpushed_commits(&self, path: &Path) -> usize {
        self.answer(path, 0, |repo| repo.unpushed)
    }

    fn count_untracked_files(&self, path: &Path) -> usize {
        self.answer(path, 0, |repo| repo.untracked)
    }

    fn current_branch(&self, path: &Path) -> String {
        self.answer(path, UNKNOWN_BRANCH.to_string(), |repo| {
            repo.branch
                .clone()
                .unwrap_or_else(|| UNKNOWN_BRANCH.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_path_has_no_signal() {
        let oracle = FakeOracle::new();
        let path = Path::new("/nowhere");
        assert!(!oracle.is_repository(path));
        assert!(oracle.list_worktrees(path).is_err());
        assert_eq!(oracle.current_branch(path), UNKNOWN_BRANCH);
        assert_eq!(oracle.calls(), 3);
    }

    #[test]
    fn test_listing_starts_with_main_entry() {
        let oracle = FakeOracle::new()
            .with_repository("/r.git", FakeRepository::bare())
            .with_worktree("/r.git", "/r-dev", "dev");
        let listing = oracle.list_worktrees(Path::new("/r.git")).unwrap();
        assert_eq!(listing.len(), 2);
        assert!(listing[0].is_bare);
        assert_eq!(listing[1].branch, "dev");
    }
}
