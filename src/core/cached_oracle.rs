//! Caching decorator over any [`StatusOracle`].
//!
//! Each query is keyed by `operation name + path`. A miss delegates to the
//! wrapped oracle and stores the answer; a hit within the TTL returns the
//! stored answer without spawning anything. `list_worktrees` results are
//! stored as one composite value, failure included.

use crate::core::cache::ResultCache;
use crate::core::error::QueryError;
use crate::core::oracle::StatusOracle;
use crate::core::porcelain::WorktreeDescriptor;
use std::path::Path;
use std::time::Duration;

/// Freshness window used by [`CachedOracle::new`].
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
enum CachedValue {
    Flag(bool),
    Count(usize),
    Text(String),
    Worktrees(Result<Vec<WorktreeDescriptor>, QueryError>),
}

pub struct CachedOracle<O> {
    inner: O,
    cache: ResultCache<CachedValue>,
}

impl<O: StatusOracle> CachedOracle<O> {
    pub fn new(inner: O) -> Self {
        Self::with_ttl(inner, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(inner: O, ttl: Duration) -> Self {
        Self {
            inner,
            cache: ResultCache::new(ttl),
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Drop every cached answer, e.g. after the caller changed a working tree.
    pub fn clear_cache(&self) {
        log::debug!("Clearing oracle cache");
        self.cache.clear();
    }

    /// Sweep expired answers; purely a memory optimization.
    pub fn clean_expired(&self) -> usize {
        self.cache.clean_expired()
    }

    fn cached(
        &self,
        operation: &str,
        path: &Path,
        compute: impl FnOnce() -> CachedValue,
    ) -> CachedValue {
        let key = format!("{operation}{}", path.display());
        if let Some(value) = self.cache.get(&key) {
            log::debug!("Cache hit: {key}");
            return value;
        }
        log::debug!("Cache miss: {key}");
        let value = compute();
        self.cache.set(key, value.clone());
        value
    }

    fn flag(&self, operation: &str, path: &Path, query: impl Fn(&O) -> bool) -> bool {
        match self.cached(operation, path, || CachedValue::Flag(query(&self.inner))) {
            CachedValue::Flag(value) => value,
            _ => query(&self.inner),
        }
    }

    fn count(&self, operation: &str, path: &Path, query: impl Fn(&O) -> usize) -> usize {
        match self.cached(operation, path, || CachedValue::Count(query(&self.inner))) {
            CachedValue::Count(value) => value,
            _ => query(&self.inner),
        }
    }
}

impl<O: StatusOracle> StatusOracle for CachedOracle<O> {
    fn is_repository(&self, path: &Path) -> bool {
        self.flag("IsRepository", path, |o| o.is_repository(path))
    }

    fn is_bare_repository(&self, path: &Path) -> bool {
        self.flag("IsBareRepository", path, |o| o.is_bare_repository(path))
    }

    fn is_worktree(&self, path: &Path) -> bool {
        self.flag("IsWorktree", path, |o| o.is_worktree(path))
    }

    fn list_worktrees(&self, path: &Path) -> Result<Vec<WorktreeDescriptor>, QueryError> {
        match self.cached("ListWorktrees", path, || {
            CachedValue::Worktrees(self.inner.list_worktrees(path))
        }) {
            CachedValue::Worktrees(result) => result,
            _ => self.inner.list_worktrees(path),
        }
    }

    fn has_uncommitted_changes(&self, path: &Path) -> bool {
        self.flag("HasUncommittedChanges", path, |o| {
            o.has_uncommitted_changes(path)
        })
    }

    fn has_unpushed_commits(&self, path: &Path) -> bool {
        self.flag("HasUnpushedCommits", path, |o| o.has_unpushed_commits(path))
    }

    fn has_untracked_files(&self, path: &Path) -> bool {
        self.flag("HasUntrackedFiles", path, |o| o.has_untracked_files(path))
    }

    fn count_uncommitted_changes(&self, path: &Path) -> usize {
        self.count("CountUncommittedChanges", path, |o| {
            o.count_uncommitted_changes(path)
        })
    }

    fn count_unpushed_commits(&self, path: &Path) -> usize {
        self.count("CountUnpushedCommits", path, |o| {
            o.count_unpushed_commits(path)
        })
    }

    fn count_untracked_files(&self, path: &Path) -> usize {
        self.count("CountUntrackedFiles", path, |o| o.count_untracked_files(path))
    }

    fn current_branch(&self, path: &Path) -> String {
        match self.cached("CurrentBranch", path, || {
            CachedValue::Text(self.inner.current_branch(path))
        }) {
            CachedValue::Text(branch) => branch,
            _ => self.inner.current_branch(path),
        }
    }
}
