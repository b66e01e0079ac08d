//! Parallel status refresh of registry records.
//!
//! [`StatusRefresher::refresh_all`] shares one iterator over the records
//! between a fixed set of scoped worker threads. A worker holds the queue
//! lock only long enough to take the next record, so every record is handed
//! to exactly one worker and refreshed without further locking. The scope
//! end is the completion barrier.

use crate::core::oracle::{child_worktrees, StatusOracle};
use crate::core::registry::RepositoryRecord;
use chrono::Utc;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};
use std::thread;

pub struct StatusRefresher<'a, O: ?Sized> {
    oracle: &'a O,
    max_workers: Option<NonZeroUsize>,
}

impl<'a, O: StatusOracle + ?Sized> StatusRefresher<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            max_workers: None,
        }
    }

    /// Cap the pool below the machine's available parallelism.
    pub fn with_max_workers(mut self, workers: NonZeroUsize) -> Self {
        self.max_workers = Some(workers);
        self
    }

    /// Number of workers used for `record_count` records.
    pub fn pool_size(&self, record_count: usize) -> usize {
        let parallelism = self.max_workers.map(NonZeroUsize::get).unwrap_or_else(|| {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });
        parallelism.min(record_count)
    }

    /// Re-query the oracle for one record and overwrite its status.
    pub fn refresh_one(&self, record: &mut RepositoryRecord) {
        let path = record.path.as_path();
        record.last_refreshed = Some(Utc::now());

        if !self.oracle.is_repository(path) {
            log::debug!("No longer a repository: {}", path.display());
            record.mark_error();
            return;
        }

        record.is_bare = self.oracle.is_bare_repository(path);
        record.is_worktree = self.oracle.is_worktree(path);
        record.has_error = false;

        if record.is_bare {
            record.has_uncommitted = false;
            record.has_untracked = false;
            record.has_unpushed = !child_worktrees(self.oracle, path).is_empty();
            record.uncommitted_count = 0;
            record.unpushed_count = 0;
            record.untracked_count = 0;
            return;
        }

        record.has_uncommitted = self.oracle.has_uncommitted_changes(path);
        record.has_unpushed = self.oracle.has_unpushed_commits(path);
        record.has_untracked = self.oracle.has_untracked_files(path);
        record.uncommitted_count = self.oracle.count_uncommitted_changes(path);
        record.unpushed_count = self.oracle.count_unpushed_commits(path);
        record.untracked_count = self.oracle.count_untracked_files(path);
    }

    /// Refresh every record on a bounded worker pool; returns once all are done.
    pub fn refresh_all(&self, records: &mut [RepositoryRecord]) {
        let pool_size = self.pool_size(records.len());
        if pool_size == 0 {
            return;
        }
        log::debug!(
            "Refreshing {} repositories with {} workers",
            records.len(),
            pool_size
        );

        let queue = Mutex::new(records.iter_mut());

        thread::scope(|scope| {
            for _ in 0..pool_size {
                scope.spawn(|| loop {
                    let next = queue.lock().unwrap_or_else(PoisonError::into_inner).next();
                    let Some(record) = next else {
                        break;
                    };
                    self.refresh_one(record);
                });
            }
        });
    }
}
