//! The list of user-managed repositories and their last-known status.
//!
//! # Public API
//! - [`RepositoryRecord`]: One managed repository and its status fields
//! - [`NavigableItem`]: A repository or one of its worktrees, for cursor navigation
//! - [`RepositoryRegistry`]: Ordered records keyed by canonical path
//!
//! Membership changes only through the add/remove methods. Status fields
//! are written by [`crate::core::refresher::StatusRefresher`]. The navigable
//! item list is derived on demand and stays cached until
//! [`RepositoryRegistry::refresh_navigable_items`] is called; adding or
//! removing records does not invalidate it.

use crate::core::error::{NavigatorError, Result};
use crate::core::oracle::{child_worktrees, StatusOracle};
use crate::core::paths::{base_name, normalize_path};
use crate::core::porcelain::WorktreeDescriptor;
use crate::core::summary::{summarize_navigable, summarize_records, SummaryData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub path: PathBuf,
    pub is_bare: bool,
    pub is_worktree: bool,
    /// Added by a discovery scan rather than explicitly.
    pub auto_discover: bool,
    pub has_uncommitted: bool,
    pub has_unpushed: bool,
    pub has_untracked: bool,
    pub has_error: bool,
    pub uncommitted_count: usize,
    pub unpushed_count: usize,
    pub untracked_count: usize,
    pub last_refreshed: Option<DateTime<Utc>>,
}

impl RepositoryRecord {
    /// A record for `path` with no status yet; `path` is canonicalized.
    pub fn new(path: &Path, auto_discover: bool) -> Self {
        let path = normalize_path(path);
        Self {
            name: base_name(&path),
            path,
            auto_discover,
            ..Self::default()
        }
    }

    /// Reset to the error state: every flag false except `has_error`.
    pub fn mark_error(&mut self) {
        self.has_uncommitted = false;
        self.has_unpushed = false;
        self.has_untracked = false;
        self.has_error = true;
        self.uncommitted_count = 0;
        self.unpushed_count = 0;
        self.untracked_count = 0;
    }

    /// Whether the record has nothing to report.
    pub fn is_clean(&self) -> bool {
        !(self.has_uncommitted || self.has_unpushed || self.has_untracked || self.has_error)
    }
}

/// Something the UI cursor can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigableItem {
    /// The registry record at `index`.
    Repository { index: usize },
    /// A worktree of the bare repository at `parent_index`.
    ///
    /// `parent_index` and `parent_path` are for display context only.
    Worktree {
        parent_index: usize,
        parent_path: PathBuf,
        worktree: WorktreeDescriptor,
    },
}

impl NavigableItem {
    pub fn is_worktree(&self) -> bool {
        matches!(self, Self::Worktree { .. })
    }
}

#[derive(Debug, Default)]
pub struct RepositoryRegistry {
    records: Vec<RepositoryRecord>,
    navigable_items: Option<Vec<NavigableItem>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an explicitly chosen repository; returns `false` if already present.
    pub fn add_repository(&mut self, path: &Path) -> bool {
        self.insert(RepositoryRecord::new(path, false))
    }

    /// Register a repository found by a discovery scan; returns `false` if already present.
    pub fn add_discovered(&mut self, path: &Path) -> bool {
        self.insert(RepositoryRecord::new(path, true))
    }

    fn insert(&mut self, record: RepositoryRecord) -> bool {
        if self.position(&record.path).is_some() {
            log::debug!("Repository already registered: {}", record.path.display());
            return false;
        }
        log::debug!("Registering repository: {}", record.path.display());
        self.records.push(record);
        true
    }

    /// Remove by 0-based index, shifting later records down.
    pub fn remove_repository(&mut self, index: usize) -> Result<RepositoryRecord> {
        if index >= self.records.len() {
            return Err(NavigatorError::index_out_of_range(index + 1, self.records.len()));
        }
        Ok(self.records.remove(index))
    }

    pub fn remove_repository_by_path(&mut self, path: &Path) -> Result<RepositoryRecord> {
        let index = self
            .position(path)
            .ok_or_else(|| NavigatorError::repository_not_registered(path))?;
        Ok(self.records.remove(index))
    }

    /// Index of the record whose canonical path matches `path`.
    pub fn position(&self, path: &Path) -> Option<usize> {
        let target = normalize_path(path);
        self.records.iter().position(|record| record.path == target)
    }

    pub fn find(&self, path: &Path) -> Option<&RepositoryRecord> {
        self.position(path).map(|index| &self.records[index])
    }

    pub fn get(&self, index: usize) -> Option<&RepositoryRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[RepositoryRecord] {
        &self.records
    }

    /// Mutable access for the refresher; the slice cannot be resized through it.
    pub fn records_mut(&mut self) -> &mut [RepositoryRecord] {
        &mut self.records
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.records.iter().map(|record| record.path.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cached navigable items, built on first use.
    pub fn navigable_items<O: StatusOracle + ?Sized>(&mut self, oracle: &O) -> &[NavigableItem] {
        if self.navigable_items.is_none() {
            self.navigable_items = Some(self.build_navigable_items(oracle));
        }
        self.navigable_items.as_deref().unwrap_or_default()
    }

    /// Rebuild the navigable item list from the current records.
    pub fn refresh_navigable_items<O: StatusOracle + ?Sized>(
        &mut self,
        oracle: &O,
    ) -> &[NavigableItem] {
        self.navigable_items = Some(self.build_navigable_items(oracle));
        self.navigable_items.as_deref().unwrap_or_default()
    }

    fn build_navigable_items<O: StatusOracle + ?Sized>(&self, oracle: &O) -> Vec<NavigableItem> {
        let mut items = Vec::with_capacity(self.records.len());
        for (index, record) in self.records.iter().enumerate() {
            items.push(NavigableItem::Repository { index });
            if !record.is_bare {
                continue;
            }
            items.extend(
                child_worktrees(oracle, &record.path)
                    .into_iter()
                    .map(|worktree| NavigableItem::Worktree {
                        parent_index: index,
                        parent_path: record.path.clone(),
                        worktree,
                    }),
            );
        }
        items
    }

    /// Totals over the records' stored status.
    pub fn summary(&self) -> SummaryData {
        summarize_records(&self.records)
    }

    /// Totals over the navigable items; worktree items are queried live.
    pub fn navigable_summary<O: StatusOracle + ?Sized>(&mut self, oracle: &O) -> SummaryData {
        self.navigable_items(oracle);
        let items = self.navigable_items.as_deref().unwrap_or_default();
        summarize_navigable(items, &self.records, oracle)
    }
}
