//! Summary totals across repositories and worktrees.

use crate::core::oracle::StatusOracle;
use crate::core::registry::{NavigableItem, RepositoryRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryData {
    pub total_uncommitted: usize,
    pub total_unpushed: usize,
    pub total_untracked: usize,
    pub total_errors: usize,
}

impl SummaryData {
    fn add_record(&mut self, record: &RepositoryRecord) {
        if record.has_error {
            self.total_errors += 1;
        }
        if record.has_uncommitted {
            self.total_uncommitted += record.uncommitted_count;
        }
        if record.has_unpushed {
            self.total_unpushed += record.unpushed_count;
        }
        if record.has_untracked {
            self.total_untracked += record.untracked_count;
        }
    }

    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

pub fn summarize_records(records: &[RepositoryRecord]) -> SummaryData {
    records.iter().fold(SummaryData::default(), |mut summary, record| {
        summary.add_record(record);
        summary
    })
}

/// Totals over navigable items.
///
/// Repository items use the stored record status. Worktree items are asked
/// of `oracle` at call time. Items whose index no longer resolves are skipped.
pub fn summarize_navigable<O: StatusOracle + ?Sized>(
    items: &[NavigableItem],
    records: &[RepositoryRecord],
    oracle: &O,
) -> SummaryData {
    let mut summary = SummaryData::default();
    for item in items {
        match item {
            NavigableItem::Repository { index } => {
                if let Some(record) = records.get(*index) {
                    summary.add_record(record);
                }
            }
            NavigableItem::Worktree { worktree, .. } => {
                let path = worktree.path.as_path();
                if !oracle.is_repository(path) {
                    summary.total_errors += 1;
                    continue;
                }
                if oracle.has_uncommitted_changes(path) {
                    summary.total_uncommitted += oracle.count_uncommitted_changes(path);
                }
                if oracle.has_unpushed_commits(path) {
                    summary.total_unpushed += oracle.count_unpushed_commits(path);
                }
                if oracle.has_untracked_files(path) {
                    summary.total_untracked += oracle.count_untracked_files(path);
                }
            }
        }
    }
    summary
}
