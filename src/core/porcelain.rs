//! Parsers for git's porcelain output formats.
//!
//! # Public API
//! - [`WorktreeDescriptor`]: One record of `git worktree list --porcelain`
//! - [`parse_worktree_list`]: Blank-line separated worktree records
//! - [`ShortStatus`]: Uncommitted/untracked line counts of `git status --porcelain`
//! - [`branch_status_is_ahead`]: Ahead marker on the `## branch...upstream` line

use crate::core::paths::paths_equal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BRANCH_REF_PREFIX: &str = "refs/heads/";
const UNTRACKED_MARKER: &str = "??";
const AHEAD_MARKER: &str = "ahead ";

/// A worktree as reported by `git worktree list --porcelain`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorktreeDescriptor {
    pub path: PathBuf,
    /// Short branch name, without `refs/heads/`.
    pub branch: String,
    pub is_bare: bool,
}

impl WorktreeDescriptor {
    /// True for entries that would duplicate their bare parent: the bare
    /// record itself, or a record pointing back at the parent path.
    pub fn duplicates_parent(&self, parent: &Path) -> bool {
        self.is_bare || paths_equal(&self.path, parent)
    }
}

/// Parse porcelain worktree output into descriptors.
///
/// Records are separated by blank lines. Within a record the first
/// whitespace-delimited token is the key and the rest is the value.
/// Unknown keys and keys missing their value are ignored; `bare` is a
/// key with no value. A final record without a trailing blank line is
/// still emitted.
pub fn parse_worktree_list(output: &str) -> Vec<WorktreeDescriptor> {
    let mut worktrees = Vec::new();
    let mut current = WorktreeDescriptor::default();
    let mut has_fields = false;

    for line in output.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            if has_fields {
                worktrees.push(std::mem::take(&mut current));
                has_fields = false;
            }
            continue;
        }

        let (key, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match key {
            "bare" => {
                current.is_bare = true;
                has_fields = true;
            }
            "worktree" if !value.is_empty() => {
                current.path = PathBuf::from(value);
                has_fields = true;
            }
            "branch" if !value.is_empty() => {
                current.branch = value
                    .strip_prefix(BRANCH_REF_PREFIX)
                    .unwrap_or(value)
                    .to_string();
                has_fields = true;
            }
            _ => {}
        }
    }

    if has_fields {
        worktrees.push(current);
    }

    worktrees
}

/// Line classification of `git status --porcelain` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortStatus {
    pub uncommitted: usize,
    pub untracked: usize,
}

impl ShortStatus {
    pub fn parse(output: &str) -> Self {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .fold(Self::default(), |mut acc, line| {
                if line.starts_with(UNTRACKED_MARKER) {
                    acc.untracked += 1;
                } else {
                    acc.uncommitted += 1;
                }
                acc
            })
    }
}

/// Whether the first line of `git status --porcelain --branch` reports
/// the branch as ahead of its upstream.
pub fn branch_status_is_ahead(output: &str) -> bool {
    output
        .lines()
        .next()
        .is_some_and(|line| line.contains(AHEAD_MARKER))
}

/// Number of non-blank lines, used for log-based commit counts.
pub fn count_lines(output: &str) -> usize {
    output.lines().filter(|line| !line.trim().is_empty()).count()
}
