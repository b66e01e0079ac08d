//! Core functionality for repo-navigator.
//!
//! This module provides the status oracle and its cache, directory
//! exploration, the repository registry with its parallel refresher, and
//! the config, error and output plumbing shared by every command.

pub mod cache;
pub mod cached_oracle;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod explorer;
#[cfg(test)]
pub mod fake_oracle;
pub mod oracle;
pub mod output;
pub mod paths;
pub mod porcelain;
pub mod refresher;
pub mod registry;
pub mod summary;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{NavigatorError, QueryError, Result};

// === Status queries ===
// The oracle seam, the git-backed implementation and its caching decorator
pub use cache::ResultCache;
pub use cached_oracle::{CachedOracle, DEFAULT_CACHE_TTL};
pub use oracle::{child_worktrees, GitOracle, StatusOracle, UNKNOWN_BRANCH};
pub use porcelain::WorktreeDescriptor;

// === Exploration ===
// Directory listing with repository classification and discovery scans
pub use discovery::{discover_repositories, DEFAULT_SCAN_DEPTH};
pub use entry::{FileSystemEntry, RepositoryInfo};
pub use explorer::{navigate_to_parent, DirectoryExplorer};

// === Registry ===
// Managed repositories, their refresh pool and aggregate totals
pub use refresher::StatusRefresher;
pub use registry::{NavigableItem, RepositoryRecord, RepositoryRegistry};
pub use summary::SummaryData;

// === Configuration ===
pub use command_init::CommandContext;
pub use config::{NavigatorConfig, RepositoryConfig};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use colors::{entry_indicators, record_indicators, summary_line};
pub use output::{
    print_error, print_indexed_row, print_info, print_section_header, print_success,
    print_worktree_row,
};
