//! Repo Navigator - browse directories and keep an eye on many git repositories at once.
//!
//! This library provides the core of repo-navigator: a status oracle that
//! answers questions about repositories by running git, a time-bounded cache
//! in front of it, a directory explorer that recognises repositories, bare
//! repositories and their worktrees, and a registry of managed repositories
//! whose status is refreshed by a bounded worker pool.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The [`StatusOracle`] trait with [`GitOracle`] and [`CachedOracle`]
//! - Directory exploration and discovery scans
//! - The repository registry, refresher and summaries
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    discover_repositories,
    navigate_to_parent,
    // Status queries
    CachedOracle,
    // Exploration
    DirectoryExplorer,
    FileSystemEntry,
    GitOracle,
    NavigableItem,
    // Error handling
    NavigatorError,
    QueryError,
    // Registry
    RepositoryInfo,
    RepositoryRecord,
    RepositoryRegistry,
    Result,
    StatusOracle,
    StatusRefresher,
    SummaryData,
    WorktreeDescriptor,
};
