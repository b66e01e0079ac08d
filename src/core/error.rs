//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`NavigatorError`], the error returned by every fallible
//! repo-navigator operation, and [`QueryError`], the narrower failure of a single
//! external git invocation.
//!
//! # Public API
//! - [`NavigatorError`]: Main error enum covering all failure modes
//! - [`QueryError`]: Cloneable external-query failure (cached by the cached oracle)
//! - [`Result<T>`]: Type alias for `std::result::Result<T, NavigatorError>`
//!
//! # Error Categories
//! - **Registry**: Unknown repository, index out of range, path is not a repository
//! - **Exploration**: Directory listing failures
//! - **External queries**: git could not be spawned or exited unsuccessfully
//! - **Configuration**: Config directory, read, parse and write failures

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single external git query.
///
/// Kept `Clone` so a failed query result can live inside the result cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("failed to spawn git {args}: {message}")]
    Spawn { args: String, message: String },

    #[error("git {args} failed: {stderr}")]
    CommandFailed { args: String, stderr: String },

    #[error("git {args} produced non UTF-8 output")]
    InvalidOutput { args: String },
}

impl QueryError {
    pub fn spawn(args: &[&str], source: &std::io::Error) -> Self {
        Self::Spawn {
            args: args.join(" "),
            message: source.to_string(),
        }
    }

    pub fn command_failed(args: &[&str], stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            args: args.join(" "),
            stderr: stderr.into(),
        }
    }

    pub fn invalid_output(args: &[&str]) -> Self {
        Self::InvalidOutput {
            args: args.join(" "),
        }
    }
}

/// Domain-specific error types for repo-navigator
#[derive(Error, Debug)]
pub enum NavigatorError {
    // Registry errors
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Repository is not registered: {path}")]
    RepositoryNotRegistered { path: PathBuf },

    #[error("Index {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("No repositories registered. Use 'add' or 'scan' first.")]
    NoRepositories,

    // Exploration errors
    #[error("Cannot read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    // External query errors
    #[error("Git query error: {0}")]
    Query(#[from] QueryError),

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using NavigatorError
pub type Result<T> = std::result::Result<T, NavigatorError>;

impl NavigatorError {
    /// Create a not-a-repository error
    pub fn not_a_repository(path: impl Into<PathBuf>) -> Self {
        Self::NotARepository { path: path.into() }
    }

    /// Create a repository-not-registered error
    pub fn repository_not_registered(path: impl Into<PathBuf>) -> Self {
        Self::RepositoryNotRegistered { path: path.into() }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create a directory read error
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
