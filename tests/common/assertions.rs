//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating repo-navigator command output and
//! error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the not-a-repository error
pub fn not_a_repository() -> impl Predicate<str> {
    predicates::str::contains("Not a git repository")
}

/// Creates a predicate that checks for the empty-registry error
pub fn no_repositories() -> impl Predicate<str> {
    predicates::str::contains("No repositories registered")
}

/// Creates a predicate that checks for a numbered row
pub fn has_index(index: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}]"))
}

/// Creates a predicate that checks for the totals line
pub fn has_summary_line() -> impl Predicate<str> {
    predicates::str::contains("uncommitted")
        .and(predicates::str::contains("unpushed"))
        .and(predicates::str::contains("untracked"))
        .and(predicates::str::contains("errors"))
}

/// Creates a predicate that checks for the clean indicator
pub fn is_clean_row() -> impl Predicate<str> {
    predicates::str::contains("✓")
}
