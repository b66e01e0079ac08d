//! Predefined workspace scenarios
//!
//! Provides functions for creating workspaces with specific repository
//! layouts to test exploration and refresh behavior consistently.

#![allow(dead_code)]

use super::repository::*;
use repo_navigator::core::error::Result;

/// Scenario: a plain directory, a loose file and a repository with one
/// untracked file.
///
/// ```text
/// workspace/
///   docs/
///   notes.txt
///   repo/        (untracked.txt)
/// ```
pub fn create_mixed_workspace() -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;
    std::fs::create_dir_all(workspace.path("docs"))?;
    create_file(workspace.root(), "notes.txt", "notes\n")?;

    let repo = workspace.path("repo");
    init_repo_with_initial_commit(&repo)?;
    create_file(&repo, "untracked.txt", "new\n")?;

    Ok(workspace)
}

/// Scenario: a bare repository with two linked worktrees next to it.
///
/// ```text
/// workspace/
///   app.git      (bare)
///   app-alpha/   (worktree on branch alpha, one modified file)
///   app-beta/    (worktree on branch beta, clean)
/// ```
pub fn create_bare_workspace() -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;
    let bare = workspace.path("app.git");
    init_bare_repo(&bare)?;
    add_worktree(&bare, &workspace.path("app-alpha"), "alpha")?;
    add_worktree(&bare, &workspace.path("app-beta"), "beta")?;
    create_file(&workspace.path("app-alpha"), "initial.txt", "changed\n")?;

    Ok(workspace)
}

/// Scenario: several regular repositories, some dirty.
///
/// `repo-0` .. `repo-{count-1}`; every even-numbered repository has one
/// modified file and one untracked file.
pub fn create_many_repos_workspace(count: usize) -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;
    for i in 0..count {
        let repo = workspace.path(&format!("repo-{i}"));
        init_repo_with_initial_commit(&repo)?;
        if i % 2 == 0 {
            create_file(&repo, "initial.txt", "modified\n")?;
            create_file(&repo, "scratch.txt", "scratch\n")?;
        }
    }
    Ok(workspace)
}
