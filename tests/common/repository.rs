//! Git repository management and setup utilities
//!
//! Provides functions for creating test workspaces holding regular
//! repositories, bare repositories and linked worktrees, plus a way to run
//! the binary against an isolated config directory.

#![allow(dead_code)]

use repo_navigator::core::error::{NavigatorError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary workspace. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    /// Directory the test repositories are created in.
    pub root: PathBuf,
    /// Used as `XDG_CONFIG_HOME` for CLI runs.
    pub config_home: PathBuf,
}

impl TestWorkspace {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `name` inside the workspace root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// The binary with its config directory redirected into the workspace.
    pub fn navigator(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_repo-navigator"));
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("NO_COLOR", "1")
            .current_dir(&self.root);
        cmd
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_home.join("repo-navigator").join("config.json")
    }
}

/// Creates an empty workspace with separate repository and config directories.
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("workspace");
    let config_home = temp_dir.path().join("config");
    fs::create_dir_all(&root)?;
    fs::create_dir_all(&config_home)?;

    Ok(TestWorkspace {
        temp_dir,
        root,
        config_home,
    })
}

/// Runs git in `path` and fails on a non-zero exit.
pub fn git(path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(path).output()?;
    if !output.status.success() {
        return Err(NavigatorError::Io(std::io::Error::other(format!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        ))));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Initializes a repository at `path`, creating the directory if needed.
///
/// Sets up basic git configuration to avoid user prompts.
pub fn init_repo(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    git(path, &["init", "--quiet"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    Ok(())
}

/// Initializes a repository at `path` with one committed file.
pub fn init_repo_with_initial_commit(path: &Path) -> Result<()> {
    init_repo(path)?;
    create_file(path, "initial.txt", "initial content\n")?;
    git_add(path, "initial.txt")?;
    git_commit(path, "Initial commit")?;
    Ok(())
}

/// Creates a file with specified content in the repository.
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Adds a file to the git index ("." for all files).
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

/// Creates a git commit with the specified message.
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "--quiet", "-m", message])?;
    Ok(())
}

/// Creates a bare repository at `bare_path` cloned from a throwaway seed
/// repository, so it has a commit to branch worktrees from.
pub fn init_bare_repo(bare_path: &Path) -> Result<()> {
    let seed = bare_path.with_extension("seed");
    init_repo_with_initial_commit(&seed)?;
    let parent = bare_path.parent().unwrap_or(Path::new("."));
    git(
        parent,
        &[
            "clone",
            "--quiet",
            "--bare",
            &seed.to_string_lossy(),
            &bare_path.to_string_lossy(),
        ],
    )?;
    fs::remove_dir_all(&seed)?;
    Ok(())
}

/// Adds a linked worktree at `worktree_path` on a new branch `branch`.
pub fn add_worktree(repo_path: &Path, worktree_path: &Path, branch: &str) -> Result<()> {
    git(
        repo_path,
        &[
            "worktree",
            "add",
            "--quiet",
            "-b",
            branch,
            &worktree_path.to_string_lossy(),
        ],
    )?;
    git(worktree_path, &["config", "user.name", "Test User"])?;
    git(worktree_path, &["config", "user.email", "test@example.com"])?;
    Ok(())
}
