use clap::{Parser, Subcommand};
use repo_navigator::commands::*;
use repo_navigator::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repo-navigator")]
#[command(about = "Browse directories and track the status of many git repositories")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a directory, marking repositories and their status
    Explore {
        /// Directory to explore (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Register a repository
    Add {
        /// Path of the repository
        path: PathBuf,
    },
    /// Unregister a repository by index (as shown by `status`) or path
    Remove {
        /// 1-based index or repository path
        target: String,
    },
    /// Discover and register repositories below a directory
    Scan {
        /// Directory to scan
        root: PathBuf,
        /// Maximum directory depth (defaults to the configured scan depth)
        #[arg(short, long)]
        depth: Option<usize>,
    },
    /// Refresh and show the status of every registered repository
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Explore { path } => execute_explore(path),
        Commands::Add { path } => execute_add(&path),
        Commands::Remove { target } => execute_remove(&target),
        Commands::Scan { root, depth } => execute_scan(&root, depth),
        Commands::Status => execute_status(),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
