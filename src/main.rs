//! relgate - Semver gate for conventional-commit PRs
//!
//! CLI binary for validating PR titles against commit history and
//! publishing tagged releases.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "relgate")]
#[command(about = "Semver gate for conventional-commit PRs - validate titles, publish releases")]
#[command(version)]
struct Cli {
    /// Path to git repository (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Target repository as OWNER/NAME (defaults to the origin remote)
    #[arg(long, global = true, value_name = "OWNER/NAME")]
    repo: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a PR title agrees with the commit history
    Validate {
        /// PR title to validate
        #[arg(long)]
        title: String,

        /// PR number to post the status comment on
        #[arg(long)]
        pr: Option<u64>,
    },

    /// Validate, publish the next release, and update the PR status comment
    Publish {
        /// PR title to validate
        #[arg(long)]
        title: String,

        /// PR number to reconcile the status comment on
        #[arg(long)]
        pr: u64,

        /// Branch being released (defaults to the checked-out branch)
        #[arg(long)]
        branch: Option<String>,

        /// Default branch; releasing from any other branch marks the
        /// release as a prerelease
        #[arg(long, default_value = "main")]
        default_branch: String,

        /// File to upload as a release asset (repeatable)
        #[arg(long = "asset", value_name = "FILE")]
        assets: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let ok = match cli.command {
        Commands::Validate { title, pr } => {
            cli::run_validate(&path, &title, pr, cli.repo.as_deref()).await?
        }
        Commands::Publish {
            title,
            pr,
            branch,
            default_branch,
            assets,
        } => {
            cli::run_publish(
                &path,
                &title,
                pr,
                cli.repo.as_deref(),
                branch.as_deref(),
                &default_branch,
                &assets,
            )
            .await?
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
