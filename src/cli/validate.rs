//! Validate command - check a PR title against the commit history

use crate::cli::resolve_forge_config;
use crate::cli::style::{Stylize, arrow};
use anstream::println;
use relgate::comment::{format_status_comment, reconcile_status_comment};
use relgate::error::Result;
use relgate::forge::connect;
use relgate::repo::GitRepo;
use relgate::validate::run_validation;
use std::path::Path;

/// Run the validate command
///
/// Returns whether the title and commit history agree; the caller maps that
/// to the process exit code. With `--pr`, the outcome is also posted as a
/// status comment.
pub async fn run_validate(
    path: &Path,
    title: &str,
    pr: Option<u64>,
    repo_override: Option<&str>,
) -> Result<bool> {
    let repo = GitRepo::open(path).await?;
    let result = run_validation(&repo, title).await?;

    if result.valid {
        println!("{}", result.message);
    } else {
        println!("{}", result.message.warn().for_stdout());
        println!(
            "{}",
            "Retitle the PR or amend the commits so both imply the same bump.".muted()
        );
    }

    if let Some(pr) = pr {
        let config = resolve_forge_config(&repo, repo_override).await?;
        let forge = connect(config).await?;
        let body = format_status_comment(&result, None);
        reconcile_status_comment(forge.as_ref(), pr, &body).await?;
        println!("{} Updated status comment on PR #{}", arrow(), pr.accent());
    }

    Ok(result.valid)
}
