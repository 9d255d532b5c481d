//! Publish command - validate, cut a release, and report on the PR

use crate::cli::resolve_forge_config;
use crate::cli::style::{Stream, Stylize, arrow, check, cross, hyperlink_url};
use anstream::{eprintln, println};
use relgate::error::Result;
use relgate::forge::connect;
use relgate::release::{PublishOutcome, execute_publish};
use relgate::repo::GitRepo;
use std::path::{Path, PathBuf};

/// Run the publish command
///
/// Connects to the forge and hands the run to [`execute_publish`], which
/// keeps the release and comment outcomes independent: a failed release
/// still produces a comment, and a failed comment does not erase a
/// successful release from the output. The caller maps the returned bool
/// to the process exit code.
pub async fn run_publish(
    path: &Path,
    title: &str,
    pr: u64,
    repo_override: Option<&str>,
    branch: Option<&str>,
    default_branch: &str,
    assets: &[PathBuf],
) -> Result<bool> {
    let repo = GitRepo::open(path).await?;
    let config = resolve_forge_config(&repo, repo_override).await?;
    let forge = connect(config).await?;

    let outcome = execute_publish(
        &repo,
        forge.as_ref(),
        title,
        pr,
        branch,
        default_branch,
        assets,
    )
    .await?;

    report_outcome(&outcome, pr);
    Ok(outcome.success)
}

/// Print the outcome in the order the run executed it
fn report_outcome(outcome: &PublishOutcome, pr: u64) {
    if outcome.validation.valid {
        println!("{}", outcome.validation.message);
    } else {
        println!("{}", outcome.validation.message.warn().for_stdout());
    }

    if let Some(plan) = &outcome.plan {
        println!(
            "{} {} {} ({} bump{})",
            arrow(),
            "Releasing".emphasis(),
            plan.request.tag.accent(),
            plan.bump,
            if plan.request.prerelease {
                ", prerelease"
            } else {
                ""
            },
        );
    }

    if let Some(release) = &outcome.release {
        println!(
            "{} {} {} {}",
            check(),
            "Released".success(),
            release.tag.accent(),
            hyperlink_url(Stream::Stdout, &release.html_url).muted()
        );
        if !release.assets.is_empty() {
            println!(
                "  {} asset{} uploaded",
                release.assets.len().accent(),
                if release.assets.len() == 1 { "" } else { "s" }
            );
        }
    } else if let Some(err) = &outcome.release_error {
        eprintln!("{} Release failed: {}", cross(), err.error());
    } else if outcome.validation.valid {
        println!(
            "{}",
            "No release needed: commits resolve to a `none` bump.".muted()
        );
    }

    match &outcome.comment_error {
        None => println!("{} Updated status comment on PR #{}", arrow(), pr.accent()),
        Some(err) => eprintln!(
            "{} Comment update failed on PR #{}: {}",
            cross(),
            pr.accent().for_stderr(),
            err.warn()
        ),
    }
}
