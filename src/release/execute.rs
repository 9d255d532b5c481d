//! Publish flow execution
//!
//! Drives one publish run end to end: the validation gate, then the release
//! and the PR status comment. The release and comment steps fail
//! independently; either failure is recorded on the outcome instead of
//! aborting the run, so neither result can mask the other.

use crate::comment::{format_status_comment, reconcile_status_comment};
use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::release::{ReleasePlan, plan_release, publish_release};
use crate::repo::GitRepo;
use crate::types::{ReleaseRecord, ValidationResult};
use crate::validate::run_validation;
use std::path::PathBuf;
use tracing::debug;

/// Result of one publish run
#[derive(Debug)]
pub struct PublishOutcome {
    /// Whether everything the run attempted succeeded
    pub success: bool,
    /// Outcome of the title-versus-history gate
    pub validation: ValidationResult,
    /// The release that was planned; `None` when the gate failed or the
    /// history resolves to a `none` bump
    pub plan: Option<ReleasePlan>,
    /// The release that was created on the forge
    pub release: Option<ReleaseRecord>,
    /// Error from the release step (non-fatal to the rest of the run)
    pub release_error: Option<String>,
    /// Error from the status comment reconciliation
    pub comment_error: Option<String>,
}

/// Run the publish flow for one PR
///
/// This performs the forge side effects in order:
/// 1. Validate the PR title against the commit history
/// 2. Plan and publish the release when the gate passes and a bump is due
/// 3. Reconcile the status comment on the PR
///
/// A failed release does not skip the comment, and a failed comment does
/// not discard the release; both land on the returned [`PublishOutcome`].
/// Only a git read failure errors the run as a whole.
pub async fn execute_publish(
    repo: &GitRepo,
    forge: &dyn ForgeService,
    pr_title: &str,
    pr_number: u64,
    branch: Option<&str>,
    default_branch: &str,
    assets: &[PathBuf],
) -> Result<PublishOutcome> {
    let validation = run_validation(repo, pr_title).await?;

    let mut outcome = PublishOutcome {
        success: validation.valid,
        validation,
        plan: None,
        release: None,
        release_error: None,
        comment_error: None,
    };

    if outcome.validation.valid {
        let branch = match branch {
            Some(name) => name.to_string(),
            None => repo.current_branch().await?,
        };

        match plan_release(repo, &branch, default_branch).await {
            Ok(plan) => {
                match publish_release(forge, &plan, assets).await {
                    Ok(release) => outcome.release = Some(release),
                    Err(e) => {
                        outcome.release_error = Some(e.to_string());
                        outcome.success = false;
                    }
                }
                outcome.plan = Some(plan);
            }
            // A `none` bump is a normal outcome of the run, not a failure
            Err(Error::NoReleaseNeeded) => {
                debug!("no release needed for PR #{pr_number}");
            }
            Err(e) => {
                outcome.release_error = Some(e.to_string());
                outcome.success = false;
            }
        }
    }

    let body = format_status_comment(&outcome.validation, outcome.release.as_ref());
    if let Err(e) = reconcile_status_comment(forge, pr_number, &body).await {
        outcome.comment_error = Some(e.to_string());
        outcome.success = false;
    }

    Ok(outcome)
}
