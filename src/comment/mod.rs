//! PR status comment reconciliation
//!
//! The status comment is identified by a stable machine-readable marker
//! embedded in its body, never by free-text matching. Reruns update the
//! existing comment in place, so a PR carries at most one status comment no
//! matter how many times validation runs.

use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::types::{ReleaseRecord, ValidationResult};
use std::fmt::Write;
use tracing::{debug, warn};

/// Stable marker prefix; matching is on this prefix, not the payload
pub const COMMENT_MARKER: &str = "<!-- relgate:status";

/// Render the status comment body for a validation outcome
///
/// When a release was published in the same run, the comment links the new
/// tag to its release page.
pub fn format_status_comment(
    result: &ValidationResult,
    release: Option<&ReleaseRecord>,
) -> String {
    let data = serde_json::json!({
        "schema": 1,
        "valid": result.valid,
        "expected": result.expected_bump,
        "title": result.title_bump,
        "released": release.map(|r| r.tag.clone()),
    });

    let mut body = format!("{COMMENT_MARKER} {data} -->\n");
    body.push_str("### Release check\n\n");
    body.push_str(&result.message);
    body.push('\n');

    if !result.valid {
        body.push_str(
            "\nAlign the PR title with the commits: retitle the PR, or amend/squash \
             the commits, so both imply the same bump.\n",
        );
    }

    if let Some(release) = release {
        let _ = write!(
            body,
            "\n🚀 Released as [{}]({}).\n",
            release.tag, release.html_url
        );
    }

    body.push_str("\n---\nThis check is maintained by [relgate](https://github.com/relgate/relgate).");
    body
}

/// Find-or-update-else-create the status comment on a PR
///
/// Updates the first listed comment containing the marker; any further
/// matching comments (a recovered inconsistency) are left untouched rather
/// than deleted. Returns the id of the comment written.
pub async fn reconcile_status_comment(
    forge: &dyn ForgeService,
    pr_number: u64,
    body: &str,
) -> Result<u64> {
    let comments = forge
        .list_pr_comments(pr_number)
        .await
        .map_err(|e| Error::Api {
            op: "list comments",
            target: format!("PR #{pr_number}"),
            reason: e.to_string(),
        })?;

    let mut matches = comments.iter().filter(|c| c.body.contains(COMMENT_MARKER));
    let existing = matches.next();
    let extra = matches.count();
    if extra > 0 {
        warn!("PR #{pr_number} has {extra} extra status comment(s); updating the first");
    }

    if let Some(comment) = existing {
        debug!("updating status comment {} on PR #{pr_number}", comment.id);
        forge
            .update_pr_comment(comment.id, body)
            .await
            .map_err(|e| Error::Api {
                op: "update comment",
                target: format!("comment {} on PR #{pr_number}", comment.id),
                reason: e.to_string(),
            })?;
        Ok(comment.id)
    } else {
        debug!("creating status comment on PR #{pr_number}");
        forge
            .create_pr_comment(pr_number, body)
            .await
            .map_err(|e| Error::Api {
                op: "create comment",
                target: format!("PR #{pr_number}"),
                reason: e.to_string(),
            })
    }
}
