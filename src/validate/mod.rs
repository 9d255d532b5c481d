//! Validation engine
//!
//! Compares the bump implied by commit history against the bump implied by
//! the PR title. The comparison itself is a pure function of (commit set,
//! title); git access happens once up front in [`collect_history`].

use crate::conventional::{classify_title, parse_commit, resolve_bump};
use crate::error::Result;
use crate::repo::{GitRepo, VersionTag};
use crate::types::{CommitRecord, ValidationResult};
use tracing::debug;

/// Glyph in messages for a passing check
pub const PASS_GLYPH: &str = "✅";

/// Glyph in messages for a failing check
pub const FAIL_GLYPH: &str = "❌";

/// Classified commit history together with the tag it starts from
#[derive(Debug, Clone)]
pub struct CommitHistory {
    /// Most recent semantic-version tag reachable from HEAD, if any
    pub tag: Option<VersionTag>,
    /// Commits after the tag, oldest first, classified
    pub records: Vec<CommitRecord>,
}

/// Read and classify everything validation and publishing need from git
///
/// A repository with no commits yet yields an empty history rather than an
/// error; only an unreadable repository fails.
pub async fn collect_history(repo: &GitRepo) -> Result<CommitHistory> {
    if !repo.has_head().await? {
        debug!("repository has no commits yet");
        return Ok(CommitHistory {
            tag: None,
            records: Vec::new(),
        });
    }

    let tag = repo.latest_version_tag().await?;
    let raw = repo
        .commits_since(tag.as_ref().map(|t| t.name.as_str()))
        .await?;
    let records = raw
        .iter()
        .map(|c| parse_commit(&c.subject, &c.body))
        .collect();

    Ok(CommitHistory { tag, records })
}

/// Compare a commit set against a PR title
///
/// Pure: no git or network access. `valid` holds exactly when both sides
/// resolve to the same bump, including both resolving to `none`.
pub fn validate_title(records: &[CommitRecord], pr_title: &str) -> ValidationResult {
    let expected_bump = resolve_bump(records);
    let title_bump = classify_title(pr_title);
    let valid = expected_bump == title_bump;

    let message = if valid {
        format!(
            "{PASS_GLYPH} Version bump check passed: commit history and PR title agree on `{expected_bump}`."
        )
    } else {
        format!(
            "{FAIL_GLYPH} Version bump mismatch: commit history implies `{expected_bump}` but the PR title implies `{title_bump}`."
        )
    };

    ValidationResult {
        valid,
        expected_bump,
        title_bump,
        message,
    }
}

/// Run one validation against the repository at its current HEAD
pub async fn run_validation(repo: &GitRepo, pr_title: &str) -> Result<ValidationResult> {
    let history = collect_history(repo).await?;
    let result = validate_title(&history.records, pr_title);
    debug!(
        "validation: expected {} title {} valid {}",
        result.expected_bump, result.title_bump, result.valid
    );
    Ok(result)
}
