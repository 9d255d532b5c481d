//! Release execution
//!
//! Turns a validated repository state into a published release. Planning is
//! read-only; publishing performs the forge side effects.

use crate::conventional::resolve_bump;
use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::release::{build_release_notes, next_version};
use crate::repo::GitRepo;
use crate::types::{BumpType, ReleaseRecord, ReleaseRequest};
use crate::validate::collect_history;
use chrono::Utc;
use semver::Version;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A computed release, ready to publish
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    /// Version being released
    pub version: Version,
    /// Bump that produced it
    pub bump: BumpType,
    /// Release creation request (tag, name, notes, prerelease flag)
    pub request: ReleaseRequest,
}

/// Compute the next release from the repository state
///
/// The baseline is the most recent version tag, or `0.0.0` when none exists.
/// Refuses with [`Error::NoReleaseNeeded`] when the history resolves to a
/// `none` bump. The prerelease flag is set when `branch` is not the default
/// branch.
pub async fn plan_release(
    repo: &GitRepo,
    branch: &str,
    default_branch: &str,
) -> Result<ReleasePlan> {
    let history = collect_history(repo).await?;
    let bump = resolve_bump(&history.records);
    let baseline = history
        .tag
        .as_ref()
        .map_or_else(|| Version::new(0, 0, 0), |t| t.version.clone());

    let version = next_version(&baseline, bump)?;
    let tag = format!("v{version}");
    let prerelease = branch != default_branch;
    let body = build_release_notes(&history.records, &version, Utc::now().date_naive());

    debug!("planned release {tag} from {branch} (prerelease: {prerelease})");
    Ok(ReleasePlan {
        version,
        bump,
        request: ReleaseRequest {
            tag: tag.clone(),
            name: tag,
            body,
            prerelease,
        },
    })
}

/// Create the tagged release and upload the given asset files
///
/// Any failure is fatal to this step and carries the target tag and
/// computed version so the run can be retried manually. Nothing is retried
/// here, so a tag collision surfaces instead of silently shifting to a
/// different version.
pub async fn publish_release(
    forge: &dyn ForgeService,
    plan: &ReleasePlan,
    assets: &[PathBuf],
) -> Result<ReleaseRecord> {
    let target = format!("tag {} (version {})", plan.request.tag, plan.version);

    let mut release = forge
        .create_release(&plan.request)
        .await
        .map_err(|e| Error::Api {
            op: "create release",
            target: target.clone(),
            reason: e.to_string(),
        })?;
    debug!("created release {} at {}", release.tag, release.html_url);

    for path in assets {
        let uploaded = upload_asset(forge, release.id, path, &target).await?;
        release.assets.push(uploaded);
    }

    Ok(release)
}

async fn upload_asset(
    forge: &dyn ForgeService,
    release_id: u64,
    path: &Path,
    target: &str,
) -> Result<crate::types::ReleaseAsset> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| Error::Parse(format!("asset path has no file name: {}", path.display())))?;

    let content = tokio::fs::read(path).await.map_err(|e| Error::Api {
        op: "read asset",
        target: format!("{} for {target}", path.display()),
        reason: e.to_string(),
    })?;

    debug!("uploading asset {name} ({} bytes)", content.len());
    forge
        .upload_release_asset(release_id, &name, content)
        .await
        .map_err(|e| Error::Api {
            op: "upload asset",
            target: format!("{name} to {target}"),
            reason: e.to_string(),
        })
}
