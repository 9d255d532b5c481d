//! Forge services for release and PR comment operations
//!
//! Provides a unified interface over the GitHub API so the release and
//! comment logic can be tested against an in-memory double.

mod detection;
mod github;

pub use detection::{parse_remote_url, parse_repo_override};
pub use github::GitHubForge;

use crate::auth::get_github_auth;
use crate::error::Result;
use crate::types::{ForgeConfig, PrComment, ReleaseAsset, ReleaseRecord, ReleaseRequest};
use async_trait::async_trait;
use tracing::debug;

/// Forge service trait for release and comment operations
///
/// Abstracts the HTTP layer so validation and publishing logic can run
/// against a mock in tests.
#[async_trait]
pub trait ForgeService: Send + Sync {
    /// Create a tagged release
    async fn create_release(&self, request: &ReleaseRequest) -> Result<ReleaseRecord>;

    /// Upload a file as an asset of an existing release
    async fn upload_release_asset(
        &self,
        release_id: u64,
        name: &str,
        content: Vec<u8>,
    ) -> Result<ReleaseAsset>;

    /// List comments on a PR, in listing order
    async fn list_pr_comments(&self, pr_number: u64) -> Result<Vec<PrComment>>;

    /// Create a comment on a PR, returning its id
    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<u64>;

    /// Update an existing comment in place
    async fn update_pr_comment(&self, comment_id: u64, body: &str) -> Result<()>;

    /// Get the forge configuration
    fn config(&self) -> &ForgeConfig;
}

/// Create a forge service from configuration
///
/// Handles authentication and client construction.
pub async fn connect(config: ForgeConfig) -> Result<Box<dyn ForgeService>> {
    let auth = get_github_auth().await?;
    debug!(
        "authenticated for {}/{} via {:?}",
        config.owner, config.repo, auth.source
    );
    Ok(Box::new(GitHubForge::new(&auth.token, config)?))
}
