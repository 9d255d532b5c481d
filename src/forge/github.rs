//! GitHub forge implementation
//!
//! Release and comment operations go through octocrab; asset uploads go
//! through a plain reqwest client because they target the separate uploads
//! endpoint with a raw binary body.

use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::types::{ForgeConfig, PrComment, ReleaseAsset, ReleaseRecord, ReleaseRequest};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Uploads endpoint for github.com; self-hosted instances derive theirs
/// from the API base
const PUBLIC_UPLOADS_URL: &str = "https://uploads.github.com";

/// GitHub forge using octocrab
pub struct GitHubForge {
    client: Octocrab,
    http: Client,
    token: String,
    config: ForgeConfig,
}

#[derive(Deserialize)]
struct UploadedAsset {
    name: String,
    browser_download_url: String,
}

impl GitHubForge {
    /// Create a new GitHub forge service
    pub fn new(token: &str, config: ForgeConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref base) = config.api_base {
            builder = builder
                .base_uri(base)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http = Client::builder()
            .user_agent(concat!("relgate/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            http,
            token: token.to_string(),
            config,
        })
    }

    /// Base URL for asset uploads
    ///
    /// github.com serves uploads from a dedicated host. A self-hosted API
    /// base of the form `https://host/api/v3` maps to `https://host/api/uploads`;
    /// any other override (such as a test server) is used as-is.
    fn uploads_base(&self) -> String {
        match &self.config.api_base {
            None => PUBLIC_UPLOADS_URL.to_string(),
            Some(base) => {
                let base = base.trim_end_matches('/');
                base.strip_suffix("/api/v3")
                    .map_or_else(|| base.to_string(), |root| format!("{root}/api/uploads"))
            }
        }
    }
}

#[async_trait]
impl ForgeService for GitHubForge {
    async fn create_release(&self, request: &ReleaseRequest) -> Result<ReleaseRecord> {
        let release = self
            .client
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .create(&request.tag)
            .name(&request.name)
            .body(&request.body)
            .prerelease(request.prerelease)
            .send()
            .await?;

        Ok(ReleaseRecord {
            id: release.id.0,
            tag: release.tag_name,
            name: release.name.unwrap_or_default(),
            body: release.body.unwrap_or_default(),
            prerelease: release.prerelease,
            html_url: release.html_url.to_string(),
            assets: release
                .assets
                .into_iter()
                .map(|a| ReleaseAsset {
                    name: a.name,
                    download_url: a.browser_download_url.to_string(),
                })
                .collect(),
        })
    }

    async fn upload_release_asset(
        &self,
        release_id: u64,
        name: &str,
        content: Vec<u8>,
    ) -> Result<ReleaseAsset> {
        let url = format!(
            "{}/repos/{}/{}/releases/{release_id}/assets",
            self.uploads_base(),
            self.config.owner,
            self.config.repo
        );

        let uploaded: UploadedAsset = self
            .http
            .post(&url)
            .query(&[("name", name)])
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(content)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .json()
            .await?;

        Ok(ReleaseAsset {
            name: uploaded.name,
            download_url: uploaded.browser_download_url,
        })
    }

    async fn list_pr_comments(&self, pr_number: u64) -> Result<Vec<PrComment>> {
        let comments = self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .list_comments(pr_number)
            .send()
            .await?;

        Ok(comments
            .items
            .into_iter()
            .map(|c| PrComment {
                id: c.id.0,
                author: c.user.login,
                body: c.body.unwrap_or_default(),
            })
            .collect())
    }

    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<u64> {
        let comment = self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(pr_number, body)
            .await?;
        Ok(comment.id.0)
    }

    async fn update_pr_comment(&self, comment_id: u64, body: &str) -> Result<()> {
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .update_comment(octocrab::models::CommentId(comment_id), body)
            .await?;
        Ok(())
    }

    fn config(&self) -> &ForgeConfig {
        &self.config
    }
}
