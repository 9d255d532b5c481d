//! CLI commands
//!
//! Command implementations for the `relgate` binary.

mod publish;
pub mod style;
mod validate;

pub use publish::run_publish;
pub use validate::run_validate;

use relgate::error::Result;
use relgate::forge::{parse_remote_url, parse_repo_override};
use relgate::repo::GitRepo;
use relgate::types::ForgeConfig;

/// Canonical API endpoint for github.com
const PUBLIC_API_URL: &str = "https://api.github.com";

/// Resolve the target repository, from `--repo OWNER/NAME` when given,
/// otherwise from the `origin` remote URL
///
/// `GITHUB_API_URL` overrides the derived API base. GitHub Actions always
/// sets it; the public endpoint is the client default, not an override.
pub(crate) async fn resolve_forge_config(
    repo: &GitRepo,
    repo_override: Option<&str>,
) -> Result<ForgeConfig> {
    let mut config = match repo_override {
        Some(spec) => parse_repo_override(spec)?,
        None => {
            let url = repo.remote_url("origin").await?;
            parse_remote_url(&url)?
        }
    };

    if let Ok(url) = std::env::var("GITHUB_API_URL") {
        let url = url.trim_end_matches('/');
        if !url.is_empty() && url != PUBLIC_API_URL {
            config.api_base = Some(url.to_string());
        }
    }

    Ok(config)
}
