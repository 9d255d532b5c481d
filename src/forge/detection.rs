//! Repository detection from remote URLs

use crate::error::{Error, Result};
use crate::types::ForgeConfig;
use regex::Regex;

/// Parse repository info (owner/repo) from a git remote URL
///
/// Hosts other than github.com are treated as self-hosted instances with
/// their API under `/api/v3`.
pub fn parse_remote_url(url: &str) -> Result<ForgeConfig> {
    let hostname = extract_hostname(url)
        .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    // SSH format: git@host:owner/repo.git
    // HTTPS format: https://host/owner/repo.git
    let re_ssh = Regex::new(r"git@[^:]+:(.+?)(?:\.git)?$").unwrap();
    let re_https = Regex::new(r"https?://[^/]+/(.+?)(?:\.git)?$").unwrap();

    let path = re_ssh
        .captures(url)
        .or_else(|| re_https.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() < 2 {
        return Err(Error::Parse(format!("invalid repo path: {path}")));
    }

    let repo = (*parts.last().unwrap()).to_string();
    let owner = parts[..parts.len() - 1].join("/");

    let api_base = if hostname == "github.com" {
        None
    } else {
        Some(format!("https://{hostname}/api/v3"))
    };

    Ok(ForgeConfig {
        owner,
        repo,
        api_base,
    })
}

/// Parse an explicit `owner/name` repository override, targeting github.com
pub fn parse_repo_override(spec: &str) -> Result<ForgeConfig> {
    match spec.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok(ForgeConfig {
                owner: owner.to_string(),
                repo: repo.to_string(),
                api_base: None,
            })
        }
        _ => Err(Error::Parse(format!(
            "invalid repository spec `{spec}`: expected OWNER/NAME"
        ))),
    }
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if url.starts_with("git@") {
        return url
            .strip_prefix("git@")
            .and_then(|s| s.split(':').next())
            .map(ToString::to_string);
    }

    // HTTPS format
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
