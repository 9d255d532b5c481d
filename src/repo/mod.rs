//! Git repository queries
//!
//! All access goes through the system git binary with an explicit `-C <path>`
//! working directory, so nothing here mutates process-wide state and scratch
//! repositories can be queried concurrently.

use crate::error::{Error, Result};
use semver::Version;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// A raw commit as read from `git log`, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    /// First line of the commit message
    pub subject: String,
    /// Remaining message body (possibly empty)
    pub body: String,
}

/// A semantic-version tag reachable from HEAD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    /// Tag name as it exists in the repository (e.g. "v1.2.3")
    pub name: String,
    /// Parsed version
    pub version: Version,
}

/// Read-only handle on a git working tree
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`
    ///
    /// Fails with [`Error::NotARepository`] when the path is not inside a
    /// git working tree.
    pub async fn open(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not a git repository") {
                return Err(Error::NotARepository(path.display().to_string()));
            }
            return Err(Error::Git(format!(
                "failed to open repository at {}: {}",
                path.display(),
                stderr.trim()
            )));
        }

        let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
        debug!("opened repository at {}", root.display());
        Ok(Self { root })
    }

    /// Root of the working tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether HEAD resolves to a commit (false for a freshly-initialized
    /// repository with no commits)
    pub async fn has_head(&self) -> Result<bool> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(["rev-parse", "--verify", "--quiet", "HEAD"])
            .output()
            .await?;
        Ok(output.status.success())
    }

    /// Highest semantic-version tag reachable from HEAD, if any
    ///
    /// Only `v`-prefixed tags that parse as semver are considered. No tag is
    /// not an error; the caller treats it as an implicit `v0.0.0` baseline.
    pub async fn latest_version_tag(&self) -> Result<Option<VersionTag>> {
        let out = self
            .run(&["tag", "--list", "--merged", "HEAD", "v*"])
            .await?;

        let best = out
            .lines()
            .filter_map(|name| {
                let version = Version::parse(name.strip_prefix('v')?).ok()?;
                Some(VersionTag {
                    name: name.to_string(),
                    version,
                })
            })
            .max_by(|a, b| a.version.cmp(&b.version));

        match &best {
            Some(tag) => debug!("latest version tag: {}", tag.name),
            None => debug!("no version tag reachable from HEAD"),
        }
        Ok(best)
    }

    /// Commits strictly after `tag` up to HEAD, oldest first
    ///
    /// With no tag, the full history is returned.
    pub async fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>> {
        let range = tag.map_or_else(|| "HEAD".to_string(), |t| format!("{t}..HEAD"));
        let out = self
            .run(&["log", "--reverse", "--format=%s%x1f%b%x1e", &range])
            .await?;

        let commits = parse_log_output(&out);
        debug!("{} commit(s) in range {range}", commits.len());
        Ok(commits)
    }

    /// URL of the named remote
    pub async fn remote_url(&self, remote: &str) -> Result<String> {
        let out = self.run(&["remote", "get-url", remote]).await?;
        Ok(out.trim().to_string())
    }

    /// Name of the currently checked-out branch ("HEAD" when detached)
    pub async fn current_branch(&self) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .output()
            .await?;

        if !output.status.success() {
            return Ok("HEAD".to_string());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        debug!("git -C {} {}", self.root.display(), args.join(" "));
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(format!(
                "git {}: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Split `%s%x1f%b%x1e`-formatted log output into raw commits
fn parse_log_output(out: &str) -> Vec<RawCommit> {
    out.split('\x1e')
        .map(|chunk| chunk.trim_start_matches('\n'))
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let (subject, body) = chunk.split_once('\x1f').unwrap_or((chunk, ""));
            RawCommit {
                subject: subject.to_string(),
                body: body.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_output_single() {
        let out = "fix: squash bug\x1f\x1e\n";
        let commits = parse_log_output(out);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "fix: squash bug");
        assert_eq!(commits[0].body, "");
    }

    #[test]
    fn test_parse_log_output_with_body() {
        let out = "fix: rework\x1fBREAKING CHANGE: new errors\n\x1e\n";
        let commits = parse_log_output(out);
        assert_eq!(commits.len(), 1);
        assert!(commits[0].body.starts_with("BREAKING CHANGE:"));
    }

    #[test]
    fn test_parse_log_output_multiple() {
        let out = "feat: one\x1f\x1e\nfix: two\x1fdetails here\n\x1e\n";
        let commits = parse_log_output(out);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].subject, "feat: one");
        assert_eq!(commits[1].subject, "fix: two");
        assert_eq!(commits[1].body.trim(), "details here");
    }

    #[test]
    fn test_parse_log_output_empty() {
        assert!(parse_log_output("").is_empty());
        assert!(parse_log_output("\n").is_empty());
    }
}
