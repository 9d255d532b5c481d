//! Error types for relgate

use thiserror::Error;

/// Unified error type for validation, publishing, and reconciliation
#[derive(Error, Debug)]
pub enum Error {
    /// Path is not inside a git working tree
    #[error("not a git repository: {0}")]
    NotARepository(String),

    /// A git subprocess failed or could not be spawned
    #[error("git command failed: {0}")]
    Git(String),

    /// GitHub API failure without a more specific operation context
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Authentication could not be resolved or was rejected
    #[error("Authentication error: {0}")]
    Auth(String),

    /// An API side effect failed; carries the operation and its target
    /// identifiers so the run can be retried manually
    #[error("{op} failed for {target}: {reason}")]
    Api {
        /// Operation name (e.g. "create release", "update comment")
        op: &'static str,
        /// Target identifiers (tag + version, PR number, comment id)
        target: String,
        /// Underlying failure
        reason: String,
    },

    /// The resolved bump is `none`; publishing is refused rather than
    /// cutting a no-op release
    #[error("no release needed: commit history resolves to a `none` bump")]
    NoReleaseNeeded,

    /// Malformed structural input (remote URL, `--repo` override, tag name)
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O failure reading assets or spawning subprocesses
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for relgate operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}
