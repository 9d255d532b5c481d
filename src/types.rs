//! Core types for relgate

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Conventional-commit type keyword
///
/// The fixed set actually used by the validation rules. Anything outside it
/// parses as [`CommitKind::None`], which is meaningful data (no release
/// implication), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitKind {
    /// Bug fix (`fix:`)
    Fix,
    /// New feature (`feat:`)
    Feat,
    /// Maintenance chore (`chore:`)
    Chore,
    /// Documentation only (`docs:`)
    Docs,
    /// Refactoring without behavior change (`refactor:`)
    Refactor,
    /// Performance improvement (`perf:`)
    Perf,
    /// Test-only change (`test:`)
    Test,
    /// Build system change (`build:`)
    Build,
    /// CI configuration change (`ci:`)
    Ci,
    /// Not a recognized conventional-commit type
    None,
}

impl CommitKind {
    /// Map a type keyword to its kind; unknown keywords yield `None`
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "fix" => Self::Fix,
            "feat" => Self::Feat,
            "chore" => Self::Chore,
            "docs" => Self::Docs,
            "refactor" => Self::Refactor,
            "perf" => Self::Perf,
            "test" => Self::Test,
            "build" => Self::Build,
            "ci" => Self::Ci,
            _ => Self::None,
        }
    }

    /// The keyword as it appears in a commit subject
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::Feat => "feat",
            Self::Chore => "chore",
            Self::Docs => "docs",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::None => "none",
        }
    }
}

impl fmt::Display for CommitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified commit since the last release tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// First line of the commit message
    pub subject: String,
    /// Conventional-commit type, or `None` when unrecognized
    pub kind: CommitKind,
    /// True when the subject carries `!` before the colon or the body has a
    /// `BREAKING CHANGE:` footer
    pub breaking: bool,
    /// Parenthesized scope, when present
    pub scope: Option<String>,
}

/// Semantic-version component a release must increment
///
/// Totally ordered `none < patch < minor < major`. The order is defined by
/// [`BumpType::precedence`], not by variant declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    /// No release warranted
    None,
    /// Increment the patch component
    Patch,
    /// Increment the minor component, reset patch
    Minor,
    /// Increment the major component, reset minor and patch
    Major,
}

impl BumpType {
    /// Explicit precedence for ordering comparisons
    pub const fn precedence(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Patch => 1,
            Self::Minor => 2,
            Self::Major => 3,
        }
    }

    /// The bump name as used in messages and comments
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl Ord for BumpType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl PartialOrd for BumpType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the title and commit history agree
    pub valid: bool,
    /// Bump implied by commit history
    pub expected_bump: BumpType,
    /// Bump implied by the PR title
    pub title_bump: BumpType,
    /// Human-readable explanation with a success or failure glyph
    pub message: String,
}

/// Request to create a tagged release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRequest {
    /// Tag name (`vMAJOR.MINOR.PATCH`)
    pub tag: String,
    /// Human-readable release name
    pub name: String,
    /// Generated release notes body
    pub body: String,
    /// True when releasing from a non-default branch
    pub prerelease: bool,
}

/// A published release, as reported back by the forge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Forge-assigned release id
    pub id: u64,
    /// Tag name
    pub tag: String,
    /// Release name
    pub name: String,
    /// Release notes body
    pub body: String,
    /// Prerelease flag
    pub prerelease: bool,
    /// Web URL for the release page
    pub html_url: String,
    /// Assets uploaded to this release
    pub assets: Vec<ReleaseAsset>,
}

/// An asset uploaded to a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name
    pub name: String,
    /// Browser download URL
    pub download_url: String,
}

/// A comment on a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrComment {
    /// Comment ID
    pub id: u64,
    /// Login of the comment author
    pub author: String,
    /// Comment body text
    pub body: String,
}

/// Forge repository identity and endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// API base URL override (None for api.github.com)
    pub api_base: Option<String>,
}
