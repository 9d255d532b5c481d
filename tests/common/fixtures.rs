//! Test data factories and scratch repositories for relgate types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use relgate::types::{CommitKind, CommitRecord, ForgeConfig, PrComment, ReleaseRecord};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// A throwaway git repository for history-driven tests
///
/// The directory is deleted when the value is dropped.
pub struct ScratchRepo {
    dir: TempDir,
}

impl ScratchRepo {
    /// Create an empty repository with `main` checked out
    pub fn init() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Self { dir };
        repo.git(&["init", "--initial-branch=main"]);
        repo.git(&["config", "user.name", "Test Author"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "tag.gpgsign", "false"]);
        repo
    }

    /// Path to the repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty commit with the given subject
    pub fn commit(&self, subject: &str) {
        self.git(&["commit", "--allow-empty", "-m", subject]);
    }

    /// Create an empty commit with a subject and a body paragraph
    pub fn commit_with_body(&self, subject: &str, body: &str) {
        self.git(&["commit", "--allow-empty", "-m", subject, "-m", body]);
    }

    /// Tag the current HEAD
    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    /// Create and switch to a new branch at HEAD
    pub fn branch(&self, name: &str) {
        self.git(&["checkout", "-b", name]);
    }

    /// Add a remote
    pub fn add_remote(&self, name: &str, url: &str) {
        self.git(&["remote", "add", name, url]);
    }

    fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .arg("-C")
            .arg(self.dir.path())
            .args(args)
            .output()
            .expect("run git");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Create a commit record with explicit fields
pub fn make_record(subject: &str, kind: CommitKind, breaking: bool) -> CommitRecord {
    CommitRecord {
        subject: subject.to_string(),
        kind,
        breaking,
        scope: None,
    }
}

/// Create a PR comment
pub fn make_pr_comment(id: u64, body: &str) -> PrComment {
    PrComment {
        id,
        author: "relgate[bot]".to_string(),
        body: body.to_string(),
    }
}

/// Create a release record as the forge would report it
pub fn make_release(id: u64, tag: &str) -> ReleaseRecord {
    ReleaseRecord {
        id,
        tag: tag.to_string(),
        name: tag.to_string(),
        body: String::new(),
        prerelease: false,
        html_url: format!("https://github.com/testowner/testrepo/releases/tag/{tag}"),
        assets: vec![],
    }
}

/// Create a GitHub forge config
pub fn forge_config() -> ForgeConfig {
    ForgeConfig {
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        api_base: None,
    }
}
