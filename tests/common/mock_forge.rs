//! Mock forge service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use relgate::error::{Error, Result};
use relgate::forge::ForgeService;
use relgate::types::{ForgeConfig, PrComment, ReleaseAsset, ReleaseRecord, ReleaseRequest};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `upload_release_asset`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAssetCall {
    pub release_id: u64,
    pub name: String,
    pub content: Vec<u8>,
}

/// Call record for `create_pr_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentCall {
    pub pr_number: u64,
    pub body: String,
}

/// Call record for `update_pr_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCommentCall {
    pub comment_id: u64,
    pub body: String,
}

/// Simple mock forge service for testing
///
/// This manually implements `ForgeService` rather than using mockall,
/// because mockall has issues with methods returning references.
///
/// Features:
/// - Auto-incrementing release and comment ids
/// - Stateful comment store, so reconciliation runs against what earlier
///   calls actually wrote
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockForgeService {
    config: ForgeConfig,
    next_release_id: AtomicU64,
    next_comment_id: AtomicU64,
    comments: Mutex<HashMap<u64, Vec<PrComment>>>,
    // Call tracking
    created_releases: Mutex<Vec<ReleaseRequest>>,
    upload_calls: Mutex<Vec<UploadAssetCall>>,
    create_comment_calls: Mutex<Vec<CreateCommentCall>>,
    update_comment_calls: Mutex<Vec<UpdateCommentCall>>,
    list_comments_calls: Mutex<Vec<u64>>,
    // Error injection
    error_on_create_release: Mutex<Option<String>>,
    error_on_upload_asset: Mutex<Option<String>>,
    error_on_list_comments: Mutex<Option<String>>,
    error_on_create_comment: Mutex<Option<String>>,
    error_on_update_comment: Mutex<Option<String>>,
}

impl MockForgeService {
    /// Create a new mock with the given config
    pub fn with_config(config: ForgeConfig) -> Self {
        Self {
            config,
            next_release_id: AtomicU64::new(1),
            next_comment_id: AtomicU64::new(1),
            comments: Mutex::new(HashMap::new()),
            created_releases: Mutex::new(Vec::new()),
            upload_calls: Mutex::new(Vec::new()),
            create_comment_calls: Mutex::new(Vec::new()),
            update_comment_calls: Mutex::new(Vec::new()),
            list_comments_calls: Mutex::new(Vec::new()),
            error_on_create_release: Mutex::new(None),
            error_on_upload_asset: Mutex::new(None),
            error_on_list_comments: Mutex::new(None),
            error_on_create_comment: Mutex::new(None),
            error_on_update_comment: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `create_release` return an error
    pub fn fail_create_release(&self, msg: &str) {
        *self.error_on_create_release.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `upload_release_asset` return an error
    pub fn fail_upload_asset(&self, msg: &str) {
        *self.error_on_upload_asset.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_pr_comments` return an error
    pub fn fail_list_comments(&self, msg: &str) {
        *self.error_on_list_comments.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pr_comment` return an error
    pub fn fail_create_comment(&self, msg: &str) {
        *self.error_on_create_comment.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `update_pr_comment` return an error
    pub fn fail_update_comment(&self, msg: &str) {
        *self.error_on_update_comment.lock().unwrap() = Some(msg.to_string());
    }

    /// Seed the comment store for a PR
    pub fn set_comments(&self, pr_number: u64, comments: Vec<PrComment>) {
        let highest = comments.iter().map(|c| c.id).max().unwrap_or(0);
        if highest >= self.next_comment_id.load(Ordering::SeqCst) {
            self.next_comment_id.store(highest + 1, Ordering::SeqCst);
        }
        self.comments.lock().unwrap().insert(pr_number, comments);
    }

    // === Call verification methods ===

    /// Get the comment store for a PR, in listing order
    pub fn get_comments(&self, pr_number: u64) -> Vec<PrComment> {
        self.comments
            .lock()
            .unwrap()
            .get(&pr_number)
            .cloned()
            .unwrap_or_default()
    }

    /// Get all `create_release` requests
    pub fn get_created_releases(&self) -> Vec<ReleaseRequest> {
        self.created_releases.lock().unwrap().clone()
    }

    /// Get all `upload_release_asset` calls
    pub fn get_upload_calls(&self) -> Vec<UploadAssetCall> {
        self.upload_calls.lock().unwrap().clone()
    }

    /// Get all `create_pr_comment` calls
    pub fn get_create_comment_calls(&self) -> Vec<CreateCommentCall> {
        self.create_comment_calls.lock().unwrap().clone()
    }

    /// Get all `update_pr_comment` calls
    pub fn get_update_comment_calls(&self) -> Vec<UpdateCommentCall> {
        self.update_comment_calls.lock().unwrap().clone()
    }

    /// Get all PRs that `list_pr_comments` was called with
    pub fn get_list_comments_calls(&self) -> Vec<u64> {
        self.list_comments_calls.lock().unwrap().clone()
    }

    /// Assert that a release was created for the given tag
    pub fn assert_release_created(&self, tag: &str) {
        let requests = self.get_created_releases();
        assert!(
            requests.iter().any(|r| r.tag == tag),
            "Expected create_release({tag}) but got: {requests:?}"
        );
    }
}

#[async_trait]
impl ForgeService for MockForgeService {
    async fn create_release(&self, request: &ReleaseRequest) -> Result<ReleaseRecord> {
        self.created_releases.lock().unwrap().push(request.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_create_release.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let id = self.next_release_id.fetch_add(1, Ordering::SeqCst);
        Ok(ReleaseRecord {
            id,
            tag: request.tag.clone(),
            name: request.name.clone(),
            body: request.body.clone(),
            prerelease: request.prerelease,
            html_url: format!(
                "https://github.com/{}/{}/releases/tag/{}",
                self.config.owner, self.config.repo, request.tag
            ),
            assets: vec![],
        })
    }

    async fn upload_release_asset(
        &self,
        release_id: u64,
        name: &str,
        content: Vec<u8>,
    ) -> Result<ReleaseAsset> {
        self.upload_calls.lock().unwrap().push(UploadAssetCall {
            release_id,
            name: name.to_string(),
            content,
        });

        // Check for injected error
        if let Some(msg) = self.error_on_upload_asset.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(ReleaseAsset {
            name: name.to_string(),
            download_url: format!(
                "https://github.com/{}/{}/releases/download/{name}",
                self.config.owner, self.config.repo
            ),
        })
    }

    async fn list_pr_comments(&self, pr_number: u64) -> Result<Vec<PrComment>> {
        self.list_comments_calls.lock().unwrap().push(pr_number);

        // Check for injected error
        if let Some(msg) = self.error_on_list_comments.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self.get_comments(pr_number))
    }

    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<u64> {
        self.create_comment_calls
            .lock()
            .unwrap()
            .push(CreateCommentCall {
                pr_number,
                body: body.to_string(),
            });

        // Check for injected error
        if let Some(msg) = self.error_on_create_comment.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let id = self.next_comment_id.fetch_add(1, Ordering::SeqCst);
        self.comments
            .lock()
            .unwrap()
            .entry(pr_number)
            .or_default()
            .push(PrComment {
                id,
                author: "relgate[bot]".to_string(),
                body: body.to_string(),
            });
        Ok(id)
    }

    async fn update_pr_comment(&self, comment_id: u64, body: &str) -> Result<()> {
        self.update_comment_calls
            .lock()
            .unwrap()
            .push(UpdateCommentCall {
                comment_id,
                body: body.to_string(),
            });

        // Check for injected error
        if let Some(msg) = self.error_on_update_comment.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let mut comments = self.comments.lock().unwrap();
        for list in comments.values_mut() {
            if let Some(comment) = list.iter_mut().find(|c| c.id == comment_id) {
                comment.body = body.to_string();
                return Ok(());
            }
        }
        Err(Error::GitHubApi(format!("comment {comment_id} not found")))
    }

    fn config(&self) -> &ForgeConfig {
        &self.config
    }
}
