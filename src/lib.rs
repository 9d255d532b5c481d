//! relgate - Semver gate for conventional-commit PRs
//!
//! Validates pull-request titles against the conventional-commit history
//! since the last release tag, publishes tagged releases with generated
//! notes, and keeps a status comment on the PR up to date.

pub mod auth;
pub mod comment;
pub mod conventional;
pub mod error;
pub mod forge;
pub mod release;
pub mod repo;
pub mod types;
pub mod validate;
