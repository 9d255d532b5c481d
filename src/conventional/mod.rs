//! Conventional-commit classification
//!
//! One shared grammar classifies both commit messages and PR titles, so the
//! bump implied by each is computed by the same rule.

mod bump;
mod parser;

pub use bump::{bump_for, resolve_bump};
pub use parser::{classify_title, parse_commit};
