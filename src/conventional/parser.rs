//! Commit message parsing
//!
//! Recognizes the `<type>[(scope)][!]: <description>` subject shape plus the
//! `BREAKING CHANGE:` body footer. Parsing never fails: a subject outside the
//! shape classifies as [`CommitKind::None`] rather than an error.

use crate::conventional::bump_for;
use crate::types::{BumpType, CommitKind, CommitRecord};
use regex::Regex;
use std::sync::OnceLock;

/// Exact footer token, case-sensitive, matched at line start only
const BREAKING_FOOTER: &str = "BREAKING CHANGE:";

/// Compiled subject pattern, built once on first use
fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([a-z]+)(?:\(([^)]+)\))?(!)?:\s*(.*)$")
            .expect("hardcoded commit header pattern is valid")
    })
}

/// Parse a commit subject and body into a classified record
///
/// The `!` marker is honored even for unrecognized type keywords, and a
/// `BREAKING CHANGE:` footer in the body escalates the record to breaking
/// regardless of what the subject says.
pub fn parse_commit(subject: &str, body: &str) -> CommitRecord {
    let footer_breaking = body
        .lines()
        .any(|line| line.starts_with(BREAKING_FOOTER));

    header_re().captures(subject).map_or_else(
        || CommitRecord {
            subject: subject.to_string(),
            kind: CommitKind::None,
            breaking: footer_breaking,
            scope: None,
        },
        |caps| CommitRecord {
            subject: subject.to_string(),
            kind: caps
                .get(1)
                .map_or(CommitKind::None, |m| CommitKind::from_keyword(m.as_str())),
            breaking: caps.get(3).is_some() || footer_breaking,
            scope: caps.get(2).map(|m| m.as_str().to_string()),
        },
    )
}

/// Classify a PR title into its implied bump
///
/// The title is treated as a lone commit subject with no body, so only the
/// inline `!` marker can produce a `major` here.
pub fn classify_title(title: &str) -> BumpType {
    bump_for(&parse_commit(title, ""))
}
