//! Release notes generation
//!
//! Groups the commit set by type into labeled sections, with breaking
//! changes additionally collected into a highlighted section at the top
//! regardless of their group.

use crate::types::{CommitKind, CommitRecord};
use chrono::NaiveDate;
use semver::Version;
use std::fmt::Write;

/// Section order and labels for the grouped body
const SECTIONS: &[(CommitKind, &str)] = &[
    (CommitKind::Feat, "Features"),
    (CommitKind::Fix, "Bug fixes"),
    (CommitKind::Perf, "Performance"),
    (CommitKind::Refactor, "Refactoring"),
    (CommitKind::Docs, "Documentation"),
    (CommitKind::Test, "Tests"),
    (CommitKind::Build, "Build"),
    (CommitKind::Ci, "CI"),
    (CommitKind::Chore, "Chores"),
    (CommitKind::None, "Other"),
];

/// Render the release notes body for a version
///
/// Empty groups are skipped. A breaking commit appears both in the
/// highlighted section and under its own type, the way changelog tooling
/// conventionally renders it.
pub fn build_release_notes(records: &[CommitRecord], version: &Version, date: NaiveDate) -> String {
    let mut notes = format!("## v{version} ({})\n", date.format("%Y-%m-%d"));

    let breaking: Vec<&CommitRecord> = records.iter().filter(|r| r.breaking).collect();
    if !breaking.is_empty() {
        notes.push_str("\n### 🚨 Breaking changes\n\n");
        for record in breaking {
            let _ = writeln!(notes, "- {}", record.subject);
        }
    }

    for (kind, label) in SECTIONS {
        let group: Vec<&CommitRecord> = records.iter().filter(|r| r.kind == *kind).collect();
        if group.is_empty() {
            continue;
        }
        let _ = write!(notes, "\n### {label}\n\n");
        for record in group {
            let _ = writeln!(notes, "- {}", record.subject);
        }
    }

    notes
}
