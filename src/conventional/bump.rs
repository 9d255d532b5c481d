//! Bump classification and aggregation

use crate::types::{BumpType, CommitKind, CommitRecord};

/// Classify a single commit into the bump it implies
///
/// Breaking wins irrespective of type; `feat` implies minor, `fix` implies
/// patch, everything else implies no release.
pub const fn bump_for(record: &CommitRecord) -> BumpType {
    if record.breaking {
        return BumpType::Major;
    }
    match record.kind {
        CommitKind::Feat => BumpType::Minor,
        CommitKind::Fix => BumpType::Patch,
        _ => BumpType::None,
    }
}

/// Aggregate a commit history into its highest-precedence bump
///
/// `max` over the per-commit bumps, so the result is invariant under
/// reordering and an empty history resolves to `none`.
pub fn resolve_bump(records: &[CommitRecord]) -> BumpType {
    records
        .iter()
        .map(bump_for)
        .max()
        .unwrap_or(BumpType::None)
}
