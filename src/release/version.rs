//! Next-version arithmetic

use crate::error::{Error, Result};
use crate::types::BumpType;
use semver::Version;

/// Apply a bump to the previously released version
///
/// Major resets minor and patch, minor resets patch, patch increments patch.
/// Prerelease and build metadata on the previous version are dropped. A
/// `none` bump is a refusal ([`Error::NoReleaseNeeded`]), never a no-op
/// release.
pub fn next_version(prev: &Version, bump: BumpType) -> Result<Version> {
    match bump {
        BumpType::Major => Ok(Version::new(prev.major + 1, 0, 0)),
        BumpType::Minor => Ok(Version::new(prev.major, prev.minor + 1, 0)),
        BumpType::Patch => Ok(Version::new(prev.major, prev.minor, prev.patch + 1)),
        BumpType::None => Err(Error::NoReleaseNeeded),
    }
}
