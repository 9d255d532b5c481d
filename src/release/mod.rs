//! Release planning and publishing
//!
//! Computes the next version from the resolved bump, renders grouped release
//! notes, creates the tagged release, and uploads build artifacts. The
//! end-to-end publish run is composed in [`execute_publish`].

mod execute;
mod notes;
mod publish;
mod version;

pub use execute::{PublishOutcome, execute_publish};
pub use notes::build_release_notes;
pub use publish::{ReleasePlan, plan_release, publish_release};
pub use version::next_version;
