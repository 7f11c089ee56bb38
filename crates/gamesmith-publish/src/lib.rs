//! Artifact publishing for Gamesmith.
//!
//! Renders the per-unit artifacts (metadata, README, source stub) and the
//! promotional variants, and writes them under unit-scoped directories.
//! Rendering is pure; all I/O failures propagate to the caller.

pub mod errors;
pub mod persist;
pub mod promote;
pub mod templates;

pub use errors::{PublishError, PublishResult};
pub use persist::Persister;
pub use promote::{PromoKit, Promoter};
