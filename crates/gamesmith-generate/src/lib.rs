//! Unit generation for Gamesmith.
//!
//! This crate samples the catalog with a configurable dimension weighting
//! and assembles write-once `Unit` records. Randomness and the clock are
//! injected so runs can be pinned deterministically in tests.

pub mod clock;
pub mod engine;
pub mod model;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::Generator;
pub use model::GenerateOptions;
