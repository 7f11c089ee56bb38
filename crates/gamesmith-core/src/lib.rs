//! Core contracts and helpers for Gamesmith.
//!
//! This crate defines the catalog of sellable template categories, the
//! factory configuration, and the `Unit` record shared across the
//! generation, publishing, and reporting crates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod unit;

pub use catalog::{Catalog, Dimension, TemplateSet};
pub use config::{FactoryConfig, Identity, Production, Schedule};
pub use error::{Error, Result};
pub use unit::Unit;
