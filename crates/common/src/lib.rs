//! Obscura Common Utilities
//!
//! Shared infrastructure for all Obscura crates:
//! - Error types and result aliases
//! - Screen-space rectangle geometry
//! - Tracing/logging initialization
//! - Configuration types

pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;

pub use config::*;
pub use error::*;
pub use geometry::*;
