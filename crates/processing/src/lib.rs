//! Obscura Processing — the pixelation engine.
//!
//! Applies a mosaic filter to screen-space rectangles of an RGBA canvas:
//! crop the region, shrink it with nearest-pixel sampling, blow it back up
//! the same way, and composite the blocky result over the original.
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod pixelate;

pub use pixelate::{pixelate_all, pixelate_region, BLOCK_SIZE};
