//! Obscura X11 Platform Integration
//!
//! Platform-specific functionality for X11 displays:
//! - **Display:** Connection lifecycle and root window resolution
//! - **Window Enumeration:** Visible top-level window geometry via the
//!   window tree, map-state, and geometry requests
//! - **Screen Capture:** Full-screen `GetImage` capture into an RGBA buffer
//!
//! Every request is a blocking round-trip on the X connection. The core X
//! protocol carries no timeouts, so a server that never replies blocks the
//! caller indefinitely.

mod capture;
pub mod display;
mod windows;

pub use display::*;
