//! Screen-space rectangle geometry.

use serde::{Deserialize, Serialize};

/// An axis-aligned screen-space rectangle.
///
/// `x`/`y` are the top-left corner in screen coordinates. X11 reports
/// positions as `i16`, which may be negative for windows hanging off the
/// left or top screen edge; they are stored widened to `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle with no area contributes no pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Intersect with a `bounds_w` x `bounds_h` region anchored at the
    /// origin, returning the overlapping part with a non-negative corner.
    ///
    /// Returns `None` when the rectangle lies entirely outside the bounds
    /// or has no area.
    pub fn clamped(&self, bounds_w: u32, bounds_h: u32) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }

        // Work in i64 so x + w cannot overflow.
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.w)).min(i64::from(bounds_w));
        let y1 = (i64::from(self.y) + i64::from(self.h)).min(i64::from(bounds_h));

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(Rect {
            x: x0 as i32,
            y: y0 as i32,
            w: (x1 - x0) as u32,
            h: (y1 - y0) as u32,
        })
    }
}
