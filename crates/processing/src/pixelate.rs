//! Mosaic pixelation of canvas regions.
//!
//! # Algorithm
//!
//! For each rectangle:
//!
//! 1. **Clamp** to the canvas bounds (windows can hang off the screen).
//! 2. **Crop** the region into an owned copy that never aliases the canvas.
//! 3. **Downsample** to `w/9 x h/9` with nearest-pixel sampling — no
//!    averaging, so the result is hard blocks rather than a smooth blur.
//! 4. **Upsample** back to `w x h` with the same filter, replicating each
//!    shrunk pixel into a 9x9 block.
//! 5. **Composite** the blocky image over the canvas at the region's
//!    offset, opaque, no blending.
//!
//! Rectangles narrower or shorter than one block would downsample to a
//! zero dimension; they are skipped unmodified.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use obscura_common::geometry::Rect;

/// Side length of a mosaic block in pixels.
pub const BLOCK_SIZE: u32 = 9;

/// Pixelate one rectangle of the canvas in place.
///
/// Degenerate rectangles (zero area, sub-block size, or entirely outside
/// the canvas) are left unmodified; obscuring is best-effort and a single
/// bad rectangle never aborts the run.
pub fn pixelate_region(canvas: &mut RgbaImage, rect: Rect) {
    let Some(clipped) = rect.clamped(canvas.width(), canvas.height()) else {
        tracing::debug!(?rect, "rectangle outside canvas; skipping");
        return;
    };

    let (w, h) = (clipped.w, clipped.h);
    let (shrunk_w, shrunk_h) = (w / BLOCK_SIZE, h / BLOCK_SIZE);
    if shrunk_w == 0 || shrunk_h == 0 {
        tracing::debug!(?rect, "rectangle smaller than one block; skipping");
        return;
    }

    let (x, y) = (clipped.x as u32, clipped.y as u32);

    // Owned copy of the region; the canvas is written while this is live.
    let region = imageops::crop_imm(canvas, x, y, w, h).to_image();

    let shrunk = imageops::resize(&region, shrunk_w, shrunk_h, FilterType::Nearest);
    let blocky = imageops::resize(&shrunk, w, h, FilterType::Nearest);

    imageops::replace(canvas, &blocky, i64::from(x), i64::from(y));
}

/// Pixelate every rectangle in order, each fully completing before the
/// next begins. Later rectangles composite over earlier results, so
/// overlaps are re-blocked on the later rectangle's grid.
pub fn pixelate_all(canvas: &mut RgbaImage, rects: &[Rect]) {
    for &rect in rects {
        pixelate_region(canvas, rect);
    }
}
