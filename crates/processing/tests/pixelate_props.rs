//! Property tests for the pixelation engine.

use image::{Rgba, RgbaImage};
use obscura_common::geometry::Rect;
use obscura_processing::{pixelate_all, pixelate_region, BLOCK_SIZE};
use proptest::prelude::*;

const CANVAS_SIZE: u32 = 64;

fn gradient_canvas() -> RgbaImage {
    RgbaImage::from_fn(CANVAS_SIZE, CANVAS_SIZE, |x, y| {
        Rgba([x as u8, y as u8, (x * 31 + y * 7) as u8, 255])
    })
}

proptest! {
    /// Any rectangle narrower than one block leaves the canvas untouched,
    /// regardless of position or height.
    #[test]
    fn narrow_rect_is_noop(
        x in -16i32..CANVAS_SIZE as i32,
        y in -16i32..CANVAS_SIZE as i32,
        w in 1u32..BLOCK_SIZE,
        h in 1u32..CANVAS_SIZE,
    ) {
        let original = gradient_canvas();
        let mut canvas = original.clone();
        pixelate_region(&mut canvas, Rect::new(x, y, w, h));
        prop_assert_eq!(canvas, original);
    }

    /// Same for rectangles shorter than one block.
    #[test]
    fn short_rect_is_noop(
        x in -16i32..CANVAS_SIZE as i32,
        y in -16i32..CANVAS_SIZE as i32,
        w in 1u32..CANVAS_SIZE,
        h in 1u32..BLOCK_SIZE,
    ) {
        let original = gradient_canvas();
        let mut canvas = original.clone();
        pixelate_region(&mut canvas, Rect::new(x, y, w, h));
        prop_assert_eq!(canvas, original);
    }

    /// Pixels outside the rectangle are bit-identical to the original,
    /// whatever the rectangle's position and size.
    #[test]
    fn outside_pixels_never_change(
        x in -32i32..(CANVAS_SIZE as i32 + 16),
        y in -32i32..(CANVAS_SIZE as i32 + 16),
        w in 0u32..96,
        h in 0u32..96,
    ) {
        let original = gradient_canvas();
        let mut canvas = original.clone();
        let rect = Rect::new(x, y, w, h);
        pixelate_region(&mut canvas, rect);

        for (px, py, pixel) in canvas.enumerate_pixels() {
            let inside = (px as i64) >= x as i64
                && (px as i64) < x as i64 + w as i64
                && (py as i64) >= y as i64
                && (py as i64) < y as i64 + h as i64;
            if !inside {
                prop_assert_eq!(pixel, original.get_pixel(px, py));
            }
        }
    }

    /// Any rectangle at least one block in each dimension is stable
    /// under repeated application, block-aligned or not: the second
    /// pass re-samples within the first pass's uniform blocks.
    #[test]
    fn pixelation_is_idempotent(
        x in 0i32..24,
        y in 0i32..24,
        w in BLOCK_SIZE..=40u32,
        h in BLOCK_SIZE..=40u32,
    ) {
        let rect = Rect::new(x, y, w, h);

        let mut once = gradient_canvas();
        pixelate_region(&mut once, rect);

        let mut twice = once.clone();
        pixelate_region(&mut twice, rect);

        prop_assert_eq!(once, twice);
    }
}

#[test]
fn empty_store_is_identity() {
    let original = gradient_canvas();
    let mut canvas = original.clone();
    pixelate_all(&mut canvas, &[]);
    assert_eq!(canvas, original);
}

#[test]
fn store_order_is_application_order() {
    let rects = [
        Rect::new(0, 0, 27, 27),
        Rect::new(9, 9, 27, 27),
    ];

    let mut all_at_once = gradient_canvas();
    pixelate_all(&mut all_at_once, &rects);

    let mut one_by_one = gradient_canvas();
    for rect in rects {
        pixelate_region(&mut one_by_one, rect);
    }

    assert_eq!(all_at_once, one_by_one);
}
