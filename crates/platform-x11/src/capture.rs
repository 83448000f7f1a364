//! Full-screen capture via `GetImage`.

use image::RgbaImage;
use obscura_common::error::{ObscuraError, ObscuraResult};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{self, ImageFormat, Window};

const ALL_PLANES: u32 = u32::MAX;

/// Capture the root window into an RGBA buffer.
///
/// Unlike per-window queries, a failed capture is fatal: without a canvas
/// there is nothing to obscure or write.
pub(crate) fn capture_root(
    conn: &impl Connection,
    root: Window,
    width: u16,
    height: u16,
) -> ObscuraResult<RgbaImage> {
    let reply = xproto::get_image(
        conn,
        ImageFormat::Z_PIXMAP,
        root,
        0,
        0,
        width,
        height,
        ALL_PLANES,
    )
    .map_err(|e| ObscuraError::capture(format!("screen capture request failed: {e}")))?
    .reply()
    .map_err(|e| ObscuraError::capture(format!("screen capture failed: {e}")))?;

    tracing::debug!(
        width,
        height,
        depth = reply.depth,
        bytes = reply.data.len(),
        "captured root window"
    );

    rgba_from_zpixmap(&reply.data, reply.depth, u32::from(width), u32::from(height))
}

/// Convert a 32-bits-per-pixel ZPixmap reply (BGRx byte order, as returned
/// by little-endian servers at depth 24/32) into an RGBA image with the
/// alpha channel forced opaque.
fn rgba_from_zpixmap(data: &[u8], depth: u8, width: u32, height: u32) -> ObscuraResult<RgbaImage> {
    if depth != 24 && depth != 32 {
        return Err(ObscuraError::capture(format!(
            "unsupported capture depth {depth} (expected 24 or 32)"
        )));
    }

    let expected = width as usize * height as usize * 4;
    if data.len() < expected {
        return Err(ObscuraError::capture(format!(
            "short capture reply: got {} bytes, need {expected}",
            data.len()
        )));
    }

    let mut pixels = Vec::with_capacity(expected);
    for bgrx in data[..expected].chunks_exact(4) {
        pixels.extend_from_slice(&[bgrx[2], bgrx[1], bgrx[0], 0xff]);
    }

    RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| ObscuraError::capture("captured buffer has inconsistent dimensions"))
}
