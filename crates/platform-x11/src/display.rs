//! X11 display connection and root window resolution.

use image::RgbaImage;
use obscura_common::error::{ObscuraError, ObscuraResult};
use obscura_common::geometry::Rect;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::Window;
use x11rb::rust_connection::RustConnection;

use crate::capture::capture_root;
use crate::windows::{collect_visible_rects, ServerQuery};

/// An open connection to the X server, resolved to one screen.
///
/// Owns the connection for the duration of a run; dropping it disconnects.
pub struct Display {
    conn: RustConnection,
    root: Window,
    width: u16,
    height: u16,
}

impl Display {
    /// Connect to the default display (`$DISPLAY`) and resolve the root
    /// window of the default screen.
    ///
    /// Connection failure is fatal: nothing downstream can work without a
    /// display, so there is no degraded mode.
    pub fn connect() -> ObscuraResult<Self> {
        let (conn, screen_num) = x11rb::connect(None)
            .map_err(|e| ObscuraError::platform(format!("cannot connect to the X server: {e}")))?;

        let screen = &conn.setup().roots[screen_num];
        let (root, width, height) = (screen.root, screen.width_in_pixels, screen.height_in_pixels);

        tracing::debug!(screen_num, root, width, height, "connected to X server");

        Ok(Self {
            conn,
            root,
            width,
            height,
        })
    }

    /// Screen dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    /// Enumerate the rectangles of all currently-viewable top-level windows,
    /// in window-tree order.
    ///
    /// "Viewable" is the server's map state, not actual occlusion: a window
    /// fully covered by another still counts. Per-window query failures are
    /// skipped; a failed tree query yields an empty list.
    pub fn visible_window_rects(&self) -> Vec<Rect> {
        collect_visible_rects(&ServerQuery::new(&self.conn, self.root))
    }

    /// Capture the full screen into an RGBA canvas.
    pub fn capture_screen(&self) -> ObscuraResult<RgbaImage> {
        capture_root(&self.conn, self.root, self.width, self.height)
    }
}
