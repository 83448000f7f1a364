//! Visible window enumeration.
//!
//! One tree query fetches the root window's children; each child then gets
//! a map-state query and, if viewable, a geometry query. Every step is
//! best-effort: the goal is to obscure as many windows as possible, so a
//! single window's failed query never aborts the run.

use obscura_common::geometry::Rect;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{self, MapState, Window};

/// The window queries enumeration needs, abstracted from the wire so the
/// filtering logic is testable without an X server.
pub(crate) trait WindowQuery {
    /// Children of the root window in tree order, or `None` if the tree
    /// query got no reply.
    fn child_windows(&self) -> Option<Vec<Window>>;

    /// Whether the server reports the window as viewable (mapped), or
    /// `None` if the attribute query got no reply.
    fn is_viewable(&self, window: Window) -> Option<bool>;

    /// The window's screen-space footprint, or `None` if the geometry
    /// query got no reply.
    fn geometry(&self, window: Window) -> Option<Rect>;
}

/// Collect one rectangle per viewable window, preserving tree order.
pub(crate) fn collect_visible_rects(query: &impl WindowQuery) -> Vec<Rect> {
    let Some(children) = query.child_windows() else {
        tracing::debug!("window tree query failed; treating as no windows");
        return Vec::new();
    };

    // Upper bound: not every child is viewable.
    let mut rects = Vec::with_capacity(children.len());

    for window in children {
        match query.is_viewable(window) {
            Some(true) => {}
            Some(false) => continue,
            None => {
                tracing::debug!(window, "attribute query failed; skipping window");
                continue;
            }
        }

        match query.geometry(window) {
            Some(rect) => rects.push(rect),
            None => {
                tracing::debug!(window, "geometry query failed; skipping window");
            }
        }
    }

    rects
}

/// [`WindowQuery`] backed by a live X connection.
pub(crate) struct ServerQuery<'a, C: Connection> {
    conn: &'a C,
    root: Window,
}

impl<'a, C: Connection> ServerQuery<'a, C> {
    pub(crate) fn new(conn: &'a C, root: Window) -> Self {
        Self { conn, root }
    }
}

impl<C: Connection> WindowQuery for ServerQuery<'_, C> {
    fn child_windows(&self) -> Option<Vec<Window>> {
        let reply = xproto::query_tree(self.conn, self.root).ok()?.reply().ok()?;
        Some(reply.children)
    }

    fn is_viewable(&self, window: Window) -> Option<bool> {
        let attrs = xproto::get_window_attributes(self.conn, window)
            .ok()?
            .reply()
            .ok()?;
        Some(attrs.map_state == MapState::VIEWABLE)
    }

    fn geometry(&self, window: Window) -> Option<Rect> {
        let geom = xproto::get_geometry(self.conn, window).ok()?.reply().ok()?;

        // GetGeometry positions the outer corner but sizes the interior;
        // the on-screen footprint includes the border on all four sides.
        let border = u32::from(geom.border_width);
        Some(Rect::new(
            i32::from(geom.x),
            i32::from(geom.y),
            u32::from(geom.width) + 2 * border,
            u32::from(geom.height) + 2 * border,
        ))
    }
}
