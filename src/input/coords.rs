//! Coordinate conversion between screen space and content space.
//!
//! The viewport's `location` is the content-space point shown at the top-left
//! corner of the editor, and `zoom` scales content units to screen pixels:
//! `screen = (content - location) * zoom`.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{Point, Rect, Size, Vector, point, size};
use serde::{Deserialize, Serialize};

/// Visible region of the graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Content-space location of the top-left corner
    pub location: Point,
    /// Screen pixels per content unit
    pub zoom: f64,
    /// Screen-space size of the editor
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            location: Point::ORIGIN,
            zoom: DEFAULT_ZOOM,
            size: Size::default(),
        }
    }
}

impl Viewport {
    /// Convert screen position to content position
    #[inline]
    pub fn screen_to_content(&self, screen_pos: Point) -> Point {
        self.location + screen_pos.to_vector() / self.zoom
    }

    /// Convert content position to screen position
    #[inline]
    pub fn content_to_screen(&self, content_pos: Point) -> Point {
        let v = (content_pos - self.location) * self.zoom;
        point(v.x, v.y)
    }

    /// Convert a delta from screen to content (for drag operations)
    #[inline]
    pub fn delta_screen_to_content(&self, delta: Vector) -> Vector {
        delta / self.zoom
    }

    /// Content-space rectangle currently visible
    pub fn visible_content(&self) -> Rect {
        Rect::new(
            self.location,
            size(self.size.width / self.zoom, self.size.height / self.zoom),
        )
    }

    /// Set the zoom level while keeping the content point under `screen_pos`
    /// fixed. The level is clamped to `MIN_ZOOM..=MAX_ZOOM` and non-finite
    /// levels are ignored. Returns whether the zoom changed.
    pub fn zoom_at(&mut self, zoom: f64, screen_pos: Point) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if (zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }

        let anchor = self.screen_to_content(screen_pos);
        self.zoom = zoom;
        self.location = anchor - screen_pos.to_vector() / zoom;
        true
    }
}
