//! Pan/zoom camera and coordinate conversions.
//!
//! The camera is the single owner of viewport transform state. The renderer
//! and the rulers receive it by reference on every redraw; nothing else
//! mutates it besides the zoom and pan operations defined here.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The world-space rectangle currently visible in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Camera state for pan/zoom over the coordinate plane.
///
/// `pan_x` / `pan_y` are in CSS pixels and unbounded — the viewport is a
/// sub-window of a boundless plane. `zoom` is a scale factor held within
/// [`MIN_ZOOM`, `MAX_ZOOM`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a world-space distance to screen pixels.
    #[must_use]
    pub fn world_dist_to_screen(&self, world_dist: f64) -> f64 {
        world_dist * self.zoom
    }

    /// Multiply zoom by `factor`, keeping the world point under `anchor`
    /// fixed on screen. Returns whether the camera changed.
    ///
    /// The change is rejected outright when the resulting zoom would leave
    /// [`MIN_ZOOM`, `MAX_ZOOM`] — there is no partial zoom up to the bound,
    /// so a rejected zoom leaves the pan untouched too.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        let target = self.zoom * factor;
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&target) {
            return false;
        }
        self.pan_x = anchor.x - (anchor.x - self.pan_x) * factor;
        self.pan_y = anchor.y - (anchor.y - self.pan_y) * factor;
        self.zoom = target;
        true
    }

    /// [`Self::zoom_at`] anchored at the viewport center. Used by the
    /// discrete zoom-in/zoom-out buttons.
    pub fn zoom_at_center(&mut self, viewport_w: f64, viewport_h: f64, factor: f64) -> bool {
        self.zoom_at(Point::new(viewport_w * 0.5, viewport_h * 0.5), factor)
    }

    /// Restore the identity view: zoom 1, no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Ruler tick spacing in world units for the current zoom: denser marks
    /// when zoomed in, coarser when zoomed out.
    #[must_use]
    pub fn tick_interval(&self) -> f64 {
        if self.zoom > 4.0 {
            25.0
        } else if self.zoom > 2.0 {
            50.0
        } else if self.zoom < 0.5 {
            200.0
        } else {
            100.0
        }
    }

    /// The world-space rectangle covered by a viewport of the given CSS-pixel
    /// size, found by inverse-transforming its corners.
    #[must_use]
    pub fn visible_world_range(&self, viewport_w: f64, viewport_h: f64) -> WorldRange {
        let top_left = self.screen_to_world(Point::new(0.0, 0.0));
        let bottom_right = self.screen_to_world(Point::new(viewport_w, viewport_h));
        WorldRange {
            min_x: top_left.x,
            max_x: bottom_right.x,
            min_y: top_left.y,
            max_y: bottom_right.y,
        }
    }
}
