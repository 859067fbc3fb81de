//! Tick-position computation for the coordinate rulers.
//!
//! The rulers own no transform state. On every redraw they receive the
//! current [`Camera`] and their canvas length and recompute tick positions
//! from scratch — the iterator returned here is finite and holds no state
//! across calls.

#[cfg(test)]
#[path = "ruler_test.rs"]
mod ruler_test;

use crate::camera::Camera;
use crate::consts::COORD_MAX;

/// Which ruler is being populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One ruler mark: a world-space value and where it lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// World coordinate of the mark, a multiple of the tick interval.
    pub value: f64,
    /// Screen pixel along the ruler's axis.
    pub screen: f64,
}

/// Tick marks currently visible on one ruler.
///
/// Starts at the largest interval multiple at or below the visible minimum,
/// steps by [`Camera::tick_interval`], and drops values outside the valid
/// coordinate range `[0, COORD_MAX]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn tick_positions(camera: Camera, axis: Axis, canvas_len: f64) -> impl Iterator<Item = Tick> {
    let range = camera.visible_world_range(canvas_len, canvas_len);
    let (min, max, pan) = match axis {
        Axis::X => (range.min_x, range.max_x, camera.pan_x),
        Axis::Y => (range.min_y, range.max_y, camera.pan_y),
    };

    let interval = camera.tick_interval();
    let start = (min / interval).floor() * interval;
    let steps = ((max - start) / interval).floor().max(0.0) as i64;

    (0..=steps)
        .map(move |i| {
            let value = (i as f64).mul_add(interval, start);
            Tick { value, screen: value.mul_add(camera.zoom, pan) }
        })
        .filter(|tick| (0.0..=COORD_MAX).contains(&tick.value))
}
