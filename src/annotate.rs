//! Interior-angle arc sweeps and angle-label placement.
//!
//! A canvas arc from the raw bearing of one edge to the raw bearing of the
//! other traces the *reflex* side of the angle for roughly half of all
//! vertex configurations. [`interior_arc_sweep`] normalizes the two bearings
//! so the sweep always covers the interior angle (≤ π).

#[cfg(test)]
#[path = "annotate_test.rs"]
mod annotate_test;

use std::f64::consts::PI;

use crate::camera::Point;
use crate::consts::{LABEL_OFFSET_RATIO, MIN_READABLE_ARC_PX};
use crate::geometry::vector_angle;

/// Start/end angles (radians) for drawing an interior-angle arc.
/// `end - start` is always within `[0, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub start: f64,
    pub end: f64,
}

impl ArcSweep {
    /// The swept angle in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Which side of the triangle an angle label lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Between the vertex and the centroid.
    Inside,
    /// Mirrored away from the centroid, clear of a cramped arc.
    Outside,
}

/// Anchor point and placement for one vertex's angle label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub pos: Point,
    pub placement: LabelPlacement,
}

/// Compute the arc sweep that traces the interior angle at `vertex`.
///
/// The raw bearings toward the two neighbors are normalized in three steps:
/// unwrap a gap wider than π by shifting the lagging bearing a full turn,
/// then swap so `start <= end`. Both steps are required — skipping either
/// draws the arc on the reflex side whenever the bearings straddle ±π or
/// arrive in descending order.
#[must_use]
pub fn interior_arc_sweep(vertex: Point, neighbor1: Point, neighbor2: Point) -> ArcSweep {
    let mut start = vector_angle(vertex, neighbor1);
    let mut end = vector_angle(vertex, neighbor2);

    let diff = end - start;
    if diff > PI {
        start += 2.0 * PI;
    } else if diff < -PI {
        end += 2.0 * PI;
    }
    if end < start {
        std::mem::swap(&mut start, &mut end);
    }

    ArcSweep { start, end }
}

/// Place the angle label relative to its vertex.
///
/// Normally the label sits on the vertex-to-centroid segment, just inside
/// the triangle. When the arc is too small to read at the current zoom
/// (`arc_radius_screen` below [`MIN_READABLE_ARC_PX`]) the label mirrors to
/// the outside so it does not overlap the arc.
#[must_use]
pub fn label_anchor(vertex: Point, centroid: Point, arc_radius_screen: f64) -> LabelAnchor {
    let toward_center = Point::new(centroid.x - vertex.x, centroid.y - vertex.y);
    if arc_radius_screen < MIN_READABLE_ARC_PX {
        LabelAnchor {
            pos: Point::new(
                vertex.x - toward_center.x * LABEL_OFFSET_RATIO,
                vertex.y - toward_center.y * LABEL_OFFSET_RATIO,
            ),
            placement: LabelPlacement::Outside,
        }
    } else {
        LabelAnchor {
            pos: Point::new(
                vertex.x + toward_center.x * LABEL_OFFSET_RATIO,
                vertex.y + toward_center.y * LABEL_OFFSET_RATIO,
            ),
            placement: LabelPlacement::Inside,
        }
    }
}
