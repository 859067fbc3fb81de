//! Angle, distance, and bearing math over triangle vertices.
//!
//! All functions are pure and operate on world-space points. Degenerate
//! input (coincident points) yields `NaN` angles rather than an error; the
//! display layer decides how to present an undefined angle.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::camera::Point;

/// The three interior angles of a triangle, in degrees, one per vertex in
/// input order. Sums to 180° (within floating tolerance) for any
/// non-degenerate triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSet {
    pub at_p1: f64,
    pub at_p2: f64,
    pub at_p3: f64,
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx.hypot(dy)
}

/// Interior angle at `vertex` formed by the edges toward `a` and `b`,
/// in degrees. Symmetric in `a` and `b`.
///
/// Returns `NaN` when either edge vector has zero length (the vertex
/// coincides with another point) — callers treat `NaN` as "undefined angle".
/// The `acos` argument is clamped to `[-1, 1]` so floating-point overshoot
/// on near-collinear input cannot produce a spurious `NaN`.
#[must_use]
pub fn angle_at_vertex(vertex: Point, a: Point, b: Point) -> f64 {
    let v1 = Point::new(a.x - vertex.x, a.y - vertex.y);
    let v2 = Point::new(b.x - vertex.x, b.y - vertex.y);

    let dot = v1.x * v2.x + v1.y * v2.y;
    let mag1 = v1.x.hypot(v1.y);
    let mag2 = v2.x.hypot(v2.y);
    if mag1 == 0.0 || mag2 == 0.0 {
        return f64::NAN;
    }

    let cos = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// All three interior angles of the triangle `p1 p2 p3`.
#[must_use]
pub fn triangle_angles(p1: Point, p2: Point, p3: Point) -> AngleSet {
    AngleSet {
        at_p1: angle_at_vertex(p1, p2, p3),
        at_p2: angle_at_vertex(p2, p1, p3),
        at_p3: angle_at_vertex(p3, p1, p2),
    }
}

/// Raw bearing of the vector from `vertex` to `point`, in radians in
/// `(-π, π]`. This is the arc-sweep input, not the interior angle.
#[must_use]
pub fn vector_angle(vertex: Point, point: Point) -> f64 {
    (point.y - vertex.y).atan2(point.x - vertex.x)
}
