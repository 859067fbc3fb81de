//! Shared numeric constants for the angleview crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Lowest allowed camera zoom.
pub const MIN_ZOOM: f64 = 0.5;

/// Highest allowed camera zoom.
pub const MAX_ZOOM: f64 = 5.0;

/// Multiplicative step used by the wheel and the discrete zoom buttons.
pub const ZOOM_STEP: f64 = 1.2;

// ── Coordinate plane ────────────────────────────────────────────

/// Upper bound of the valid coordinate range on both axes. Input points and
/// ruler tick values live in `[0, COORD_MAX]`.
pub const COORD_MAX: f64 = 800.0;

// ── Annotation ──────────────────────────────────────────────────

/// Angle-arc radius in world units. The on-screen radius is this times zoom.
pub const ARC_RADIUS_WORLD: f64 = 120.0;

/// Below this on-screen arc radius (pixels) the angle label moves outside
/// the triangle, where it no longer collides with the arc.
pub const MIN_READABLE_ARC_PX: f64 = 40.0;

/// Fraction of the vertex-to-centroid segment used to offset angle labels.
pub const LABEL_OFFSET_RATIO: f64 = 0.15;

/// Vertex marker radius in screen pixels (divided by zoom when drawn).
pub const POINT_MARKER_PX: f64 = 5.0;
