#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// --- distance ---

#[test]
fn distance_three_four_five() {
    assert!(approx_eq(distance(pt(0.0, 0.0), pt(3.0, 4.0)), 5.0));
}

#[test]
fn distance_is_symmetric() {
    let a = pt(12.5, 700.0);
    let b = pt(430.0, 8.25);
    assert_eq!(distance(a, b), distance(b, a));
}

#[test]
fn distance_of_coincident_points_is_zero() {
    let p = pt(100.0, 100.0);
    assert_eq!(distance(p, p), 0.0);
}

// --- angle_at_vertex ---

#[test]
fn right_isoceles_angles() {
    let p1 = pt(0.0, 0.0);
    let p2 = pt(100.0, 0.0);
    let p3 = pt(0.0, 100.0);
    assert!(approx_eq(angle_at_vertex(p1, p2, p3), 90.0));
    assert!(approx_eq(angle_at_vertex(p2, p1, p3), 45.0));
    assert!(approx_eq(angle_at_vertex(p3, p1, p2), 45.0));
}

#[test]
fn angle_is_symmetric_in_neighbor_order() {
    let v = pt(50.0, 80.0);
    let a = pt(300.0, 20.0);
    let b = pt(120.0, 640.0);
    assert_eq!(angle_at_vertex(v, a, b), angle_at_vertex(v, b, a));
}

#[test]
fn coincident_vertex_yields_nan() {
    let v = pt(10.0, 10.0);
    // Vertex coincides with one neighbor: zero-length edge vector.
    assert!(angle_at_vertex(v, v, pt(50.0, 50.0)).is_nan());
    assert!(angle_at_vertex(v, pt(50.0, 50.0), v).is_nan());
    // All three coincident.
    assert!(angle_at_vertex(v, v, v).is_nan());
}

#[test]
fn collinear_points_yield_flat_or_zero_angle_not_nan() {
    // Vertex between the neighbors: the edges point opposite ways (180°).
    let flat = angle_at_vertex(pt(100.0, 100.0), pt(0.0, 0.0), pt(200.0, 200.0));
    assert!(approx_eq(flat, 180.0));
    // Vertex on one end: the edges point the same way (0°). The acos
    // argument is exactly ±1 up to rounding; the clamp keeps this defined.
    let zero = angle_at_vertex(pt(0.0, 0.0), pt(100.0, 100.0), pt(200.0, 200.0));
    assert!(approx_eq(zero, 0.0));
}

#[test]
fn equilateral_angles_are_sixty() {
    let p1 = pt(0.0, 0.0);
    let p2 = pt(200.0, 0.0);
    let p3 = pt(100.0, 100.0 * 3.0_f64.sqrt());
    assert!(approx_eq(angle_at_vertex(p1, p2, p3), 60.0));
    assert!(approx_eq(angle_at_vertex(p2, p1, p3), 60.0));
    assert!(approx_eq(angle_at_vertex(p3, p1, p2), 60.0));
}

// --- triangle_angles ---

#[test]
fn triangle_angles_match_per_vertex_calls() {
    let (p1, p2, p3) = (pt(10.0, 20.0), pt(640.0, 80.0), pt(300.0, 750.0));
    let set = triangle_angles(p1, p2, p3);
    assert_eq!(set.at_p1, angle_at_vertex(p1, p2, p3));
    assert_eq!(set.at_p2, angle_at_vertex(p2, p1, p3));
    assert_eq!(set.at_p3, angle_at_vertex(p3, p1, p2));
}

#[test]
fn angle_sum_is_180_for_non_degenerate_triangles() {
    let cases = [
        (pt(0.0, 0.0), pt(100.0, 0.0), pt(0.0, 100.0)),
        (pt(12.0, 34.0), pt(756.0, 2.0), pt(400.0, 799.0)),
        (pt(0.1, 0.2), pt(0.3, 700.0), pt(799.9, 350.0)),
        (pt(500.0, 500.0), pt(501.0, 500.0), pt(500.5, 501.0)),
    ];
    for (p1, p2, p3) in cases {
        let set = triangle_angles(p1, p2, p3);
        let sum = set.at_p1 + set.at_p2 + set.at_p3;
        assert!(
            (sum - 180.0).abs() < 1e-6,
            "angle sum {sum} for {p1:?} {p2:?} {p3:?}"
        );
    }
}

#[test]
fn degenerate_triangle_propagates_nan() {
    let p = pt(400.0, 400.0);
    let set = triangle_angles(p, p, pt(10.0, 10.0));
    assert!(set.at_p1.is_nan());
    assert!(set.at_p2.is_nan());
    // The third vertex sees two coincident neighbors: defined, zero.
    assert!(approx_eq(set.at_p3, 0.0));
}

// --- vector_angle ---

#[test]
fn vector_angle_cardinal_directions() {
    let v = pt(100.0, 100.0);
    assert!(approx_eq(vector_angle(v, pt(200.0, 100.0)), 0.0));
    assert!(approx_eq(vector_angle(v, pt(100.0, 200.0)), PI / 2.0));
    assert!(approx_eq(vector_angle(v, pt(0.0, 100.0)), PI));
    assert!(approx_eq(vector_angle(v, pt(100.0, 0.0)), -PI / 2.0));
}

#[test]
fn vector_angle_is_a_bearing_not_an_interior_angle() {
    // Bearings depend on absolute direction; interior angles do not.
    let v = pt(0.0, 0.0);
    let a = vector_angle(v, pt(1.0, 1.0));
    assert!(approx_eq(a, PI / 4.0));
}

#[test]
fn vector_angle_stays_in_atan2_range() {
    let v = pt(400.0, 400.0);
    let targets = [
        pt(500.0, 401.0),
        pt(300.0, 401.0),
        pt(300.0, 399.0),
        pt(500.0, 399.0),
        pt(399.0, 400.0),
    ];
    for t in targets {
        let bearing = vector_angle(v, t);
        assert!(bearing > -PI && bearing <= PI, "bearing {bearing} out of range");
    }
}
