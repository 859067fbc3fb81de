//! Rendering: draws the annotated triangle and the rulers to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! session and camera state and produces pixels — it does not mutate any
//! application state.
//!
//! The scene is drawn entirely in world space inside a single
//! save/translate/scale/restore bracket, so every annotation scales
//! uniformly with zoom. Anything that should stay visually constant-width
//! under zoom (stroke widths, font sizes, marker radii) divides by the zoom
//! factor before drawing.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the top-level caller ([`crate::engine::Engine`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::annotate::{interior_arc_sweep, label_anchor};
use crate::camera::{Camera, Point};
use crate::consts::{ARC_RADIUS_WORLD, POINT_MARKER_PX};
use crate::doc::Triangle;
use crate::geometry::AngleSet;
use crate::ruler::{Axis, tick_positions};

/// Triangle outline color and stroke width (screen pixels).
const TRIANGLE_STROKE: &str = "#333";
const TRIANGLE_WIDTH_PX: f64 = 2.0;

/// Angle arc / angle label color and arc stroke width (screen pixels).
const ANGLE_COLOR: &str = "#4CAF50";
const ARC_WIDTH_PX: f64 = 1.5;
const ANGLE_FONT_PX: f64 = 16.0;

/// Vertex marker fill and label styling.
const POINT_COLOR: &str = "#f44336";
const POINT_LABEL_COLOR: &str = "#333";
const POINT_FONT_PX: f64 = 14.0;
const POINT_LABEL_RISE_PX: f64 = 15.0;

/// Ruler styling.
const RULER_TICK_COLOR: &str = "#999";
const RULER_LABEL_COLOR: &str = "#555";
const RULER_TICK_LEN: f64 = 6.0;

/// Shown when no stored points were found for this session.
const NO_DATA_MESSAGE: &str = "No triangle data found. Please go back and enter points.";

/// Draw the full scene, or the placeholder message when no session is loaded.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device
/// pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    triangle: Option<&Triangle>,
    angles: Option<&AngleSet>,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    let (Some(triangle), Some(angles)) = (triangle, angles) else {
        return draw_no_data(ctx, viewport_w, viewport_h);
    };

    // One transform bracket for the whole scene: everything below draws in
    // world coordinates.
    ctx.save();
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    draw_triangle_outline(ctx, triangle, camera.zoom);

    let centroid = triangle.centroid();
    let arc_radius_screen = camera.world_dist_to_screen(ARC_RADIUS_WORLD);
    let per_vertex = [
        (triangle.p1, triangle.p2, triangle.p3, angles.at_p1),
        (triangle.p2, triangle.p1, triangle.p3, angles.at_p2),
        (triangle.p3, triangle.p1, triangle.p2, angles.at_p3),
    ];
    for (vertex, n1, n2, angle) in per_vertex {
        draw_angle_arc(ctx, vertex, n1, n2, camera.zoom)?;
        draw_angle_label(ctx, vertex, centroid, angle, arc_radius_screen, camera.zoom)?;
    }

    for (vertex, name) in [(triangle.p1, "P1"), (triangle.p2, "P2"), (triangle.p3, "P3")] {
        draw_point_marker(ctx, vertex, name, camera.zoom)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_no_data(ctx: &CanvasRenderingContext2d, viewport_w: f64, viewport_h: f64) -> Result<(), JsValue> {
    ctx.set_font("20px sans-serif");
    ctx.set_fill_style_str(POINT_LABEL_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(NO_DATA_MESSAGE, viewport_w * 0.5, viewport_h * 0.5)?;
    Ok(())
}

fn draw_triangle_outline(ctx: &CanvasRenderingContext2d, triangle: &Triangle, zoom: f64) {
    ctx.begin_path();
    ctx.move_to(triangle.p1.x, triangle.p1.y);
    ctx.line_to(triangle.p2.x, triangle.p2.y);
    ctx.line_to(triangle.p3.x, triangle.p3.y);
    ctx.close_path();
    ctx.set_stroke_style_str(TRIANGLE_STROKE);
    ctx.set_line_width(TRIANGLE_WIDTH_PX / zoom);
    ctx.stroke();
}

fn draw_angle_arc(
    ctx: &CanvasRenderingContext2d,
    vertex: Point,
    neighbor1: Point,
    neighbor2: Point,
    zoom: f64,
) -> Result<(), JsValue> {
    let sweep = interior_arc_sweep(vertex, neighbor1, neighbor2);
    ctx.begin_path();
    ctx.arc(vertex.x, vertex.y, ARC_RADIUS_WORLD, sweep.start, sweep.end)?;
    ctx.set_stroke_style_str(ANGLE_COLOR);
    ctx.set_line_width(ARC_WIDTH_PX / zoom);
    ctx.stroke();
    Ok(())
}

fn draw_angle_label(
    ctx: &CanvasRenderingContext2d,
    vertex: Point,
    centroid: Point,
    angle_deg: f64,
    arc_radius_screen: f64,
    zoom: f64,
) -> Result<(), JsValue> {
    let anchor = label_anchor(vertex, centroid, arc_radius_screen);
    ctx.set_font(&format!("bold {:.2}px sans-serif", ANGLE_FONT_PX / zoom));
    ctx.set_fill_style_str(ANGLE_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&format_angle(angle_deg), anchor.pos.x, anchor.pos.y)?;
    Ok(())
}

/// Angle text with one decimal place. A degenerate triangle yields `NaN`
/// angles; those render as an em dash rather than "NaN°".
fn format_angle(angle_deg: f64) -> String {
    if angle_deg.is_nan() {
        "—".to_owned()
    } else {
        format!("{angle_deg:.1}°")
    }
}

fn draw_point_marker(
    ctx: &CanvasRenderingContext2d,
    point: Point,
    name: &str,
    zoom: f64,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(point.x, point.y, POINT_MARKER_PX / zoom, 0.0, 2.0 * std::f64::consts::PI)?;
    ctx.set_fill_style_str(POINT_COLOR);
    ctx.fill();

    ctx.set_font(&format!("{:.2}px sans-serif", POINT_FONT_PX / zoom));
    ctx.set_fill_style_str(POINT_LABEL_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.fill_text(name, point.x, point.y - POINT_LABEL_RISE_PX / zoom)?;
    Ok(())
}

/// Re-draw one ruler strip from the current camera.
///
/// `length` is the ruler's extent along its axis and `thickness` across it,
/// both in pixels. Tick values are world coordinates; marks sit at the edge
/// shared with the main canvas.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_ruler(
    ctx: &CanvasRenderingContext2d,
    camera: Camera,
    axis: Axis,
    length: f64,
    thickness: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    match axis {
        Axis::X => ctx.clear_rect(0.0, 0.0, length, thickness),
        Axis::Y => ctx.clear_rect(0.0, 0.0, thickness, length),
    }

    ctx.set_stroke_style_str(RULER_TICK_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_fill_style_str(RULER_LABEL_COLOR);
    ctx.set_font("10px sans-serif");

    for tick in tick_positions(camera, axis, length) {
        let label = format!("{:.0}", tick.value);
        ctx.begin_path();
        match axis {
            Axis::X => {
                ctx.move_to(tick.screen, thickness - RULER_TICK_LEN);
                ctx.line_to(tick.screen, thickness);
                ctx.stroke();
                ctx.set_text_align("center");
                ctx.set_text_baseline("alphabetic");
                ctx.fill_text(&label, tick.screen, thickness - RULER_TICK_LEN - 2.0)?;
            }
            Axis::Y => {
                ctx.move_to(thickness - RULER_TICK_LEN, tick.screen);
                ctx.line_to(thickness, tick.screen);
                ctx.stroke();
                ctx.set_text_align("right");
                ctx.set_text_baseline("middle");
                ctx.fill_text(&label, thickness - RULER_TICK_LEN - 2.0, tick.screen)?;
            }
        }
    }
    Ok(())
}
