//! Top-level engine: session state, event handlers, and the browser wrapper.
//!
//! [`EngineCore`] holds everything that does not depend on the canvas
//! element — the loaded triangle, its precomputed angles, the camera, and
//! the drag state machine — so the full event flow is testable natively.
//! [`Engine`] wraps it with the browser pieces: the canvas element, the
//! `localStorage` read, and rendering.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::ZOOM_STEP;
use crate::doc::{LoadError, STORAGE_KEY, Triangle};
use crate::geometry::{self, AngleSet};
use crate::input::{Button, InputState, WheelDelta};
use crate::render;
use crate::ruler::Axis;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// State affecting pixels changed; the host should redraw canvas and rulers.
    RenderNeeded,
    /// The host should set the CSS cursor on the canvas element.
    SetCursor(String),
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    triangle: Option<Triangle>,
    angles: Option<AngleSet>,
    pub camera: Camera,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Load a session's points from the raw stored record.
    ///
    /// The angle set is computed once here; the points are immutable for the
    /// rest of the session. On failure the engine holds no triangle and the
    /// renderer falls back to the placeholder message — no geometry or
    /// transform work happens for an absent or malformed record, and a
    /// malformed record is treated exactly like an absent one.
    ///
    /// # Errors
    ///
    /// [`LoadError::Missing`] when `raw` is `None`, [`LoadError::Malformed`]
    /// when it does not parse.
    pub fn load_points(&mut self, raw: Option<&str>) -> Result<(), LoadError> {
        self.triangle = None;
        self.angles = None;
        let raw = raw.ok_or(LoadError::Missing)?;
        let triangle = Triangle::from_json(raw)?;
        self.angles = Some(geometry::triangle_angles(triangle.p1, triangle.p2, triangle.p3));
        self.triangle = Some(triangle);
        Ok(())
    }

    /// Update viewport dimensions (CSS pixels).
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
    }

    // --- Pointer events ---

    /// Primary-button press starts a pan gesture anchored at the pointer.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::Dragging {
            grab: Point::new(screen_pt.x - self.camera.pan_x, screen_pt.y - self.camera.pan_y),
        };
        vec![Action::SetCursor("grabbing".to_owned())]
    }

    /// While dragging, pan follows the pointer relative to the grab anchor.
    /// A move while idle is a no-op.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Dragging { grab } => {
                self.camera.pan_x = screen_pt.x - grab.x;
                self.camera.pan_y = screen_pt.y - grab.y;
                vec![Action::RenderNeeded]
            }
            InputState::Idle => Vec::new(),
        }
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    /// The pointer left the canvas mid-gesture; same as release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    fn end_drag(&mut self) -> Vec<Action> {
        if self.input == InputState::Idle {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("default".to_owned())]
    }

    // --- Zoom (independent of the drag state machine) ---

    /// Wheel zoom anchored at the pointer: scroll up zooms in, down zooms out.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let factor = if delta.dy < 0.0 {
            ZOOM_STEP
        } else if delta.dy > 0.0 {
            1.0 / ZOOM_STEP
        } else {
            return Vec::new();
        };
        if self.camera.zoom_at(screen_pt, factor) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Zoom-in button: one step anchored at the viewport center.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.zoom_center_step(ZOOM_STEP)
    }

    /// Zoom-out button: one reciprocal step anchored at the viewport center.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.zoom_center_step(1.0 / ZOOM_STEP)
    }

    fn zoom_center_step(&mut self, factor: f64) -> Vec<Action> {
        if self
            .camera
            .zoom_at_center(self.viewport_width, self.viewport_height, factor)
        {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Reset button: identity view.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.camera.reset();
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current camera state (read-only snapshot for renderer and rulers).
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The loaded triangle, if a session is active.
    #[must_use]
    pub fn triangle(&self) -> Option<&Triangle> {
        self.triangle.as_ref()
    }

    /// The session's precomputed interior angles, if a session is active.
    #[must_use]
    pub fn angles(&self) -> Option<&AngleSet> {
        self.angles.as_ref()
    }
}

/// The full engine. Wraps [`EngineCore`] and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
    dpr: f64,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new(), dpr: 1.0 }
    }

    /// Read the stored points record and load it into the core.
    ///
    /// A missing or malformed record is not an error at this level: it is
    /// logged to the console and leaves the engine in the "no data" state,
    /// which renders the placeholder message.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when the browser storage API itself fails.
    pub fn load_from_storage(&mut self) -> Result<(), JsValue> {
        let storage = match web_sys::window() {
            Some(window) => window.local_storage()?,
            None => None,
        };
        let raw = match storage {
            Some(storage) => storage.get_item(STORAGE_KEY)?,
            None => None,
        };
        if let Err(err) = self.core.load_points(raw.as_deref()) {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        }
        Ok(())
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css);
        self.dpr = dpr;
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.core.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.core.zoom_out()
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.core.reset_view()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a Canvas2D call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = context_2d(&self.canvas)?;
        render::draw(
            &ctx,
            self.core.triangle(),
            self.core.angles(),
            &self.core.camera,
            self.core.viewport_width,
            self.core.viewport_height,
            self.dpr,
        )
    }

    /// Re-populate one ruler canvas from the current camera.
    ///
    /// The ruler element is injected per call; it owns no transform state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a Canvas2D call fails.
    pub fn render_ruler(&self, ruler_canvas: &HtmlCanvasElement, axis: Axis) -> Result<(), JsValue> {
        let ctx = context_2d(ruler_canvas)?;
        let (length, thickness) = match axis {
            Axis::X => (f64::from(ruler_canvas.width()), f64::from(ruler_canvas.height())),
            Axis::Y => (f64::from(ruler_canvas.height()), f64::from(ruler_canvas.width())),
        };
        render::draw_ruler(&ctx, self.core.camera, axis, length, thickness)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn triangle(&self) -> Option<&Triangle> {
        self.core.triangle()
    }

    #[must_use]
    pub fn angles(&self) -> Option<&AngleSet> {
        self.core.angles()
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("element returned a non-2d context"))
}
