//! Input model: mouse buttons, wheel deltas, and the drag state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. Panning anchors to the pointer's initial position minus the
//! pan at grab time, so pointer motion translates the view relatively rather
//! than absolutely. Wheel zoom is handled outside this machine and never
//! transitions it.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down = zoom out).
    pub dy: f64,
}

/// The gesture state machine. No terminal state — it lives for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is panning by dragging.
    Dragging {
        /// Pointer position at grab time minus the pan at grab time.
        /// During the drag, `pan = pointer - grab`.
        grab: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
