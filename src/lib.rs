//! Triangle angle viewer: geometry and canvas rendering engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It reads
//! three user-entered points from `localStorage`, computes the triangle's
//! interior angles, and draws the annotated triangle on a 2D canvas with
//! interactive zoom/pan and coordinate rulers. The host JavaScript layer is
//! responsible only for wiring DOM events to the engine and for the input
//! form page that produces the stored points.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | The stored triangle record and its JSON parsing |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`geometry`] | Angle, distance, and bearing math |
//! | [`annotate`] | Interior-angle arc sweeps and label placement |
//! | [`input`] | Pointer/wheel event types and the drag state machine |
//! | [`ruler`] | Tick-position computation for the coordinate rulers |
//! | [`render`] | Scene and ruler rendering to a 2D context |
//! | [`consts`] | Shared numeric constants (zoom limits, arc radius, etc.) |

pub mod annotate;
pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod render;
pub mod ruler;
