//! The triangle record: the single transient document this engine renders.
//!
//! The input form page serializes three points as JSON and writes them to
//! the shared key-value store under [`STORAGE_KEY`]. This module owns the
//! wire format and its parsing; it performs no range validation — the form
//! page is the validator, and a degenerate triangle is rendered as-is.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Point;

/// Key under which the form page stores the serialized points.
pub const STORAGE_KEY: &str = "trianglePoints";

/// Why a stored triangle record could not be loaded.
///
/// Both variants are presented to the user identically (the on-canvas
/// placeholder message); the distinction exists for the host to log.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No record under [`STORAGE_KEY`].
    #[error("no triangle data found in storage")]
    Missing,
    /// A record exists but is not the expected JSON shape.
    #[error("stored triangle data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Three points in world coordinates, immutable for a rendering session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    /// Parse the stored wire format: `{"p1":{"x":..,"y":..},"p2":..,"p3":..}`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Malformed`] when `raw` is not valid JSON of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The mean of the three vertices. Derived on demand, never stored.
    #[must_use]
    pub fn centroid(&self) -> Point {
        Point {
            x: (self.p1.x + self.p2.x + self.p3.x) / 3.0,
            y: (self.p1.y + self.p2.y + self.p3.y) / 3.0,
        }
    }

    /// Vertices in input order.
    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }
}
