//! World-map snapshot: data model and JSON parsing.
//!
//! A snapshot is the merged output of an orchard survey pass: a map of
//! reference tags keyed by id, plus a list of apple detections, all
//! positioned in millimeters:
//!
//! ```json
//! {
//!   "tags": { "0": { "center_mm": [0.0, 0.0] } },
//!   "apples": [ { "center_mm": [1500.0, -2200.0] } ]
//! }
//! ```
//!
//! Tag `"0"` is the mandatory coordinate origin. Unknown top-level
//! fields are ignored; missing `tags`/`apples` keys default to empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Point, RouteError};

/// Id of the mandatory origin tag.
pub const ORIGIN_TAG: &str = "0";

/// A single detected marker: a tag or an apple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Center position in millimeters, `[x, y]`.
    pub center_mm: [f64; 2],
}

impl Marker {
    /// The marker's center as a [`Point`].
    #[must_use]
    pub const fn position(self) -> Point {
        Point::new(self.center_mm[0], self.center_mm[1])
    }
}

/// A world-map snapshot: reference tags plus apple detections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Reference tags keyed by id. Tag [`ORIGIN_TAG`] is the origin.
    #[serde(default)]
    pub tags: HashMap<String, Marker>,

    /// Apple detections, in detection order.
    #[serde(default)]
    pub apples: Vec<Marker>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Parse`] when the text is not a valid
    /// snapshot document.
    pub fn from_json(text: &str) -> Result<Self, RouteError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Position of the origin tag.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingOrigin`] when no tag is keyed
    /// [`ORIGIN_TAG`].
    pub fn origin(&self) -> Result<Point, RouteError> {
        self.tags
            .get(ORIGIN_TAG)
            .map(|marker| marker.position())
            .ok_or(RouteError::MissingOrigin)
    }

    /// Apple positions in detection order.
    #[must_use]
    pub fn apple_positions(&self) -> Vec<Point> {
        self.apples.iter().map(|marker| marker.position()).collect()
    }

    /// Check that every tag and apple position is finite.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NonFiniteCoordinate`] naming the first
    /// offending marker.
    pub fn validate_finite(&self) -> Result<(), RouteError> {
        for (id, marker) in &self.tags {
            if !marker.position().is_finite() {
                return Err(RouteError::NonFiniteCoordinate(format!("tag \"{id}\"")));
            }
        }
        for (index, marker) in self.apples.iter().enumerate() {
            if !marker.position().is_finite() {
                return Err(RouteError::NonFiniteCoordinate(format!("apple {index}")));
            }
        }
        Ok(())
    }
}
