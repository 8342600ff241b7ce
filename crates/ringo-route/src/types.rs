//! Shared types for the ringo route planner.

use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// A 2D position in world coordinates.
///
/// Snapshot positions are stored in millimeters; segment computation
/// converts deltas to meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position. Positive X is reported as "Left" under the
    /// drone-view axis convention.
    pub x: f64,
    /// Axial position. Positive Y is "Forward".
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// `true` when both coordinates are finite (no NaN, no infinities).
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A labeled stop on the route.
///
/// The origin tag is labeled `"Tag0"`; apples are labeled `"P1"`,
/// `"P2"`, ... in visit order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    /// Human-readable node label.
    pub label: String,
    /// Position in millimeters.
    pub position: Point,
}

/// Drift calibration factors applied to raw segment deltas.
///
/// These are rig-specific calibration constants: the survey drone
/// drifts rightward, so rightward motion is damped and leftward motion
/// is boosted to compensate, while all axial (Y) motion is scaled by a
/// single factor. The asymmetry is an opaque property of the physical
/// rig, not something to normalize away.
///
/// Remember the flipped X axis: `dx > 0` is *leftward* motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Scale applied to leftward motion (`dx > 0`).
    pub left_factor: f64,
    /// Scale applied to rightward motion (`dx < 0`).
    pub right_factor: f64,
    /// Scale applied to all forward/backward (Y axis) motion.
    pub axial_factor: f64,
}

impl DriftConfig {
    /// Default boost for leftward motion.
    pub const DEFAULT_LEFT_FACTOR: f64 = 1.15;
    /// Default damping for rightward motion.
    pub const DEFAULT_RIGHT_FACTOR: f64 = 0.5;
    /// Default scale for axial motion.
    pub const DEFAULT_AXIAL_FACTOR: f64 = 0.85;
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            left_factor: Self::DEFAULT_LEFT_FACTOR,
            right_factor: Self::DEFAULT_RIGHT_FACTOR,
            axial_factor: Self::DEFAULT_AXIAL_FACTOR,
        }
    }
}

/// A fully planned route: ordered stops, per-leg statistics, and
/// accumulated totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Visit order: origin first, then apples by increasing distance
    /// from the origin.
    pub nodes: Vec<PathNode>,
    /// One segment per consecutive node pair (`nodes.len() - 1`
    /// entries, or none for a single-node route).
    pub segments: Vec<Segment>,
    /// Sum of raw segment distances in meters.
    pub total_raw_m: f64,
    /// Sum of drift-adjusted segment distances in meters.
    pub total_adjusted_m: f64,
}

/// Errors that can occur while planning a route.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The snapshot has no origin tag keyed `"0"`.
    #[error("origin tag \"0\" not found in snapshot")]
    MissingOrigin,

    /// The snapshot JSON could not be parsed.
    #[error("failed to parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tag or apple position holds a NaN or infinite coordinate.
    #[error("non-finite coordinate in {0}")]
    NonFiniteCoordinate(String),
}
