//! Per-segment travel statistics: mm-to-m deltas, directional drift
//! adjustment, and readable direction labels.
//!
//! The X axis is deliberately flipped for the drone camera view:
//! positive `dx` is reported as "Left", negative as "Right". The drift
//! factors are asymmetric per lateral direction; see
//! [`DriftConfig`](crate::types::DriftConfig).

use std::fmt;

use crate::types::{DriftConfig, PathNode};

/// Millimeters per meter; snapshot positions are stored in mm.
const MM_PER_M: f64 = 1000.0;

/// Deltas with magnitude below this (in meters) count as no movement.
pub const MOVEMENT_EPSILON: f64 = 1e-6;

/// Lateral motion component under the flipped X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lateral {
    /// Positive `dx`.
    Left,
    /// Negative `dx`.
    Right,
}

impl Lateral {
    /// Arrow-prefixed display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "← Left",
            Self::Right => "→ Right",
        }
    }
}

/// Axial (Y axis) motion component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axial {
    /// Positive `dy`.
    Forward,
    /// Negative `dy`.
    Backward,
}

impl Axial {
    /// Arrow-prefixed display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "↑ Forward",
            Self::Backward => "↓ Backward",
        }
    }
}

/// Readable motion direction of a segment.
///
/// Renders as the lateral label, the axial label, both space-joined,
/// or `"No movement"` when neither axis moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    /// Lateral component; `None` when `dx` is zero.
    pub lateral: Option<Lateral>,
    /// Axial component; `None` when `dy` is zero.
    pub axial: Option<Axial>,
}

impl Direction {
    /// Classify raw deltas (in meters) into a direction.
    ///
    /// When both deltas are within [`MOVEMENT_EPSILON`] of zero the
    /// segment counts as stationary. Otherwise each axis contributes
    /// its sign; a delta of exactly zero contributes nothing.
    #[must_use]
    pub fn from_deltas(dx: f64, dy: f64) -> Self {
        if dx.abs() < MOVEMENT_EPSILON && dy.abs() < MOVEMENT_EPSILON {
            return Self {
                lateral: None,
                axial: None,
            };
        }

        let lateral = if dx > 0.0 {
            Some(Lateral::Left)
        } else if dx < 0.0 {
            Some(Lateral::Right)
        } else {
            None
        };

        let axial = if dy > 0.0 {
            Some(Axial::Forward)
        } else if dy < 0.0 {
            Some(Axial::Backward)
        } else {
            None
        };

        Self { lateral, axial }
    }

    /// `true` when neither axis moved.
    #[must_use]
    pub const fn is_stationary(self) -> bool {
        self.lateral.is_none() && self.axial.is_none()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lateral, self.axial) {
            (None, None) => f.write_str("No movement"),
            (Some(lateral), None) => f.write_str(lateral.label()),
            (None, Some(axial)) => f.write_str(axial.label()),
            (Some(lateral), Some(axial)) => {
                write!(f, "{} {}", lateral.label(), axial.label())
            }
        }
    }
}

/// Travel statistics for one leg of the route.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Label of the departure node.
    pub from: String,
    /// Label of the arrival node.
    pub to: String,
    /// Raw X delta in meters (positive = leftward).
    pub dx_m: f64,
    /// Raw Y delta in meters (positive = forward).
    pub dy_m: f64,
    /// Drift-adjusted X delta in meters.
    pub dx_adjusted_m: f64,
    /// Drift-adjusted Y delta in meters.
    pub dy_adjusted_m: f64,
    /// Raw Euclidean length in meters.
    pub distance_m: f64,
    /// Drift-adjusted Euclidean length in meters.
    pub adjusted_distance_m: f64,
    /// Readable motion direction, derived from the raw deltas.
    pub direction: Direction,
}

/// Compute the travel statistics between two consecutive route nodes.
///
/// Positions are converted from millimeters to meters before the
/// deltas are taken. Drift adjustment is asymmetric on the lateral
/// axis: rightward motion (`dx < 0`) is scaled by
/// [`right_factor`](DriftConfig::right_factor), leftward motion
/// (`dx > 0`) by [`left_factor`](DriftConfig::left_factor), and a
/// zero delta passes through untouched. Axial motion is always scaled
/// by [`axial_factor`](DriftConfig::axial_factor).
#[must_use]
pub fn compute(from: &PathNode, to: &PathNode, config: &DriftConfig) -> Segment {
    let (x1, y1) = (from.position.x / MM_PER_M, from.position.y / MM_PER_M);
    let (x2, y2) = (to.position.x / MM_PER_M, to.position.y / MM_PER_M);

    let dx = x2 - x1;
    let dy = y2 - y1;

    let dx_adjusted = if dx < 0.0 {
        dx * config.right_factor
    } else if dx > 0.0 {
        dx * config.left_factor
    } else {
        dx
    };
    let dy_adjusted = dy * config.axial_factor;

    Segment {
        from: from.label.clone(),
        to: to.label.clone(),
        dx_m: dx,
        dy_m: dy,
        dx_adjusted_m: dx_adjusted,
        dy_adjusted_m: dy_adjusted,
        distance_m: dx.hypot(dy),
        adjusted_distance_m: dx_adjusted.hypot(dy_adjusted),
        direction: Direction::from_deltas(dx, dy),
    }
}
