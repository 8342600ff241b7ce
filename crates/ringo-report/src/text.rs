//! Segment report serializer.
//!
//! Renders a planned route as a plain-text report: a framed title, one
//! block per segment (raw and adjusted deltas with the drift
//! annotation taken, raw and adjusted distance, direction), grand
//! totals, and the axis reference legend.
//!
//! Distances are printed with six decimal places. The per-axis drift
//! annotations are derived from the configured factors, so a
//! recalibrated rig reports its actual numbers.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use std::fmt::Write;

use ringo_route::{DriftConfig, Route};

/// Width of the `=` rule lines framing the report.
const RULE_WIDTH: usize = 75;

/// Serialize a planned route into the segment report text.
///
/// # Examples
///
/// ```
/// use ringo_route::{DriftConfig, Snapshot};
///
/// let snapshot = Snapshot::from_json(
///     r#"{"tags": {"0": {"center_mm": [0.0, 0.0]}},
///         "apples": [{"center_mm": [1000.0, 0.0]}]}"#,
/// )?;
/// let config = DriftConfig::default();
/// let route = ringo_route::plan(&snapshot, &config)?;
///
/// let report = ringo_report::to_report(&route, &config);
/// assert!(report.contains("Segment 1: Tag0 → P1"));
/// assert!(report.contains("Direction: ← Left"));
/// # Ok::<(), ringo_route::RouteError>(())
/// ```
#[must_use]
pub fn to_report(route: &Route, config: &DriftConfig) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "PATH SEGMENT REPORT (in meters, high precision, directional drift applied)",
    );
    let _ = writeln!(out, "{rule}");

    for (i, segment) in route.segments.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Segment {}: {} → {}", i + 1, segment.from, segment.to);
        let _ = writeln!(
            out,
            "   Δx = {:+.6} m  |  Adjusted: {:+.6} m  ({})",
            segment.dx_m,
            segment.dx_adjusted_m,
            lateral_note(segment.dx_m, config),
        );
        let _ = writeln!(
            out,
            "   Δy = {:+.6} m  |  Adjusted: {:+.6} m  (Vertical drift {}×)",
            segment.dy_m, segment.dy_adjusted_m, config.axial_factor,
        );
        let _ = writeln!(out, "   Distance = {:.6} m", segment.distance_m);
        let _ = writeln!(
            out,
            "   Adjusted Distance = {:.6} m",
            segment.adjusted_distance_m,
        );
        let _ = writeln!(out, "   Direction: {}", segment.direction);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "TOTAL PATH LENGTH (raw): {:.6} m", route.total_raw_m);
    let _ = writeln!(
        out,
        "TOTAL PATH LENGTH (after directional drift): {:.6} m",
        route.total_adjusted_m,
    );
    let _ = writeln!(out, "{rule}");

    // Axis legend: the X axis is flipped for the drone camera view.
    let _ = writeln!(out);
    let _ = writeln!(out, "Axis Reference (Drone View):");
    let _ = writeln!(out, "   +X → Left");
    let _ = writeln!(out, "   -X → Right");
    let _ = writeln!(out, "   +Y → Forward");
    let _ = writeln!(out, "   -Y → Backward");

    out
}

/// Annotation for the lateral drift branch a segment took.
fn lateral_note(dx_m: f64, config: &DriftConfig) -> String {
    if dx_m < 0.0 {
        format!("Right drift ({}×)", config.right_factor)
    } else if dx_m > 0.0 {
        format!("Left boosted ({}×)", config.left_factor)
    } else {
        "No horizontal drift".to_owned()
    }
}
