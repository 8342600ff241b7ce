//! ringo-route: Pure route planning for orchard survey snapshots (sans-IO).
//!
//! Turns a world-map snapshot (an origin tag plus apple detections,
//! positioned in millimeters) into an ordered visit route with
//! per-segment travel statistics:
//! origin lookup -> nearest-origin ordering -> mm-to-m deltas ->
//! directional drift adjustment -> accumulated totals.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! JSON text and returns structured data. File reading and terminal
//! output live in the `ringo` CLI crate; report formatting lives in
//! `ringo-report`.

pub mod order;
pub mod segment;
pub mod snapshot;
pub mod types;

pub use segment::{Axial, Direction, Lateral, Segment};
pub use snapshot::{Marker, ORIGIN_TAG, Snapshot};
pub use types::{DriftConfig, PathNode, Point, Route, RouteError};

/// Plan the full visit route for a snapshot.
///
/// # Steps
///
/// 1. Look up the origin tag (id `"0"`)
/// 2. Validate that every position is finite
/// 3. Order apples by increasing distance from the origin (stable)
/// 4. Compute per-segment deltas with drift adjustment
/// 5. Accumulate raw and adjusted totals
///
/// A snapshot with no apples yields a single-node route with no
/// segments and zero totals.
///
/// # Errors
///
/// Returns [`RouteError::MissingOrigin`] if no tag is keyed `"0"`, and
/// [`RouteError::NonFiniteCoordinate`] if any position holds a NaN or
/// infinite coordinate. Either failure aborts planning before any
/// segment is computed.
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
/// let route = ringo_route::plan(&snapshot, &DriftConfig::default())?;
///
/// assert_eq!(route.segments.len(), 1);
/// assert!((route.total_raw_m - 1.0).abs() < 1e-9);
/// assert!((route.total_adjusted_m - 1.15).abs() < 1e-9);
/// # Ok::<(), ringo_route::RouteError>(())
/// ```
pub fn plan(snapshot: &Snapshot, config: &DriftConfig) -> Result<Route, RouteError> {
    // 1. The origin tag is mandatory.
    let origin = snapshot.origin()?;

    // 2. Finite-position invariant.
    snapshot.validate_finite()?;

    // 3. Nearest-origin visit order.
    let nodes = order::visit_order(origin, &snapshot.apple_positions());

    // 4. Per-segment travel statistics.
    let segments: Vec<Segment> = nodes
        .windows(2)
        .map(|pair| segment::compute(&pair[0], &pair[1], config))
        .collect();

    // 5. Accumulated totals.
    let total_raw_m = segments.iter().map(|s| s.distance_m).sum();
    let total_adjusted_m = segments.iter().map(|s| s.adjusted_distance_m).sum();

    Ok(Route {
        nodes,
        segments,
        total_raw_m,
        total_adjusted_m,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn orchard_json() -> &'static str {
        r#"{
            "tags": { "0": { "center_mm": [0.0, 0.0] } },
            "apples": [
                { "center_mm": [1500.0, -2200.0] },
                { "center_mm": [400.0, 300.0] },
                { "center_mm": [-800.0, 600.0] },
                { "center_mm": [2500.0, 1800.0] },
                { "center_mm": [0.0, -900.0] }
            ]
        }"#
    }

    #[test]
    fn plan_builds_one_segment_per_consecutive_pair() {
        let snapshot = Snapshot::from_json(orchard_json()).unwrap();
        let route = plan(&snapshot, &DriftConfig::default()).unwrap();
        assert_eq!(route.nodes.len(), 6);
        assert_eq!(route.segments.len(), 5);
        assert_eq!(route.nodes[0].label, "Tag0");
        assert_eq!(route.segments[0].from, "Tag0");
        assert_eq!(route.segments[0].to, "P1");
        assert_eq!(route.segments[4].to, "P5");
    }

    #[test]
    fn totals_equal_the_sum_of_segment_distances() {
        let snapshot = Snapshot::from_json(orchard_json()).unwrap();
        let route = plan(&snapshot, &DriftConfig::default()).unwrap();

        let raw_sum: f64 = route.segments.iter().map(|s| s.distance_m).sum();
        let adjusted_sum: f64 = route.segments.iter().map(|s| s.adjusted_distance_m).sum();
        assert!((route.total_raw_m - raw_sum).abs() < TOLERANCE);
        assert!((route.total_adjusted_m - adjusted_sum).abs() < TOLERANCE);
    }

    #[test]
    fn missing_origin_aborts_before_any_segment_math() {
        let snapshot = Snapshot::from_json(
            r#"{"tags": {}, "apples": [{"center_mm": [1.0, 2.0]}]}"#,
        )
        .unwrap();
        let result = plan(&snapshot, &DriftConfig::default());
        assert!(matches!(result, Err(RouteError::MissingOrigin)));
    }

    #[test]
    fn non_finite_apple_aborts_planning() {
        let snapshot = Snapshot::from_json(
            r#"{"tags": {"0": {"center_mm": [0.0, 0.0]}}, "apples": []}"#,
        )
        .map(|mut s| {
            s.apples.push(Marker {
                center_mm: [f64::NAN, 0.0],
            });
            s
        })
        .unwrap();
        let result = plan(&snapshot, &DriftConfig::default());
        assert!(matches!(result, Err(RouteError::NonFiniteCoordinate(_))));
    }

    #[test]
    fn snapshot_without_apples_yields_empty_route() {
        let snapshot = Snapshot::from_json(
            r#"{"tags": {"0": {"center_mm": [100.0, 200.0]}}, "apples": []}"#,
        )
        .unwrap();
        let route = plan(&snapshot, &DriftConfig::default()).unwrap();
        assert_eq!(route.nodes.len(), 1);
        assert!(route.segments.is_empty());
        assert!(route.total_raw_m.abs() < TOLERANCE);
        assert!(route.total_adjusted_m.abs() < TOLERANCE);
    }

    #[test]
    fn custom_config_changes_adjusted_total_only() {
        let snapshot = Snapshot::from_json(orchard_json()).unwrap();
        let default_route = plan(&snapshot, &DriftConfig::default()).unwrap();
        let unity = DriftConfig {
            left_factor: 1.0,
            right_factor: 1.0,
            axial_factor: 1.0,
        };
        let unity_route = plan(&snapshot, &unity).unwrap();

        assert!((default_route.total_raw_m - unity_route.total_raw_m).abs() < TOLERANCE);
        // With unity factors, the adjusted total collapses onto the raw total.
        assert!((unity_route.total_adjusted_m - unity_route.total_raw_m).abs() < TOLERANCE);
        assert!(
            (default_route.total_adjusted_m - default_route.total_raw_m).abs() > TOLERANCE,
            "default factors should change the adjusted total",
        );
    }

    #[test]
    fn origin_offset_is_respected() {
        // Origin away from (0,0): distances are measured from the tag,
        // not from the coordinate origin.
        let snapshot = Snapshot::from_json(
            r#"{
                "tags": { "0": { "center_mm": [10000.0, 0.0] } },
                "apples": [
                    { "center_mm": [0.0, 0.0] },
                    { "center_mm": [9000.0, 0.0] }
                ]
            }"#,
        )
        .unwrap();
        let route = plan(&snapshot, &DriftConfig::default()).unwrap();
        // (9000, 0) is 1 m from the tag; (0, 0) is 10 m away.
        assert_eq!(route.nodes[1].position, Point::new(9000.0, 0.0));
        assert_eq!(route.nodes[2].position, Point::new(0.0, 0.0));
    }
}
