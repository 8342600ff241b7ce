//! Integration test: plan the example orchard snapshot and render the
//! full segment report.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use ringo_route::{DriftConfig, Snapshot};

#[test]
fn orchard_snapshot_to_report() {
    // Locate the example snapshot relative to the workspace root.
    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    let snapshot_path = workspace_root.join("assets/examples/orchard.json");
    assert!(
        snapshot_path.exists(),
        "example snapshot not found at {snapshot_path:?}"
    );

    let text = std::fs::read_to_string(&snapshot_path).unwrap();
    let snapshot = Snapshot::from_json(&text).expect("snapshot should parse");
    eprintln!(
        "Loaded orchard.json: {} tags, {} apples",
        snapshot.tags.len(),
        snapshot.apples.len(),
    );

    let config = DriftConfig::default();
    let route = ringo_route::plan(&snapshot, &config).expect("planning should succeed");

    // Five apples -> six nodes, five segments.
    assert_eq!(route.nodes.len(), 6);
    assert_eq!(route.segments.len(), 5);

    // Nearest apple first: (400, 300) is 500 mm from the origin.
    assert_eq!(route.nodes[1].label, "P1");
    assert!((route.nodes[1].position.x - 400.0).abs() < 1e-9);
    assert!((route.nodes[1].position.y - 300.0).abs() < 1e-9);

    // Distances from the origin never decrease along the route.
    let origin = route.nodes[0].position;
    for pair in route.nodes[1..].windows(2) {
        assert!(pair[0].position.distance(origin) <= pair[1].position.distance(origin));
    }

    let report = ringo_report::to_report(&route, &config);

    // Structural assertions on the rendered report.
    assert!(report.contains("PATH SEGMENT REPORT"));
    assert!(report.contains("Segment 1: Tag0 → P1"));
    assert!(report.contains("Segment 5: P4 → P5"));
    assert!(report.contains("TOTAL PATH LENGTH (raw):"));
    assert!(report.contains("TOTAL PATH LENGTH (after directional drift):"));
    assert!(report.contains("Axis Reference (Drone View):"));

    eprintln!("{report}");
}
