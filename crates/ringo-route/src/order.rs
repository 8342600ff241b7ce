//! Visit ordering: origin first, then apples by distance from it.
//!
//! The route is a simple ordered list, not a graph. Apples are visited
//! in order of increasing Euclidean distance from the origin tag, with
//! ties kept in detection order. Labels follow the visit order:
//! `Tag0`, `P1`, `P2`, ...

use crate::types::{PathNode, Point};

/// Label of the origin node.
pub const ORIGIN_LABEL: &str = "Tag0";

/// Build the visit order for a set of apple positions.
///
/// The origin is always the first node. Apples are sorted by increasing
/// distance from the origin; comparing squared distances gives the same
/// order without the square root. The sort is stable, so equidistant
/// apples keep their detection order.
#[must_use = "returns the ordered visit route"]
pub fn visit_order(origin: Point, apples: &[Point]) -> Vec<PathNode> {
    let mut sorted: Vec<Point> = apples.to_vec();
    sorted.sort_by(|a, b| {
        a.distance_squared(origin)
            .partial_cmp(&b.distance_squared(origin))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut nodes = Vec::with_capacity(sorted.len() + 1);
    nodes.push(PathNode {
        label: ORIGIN_LABEL.to_owned(),
        position: origin,
    });
    nodes.extend(sorted.into_iter().enumerate().map(|(i, position)| PathNode {
        label: format!("P{}", i + 1),
        position,
    }));
    nodes
}
