//! Visibility-graph construction.

use crate::core::Coords;
use crate::obstacles::Obstacle;

use super::AdjacencyList;

/// Build the visibility graph over the candidate vertices.
///
/// For every unordered pair of candidates, the edge exists iff the
/// connecting segment crosses no enabled obstacle; its weight is the
/// Euclidean distance. Both directions are recorded, so the adjacency
/// list is symmetric by construction.
///
/// Complexity is O(V² · O); V stays in the tens for a playing field, so
/// the quadratic scan is not worth refining.
pub fn build_visibility_graph(points: &[Coords], obstacles: &[Obstacle]) -> AdjacencyList {
    let n = points.len();
    let mut edges: AdjacencyList = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            let blocked = obstacles
                .iter()
                .any(|o| o.enabled() && o.crosses_segment(&points[i], &points[j]));
            if blocked {
                continue;
            }

            let distance = points[i].distance(&points[j]);
            edges[i].push((j, distance));
            edges[j].push((i, distance));
        }
    }

    log::debug!(
        "build_visibility_graph: {} vertices, {} edges",
        n,
        edges.iter().map(Vec::len).sum::<usize>() / 2
    );

    edges
}
