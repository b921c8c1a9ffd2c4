//! Candidate-vertex selection.

use crate::core::Coords;
use crate::obstacles::{Obstacle, PolygonObstacle};

/// Collect the waypoint candidates for one plan.
///
/// The list is seeded with start and finish at indices 0 and 1. Every
/// enabled obstacle whose center lies inside the borders then contributes
/// the points of its inflated bounding box that are inside the borders and
/// not inside any other enabled obstacle.
///
/// Duplicates are allowed: coincident candidates produce parallel edges of
/// equal weight, which the shortest-path search is indifferent to.
pub fn collect_candidates(
    start: Coords,
    finish: Coords,
    obstacles: &[Obstacle],
    borders: &PolygonObstacle,
) -> Vec<Coords> {
    let mut points = vec![start, finish];

    for (i, obstacle) in obstacles.iter().enumerate() {
        if !obstacle.enabled() {
            continue;
        }
        if !borders.contains(&obstacle.center().coords()) {
            continue;
        }

        for p in obstacle.bounding_box() {
            if !borders.contains(p) {
                continue;
            }
            if inside_other_obstacle(p, obstacles, i) {
                continue;
            }
            points.push(*p);
        }
    }

    log::debug!(
        "collect_candidates: {} candidates from {} obstacles",
        points.len(),
        obstacles.len()
    );

    points
}

/// True iff `p` is inside an enabled obstacle other than `owner`.
fn inside_other_obstacle(p: &Coords, obstacles: &[Obstacle], owner: usize) -> bool {
    obstacles
        .iter()
        .enumerate()
        .any(|(j, o)| j != owner && o.enabled() && o.contains(p))
}
