//! Avoidance planner facade.
//!
//! Orchestrates candidate selection, visibility-graph construction and the
//! shortest-path search, and owns the resulting waypoint path. The planner
//! runs on a single caller thread; the only concurrency is the dynamic
//! obstacle list, which an external producer mutates through the
//! [`DynamicObstacles`] handle while `plan` reads snapshots.

use crate::core::Coords;
use crate::error::{Error, Result};
use crate::graph::{
    build_visibility_graph, collect_candidates, shortest_path, AdjacencyList, FINISH_INDEX,
    START_INDEX,
};
use crate::obstacles::{Obstacle, PolygonObstacle};
use crate::registry::{DynamicObstacles, ObstacleId, ObstacleRegistry};

/// Facade state after the last `plan` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannerState {
    /// No plan has been attempted yet.
    Idle,
    /// The last plan succeeded; a path is available.
    Ready,
    /// The last plan failed; the path is empty.
    Failed,
}

/// Visibility-graph avoidance planner.
///
/// See the crate documentation for a usage example.
#[derive(Debug)]
pub struct Planner {
    registry: ObstacleRegistry,
    start: Option<Coords>,
    finish: Option<Coords>,
    points: Vec<Coords>,
    graph: AdjacencyList,
    path: Vec<Coords>,
    state: PlannerState,
}

impl Planner {
    /// Create a planner for the given playing field borders.
    pub fn new(borders: PolygonObstacle) -> Self {
        Self {
            registry: ObstacleRegistry::new(borders),
            start: None,
            finish: None,
            points: Vec::new(),
            graph: Vec::new(),
            path: Vec::new(),
            state: PlannerState::Idle,
        }
    }

    /// Compute a collision-free path from `start` to `finish`.
    ///
    /// The call observes one consistent snapshot of the dynamic obstacle
    /// list, taken on entry. A start pose inside an obstacle is snapped to
    /// that obstacle's nearest boundary point; a finish pose outside the
    /// borders or inside an enabled obstacle aborts the plan.
    ///
    /// On success the path is queryable through [`Planner::path_len`] and
    /// [`Planner::path_pose`]; it excludes the start pose and ends with
    /// the finish pose. On failure the path is cleared.
    pub fn plan(&mut self, start: Coords, finish: Coords) -> Result<()> {
        self.state = PlannerState::Failed;
        self.start = None;
        self.finish = None;
        self.points.clear();
        self.graph.clear();
        self.path.clear();

        let obstacles = self.registry.snapshot();

        if !self.registry.borders().contains(&finish) {
            log::warn!("plan: finish pose outside borders");
            return Err(Error::FinishOutsideBorders);
        }

        let mut effective_start = start;
        for obstacle in obstacles.iter().filter(|o| o.enabled()) {
            if obstacle.contains(&finish) {
                log::warn!("plan: finish pose inside an obstacle");
                return Err(Error::FinishInsideObstacle);
            }
            if obstacle.contains(&effective_start) {
                effective_start = obstacle.nearest_boundary_point(&effective_start);
                log::debug!(
                    "plan: start inside an obstacle, snapped to ({:.1}, {:.1})",
                    effective_start.x,
                    effective_start.y
                );
            }
        }

        let points =
            collect_candidates(effective_start, finish, &obstacles, self.registry.borders());
        let graph = build_visibility_graph(&points, &obstacles);
        let index_path = shortest_path(&graph, START_INDEX, FINISH_INDEX)?;

        self.path = index_path.iter().map(|&i| points[i]).collect();
        self.points = points;
        self.graph = graph;
        self.start = Some(effective_start);
        self.finish = Some(finish);
        self.state = PlannerState::Ready;

        log::info!("plan: path with {} waypoints", self.path.len());
        Ok(())
    }

    /// Number of waypoints in the current path.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// The `index`-th waypoint of the current path.
    pub fn path_pose(&self, index: usize) -> Result<Coords> {
        self.path
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.path.len(),
            })
    }

    /// True iff the last plan succeeded.
    pub fn is_computed(&self) -> bool {
        self.state == PlannerState::Ready
    }

    /// Facade state after the last plan.
    pub fn state(&self) -> PlannerState {
        self.state
    }

    /// Effective start of the last successful plan, after snapping.
    pub fn start(&self) -> Option<Coords> {
        self.start
    }

    /// Finish of the last successful plan.
    pub fn finish(&self) -> Option<Coords> {
        self.finish
    }

    /// True iff an enabled dynamic obstacle now crosses segment AB.
    ///
    /// Only obstacles whose center lies inside the borders are considered,
    /// and fixed obstacles are ignored: the caller asks about obstructions
    /// that appeared after the path was computed. The dynamic-list guard
    /// is held only while the snapshot is taken.
    pub fn should_recompute(&self, a: Coords, b: Coords) -> bool {
        self.registry.dynamic().snapshot().iter().any(|o| {
            o.enabled()
                && self.registry.borders().contains(&o.center().coords())
                && o.crosses_segment(&a, &b)
        })
    }

    /// Playing field borders.
    pub fn borders(&self) -> &PolygonObstacle {
        self.registry.borders()
    }

    /// Replace the playing field borders.
    ///
    /// Last writer wins; not safe to call while a plan is in flight.
    pub fn set_borders(&mut self, borders: PolygonObstacle) {
        self.registry.set_borders(borders);
    }

    /// Append a fixed obstacle.
    pub fn add_fixed(&mut self, obstacle: impl Into<Obstacle>) -> ObstacleId {
        self.registry.add_fixed(obstacle.into())
    }

    /// Remove a fixed obstacle by identity.
    pub fn remove_fixed(&mut self, id: ObstacleId) -> bool {
        self.registry.remove_fixed(id)
    }

    /// Remove all fixed obstacles.
    pub fn clear_fixed(&mut self) {
        self.registry.clear_fixed()
    }

    /// Handle to the shared dynamic obstacle list, for producer threads.
    pub fn dynamic_obstacles(&self) -> DynamicObstacles {
        self.registry.dynamic()
    }

    /// Append a dynamic obstacle.
    pub fn add_dynamic(&self, obstacle: impl Into<Obstacle>) -> ObstacleId {
        self.registry.dynamic().add(obstacle.into())
    }

    /// Remove a dynamic obstacle by identity.
    pub fn remove_dynamic(&self, id: ObstacleId) -> bool {
        self.registry.dynamic().remove(id)
    }

    /// Remove all dynamic obstacles.
    pub fn clear_dynamic(&self) {
        self.registry.dynamic().clear()
    }

    /// Export the field, obstacles, graph and path to SVG for debugging.
    pub fn to_svg(&self) -> String {
        let borders = self.registry.borders();
        let (min_x, min_y, max_x, max_y) = borders.vertices().iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(lx, ly, hx, hy), v| (lx.min(v.x), ly.min(v.y), hx.max(v.x), hy.max(v.y)),
        );

        let margin = 0.05 * (max_x - min_x).max(max_y - min_y).max(1.0);
        let view_min_x = min_x - margin;
        let view_min_y = min_y - margin;
        let view_width = (max_x - min_x) + 2.0 * margin;
        let view_height = (max_y - min_y) + 2.0 * margin;

        let mut svg = format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
                "viewBox=\"{} {} {} {}\" width=\"800\" height=\"600\">\n",
                "  <g transform=\"scale(1, -1) translate(0, -{})\">\n"
            ),
            view_min_x,
            -view_min_y - view_height,
            view_width,
            view_height,
            2.0 * view_min_y + view_height
        );

        svg.push_str("    <!-- Borders -->\n");
        svg.push_str(&polygon_element(borders.vertices(), "black", "none", 4.0));

        svg.push_str("    <!-- Obstacles -->\n");
        for obstacle in self.registry.snapshot() {
            match &obstacle {
                Obstacle::Polygon(p) => {
                    svg.push_str(&polygon_element(p.vertices(), "dimgray", "lightgray", 2.0));
                }
                Obstacle::Circle(c) => {
                    svg.push_str(&format!(
                        "    <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" stroke=\"dimgray\" stroke-width=\"2\" fill=\"lightgray\"/>\n",
                        c.center().x,
                        c.center().y,
                        c.radius()
                    ));
                }
            }
            svg.push_str(&polygon_element(obstacle.bounding_box(), "gray", "none", 1.0));
        }

        svg.push_str("    <!-- Graph Edges -->\n");
        for (i, neighbours) in self.graph.iter().enumerate() {
            for &(j, _) in neighbours {
                if i < j {
                    let a = self.points[i];
                    let b = self.points[j];
                    svg.push_str(&format!(
                        "    <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#cccccc\" stroke-width=\"1\"/>\n",
                        a.x, a.y, b.x, b.y
                    ));
                }
            }
        }

        svg.push_str("    <!-- Candidates -->\n");
        for p in &self.points {
            svg.push_str(&format!(
                "    <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"8\" fill=\"steelblue\"/>\n",
                p.x, p.y
            ));
        }

        if let Some(start) = self.start {
            svg.push_str("    <!-- Path -->\n");
            let mut from = start;
            for to in &self.path {
                svg.push_str(&format!(
                    "    <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"lime\" stroke-width=\"5\"/>\n",
                    from.x, from.y, to.x, to.y
                ));
                from = *to;
            }
        }

        svg.push_str("  </g>\n</svg>\n");
        svg
    }
}

fn polygon_element(ring: &[Coords], stroke: &str, fill: &str, width: f64) -> String {
    let points = ring
        .iter()
        .map(|v| format!("{:.1},{:.1}", v.x, v.y))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "    <polygon points=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"/>\n",
        points, stroke, width, fill
    )
}
