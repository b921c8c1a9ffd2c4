//! Obstacle shapes and their avoidance predicates.
//!
//! Every shape answers the same capability set: point containment, segment
//! crossing, nearest boundary point and an inflated bounding box. The
//! planner only goes through [`Obstacle`], never through the concrete
//! variants.

pub mod circle;
pub mod polygon;
pub mod rectangle;

pub use circle::CircleObstacle;
pub use polygon::PolygonObstacle;

use crate::core::{Coords, Pose};

/// An obstacle on the playing field.
///
/// Rectangles are built by [`PolygonObstacle::rectangle`] and stored as
/// polygons, so the variant set stays closed over two shapes.
#[derive(Clone, Debug)]
pub enum Obstacle {
    /// Arbitrary convex polygon (includes rectangles).
    Polygon(PolygonObstacle),
    /// Circle approximated by a sampled bounding ring.
    Circle(CircleObstacle),
}

impl Obstacle {
    /// True iff `p` is inside the obstacle.
    ///
    /// Polygon containment is strict (boundary points are outside);
    /// circle containment includes the boundary.
    pub fn contains(&self, p: &Coords) -> bool {
        match self {
            Obstacle::Polygon(o) => o.contains(p),
            Obstacle::Circle(o) => o.contains(p),
        }
    }

    /// True iff segment AB crosses the obstacle.
    pub fn crosses_segment(&self, a: &Coords, b: &Coords) -> bool {
        match self {
            Obstacle::Polygon(o) => o.crosses_segment(a, b),
            Obstacle::Circle(o) => o.crosses_segment(a, b),
        }
    }

    /// Point of the obstacle boundary nearest to `p`.
    pub fn nearest_boundary_point(&self, p: &Coords) -> Coords {
        match self {
            Obstacle::Polygon(o) => o.nearest_boundary_point(p),
            Obstacle::Circle(o) => o.nearest_boundary_point(p),
        }
    }

    /// Inflated bounding box ring (counter-clockwise).
    pub fn bounding_box(&self) -> &[Coords] {
        match self {
            Obstacle::Polygon(o) => o.bounding_box(),
            Obstacle::Circle(o) => o.bounding_box(),
        }
    }

    /// Obstacle center.
    pub fn center(&self) -> Pose {
        match self {
            Obstacle::Polygon(o) => o.center(),
            Obstacle::Circle(o) => o.center(),
        }
    }

    /// Circumscribed circle radius.
    pub fn radius(&self) -> f64 {
        match self {
            Obstacle::Polygon(o) => o.radius(),
            Obstacle::Circle(o) => o.radius(),
        }
    }

    /// True iff the obstacle participates in planning.
    pub fn enabled(&self) -> bool {
        match self {
            Obstacle::Polygon(o) => o.enabled(),
            Obstacle::Circle(o) => o.enabled(),
        }
    }

    /// Enable or disable the obstacle without removing it.
    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            Obstacle::Polygon(o) => o.set_enabled(enabled),
            Obstacle::Circle(o) => o.set_enabled(enabled),
        }
    }
}

impl From<PolygonObstacle> for Obstacle {
    fn from(o: PolygonObstacle) -> Self {
        Obstacle::Polygon(o)
    }
}

impl From<CircleObstacle> for Obstacle {
    fn from(o: CircleObstacle) -> Self {
        Obstacle::Circle(o)
    }
}
