//! Obstacle construction defaults.

use serde::{Deserialize, Serialize};

use crate::core::Pose;
use crate::error::Result;
use crate::obstacles::{CircleObstacle, PolygonObstacle};
use crate::Coords;

/// Default inflation margin for obstacle bounding boxes (+20%).
pub const DEFAULT_BOUNDING_BOX_MARGIN: f64 = 0.2;

/// Default number of vertices approximating a circle bounding box.
pub const DEFAULT_BOUNDING_BOX_POINTS: usize = 8;

mod defaults {
    pub fn bounding_box_margin() -> f64 {
        super::DEFAULT_BOUNDING_BOX_MARGIN
    }

    pub fn bounding_box_points_number() -> usize {
        super::DEFAULT_BOUNDING_BOX_POINTS
    }
}

/// Obstacle defaults section.
///
/// Holds the per-obstacle options applied when obstacles are built through
/// this section instead of the explicit constructors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObstacleDefaults {
    /// Bounding box inflation margin as a fraction of the shape size.
    /// Default: 0.2
    #[serde(default = "defaults::bounding_box_margin")]
    pub bounding_box_margin: f64,

    /// Vertex count for circle bounding boxes.
    /// Default: 8
    #[serde(default = "defaults::bounding_box_points_number")]
    pub bounding_box_points_number: usize,
}

impl Default for ObstacleDefaults {
    fn default() -> Self {
        Self {
            bounding_box_margin: DEFAULT_BOUNDING_BOX_MARGIN,
            bounding_box_points_number: DEFAULT_BOUNDING_BOX_POINTS,
        }
    }
}

impl ObstacleDefaults {
    /// Create a section with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the bounding box margin.
    pub fn with_bounding_box_margin(mut self, margin: f64) -> Self {
        self.bounding_box_margin = margin;
        self
    }

    /// Builder-style setter for the circle bounding box vertex count.
    pub fn with_bounding_box_points_number(mut self, n: usize) -> Self {
        self.bounding_box_points_number = n;
        self
    }

    /// Build a polygon obstacle with this section's margin.
    pub fn polygon(&self, vertices: Vec<Coords>) -> Result<PolygonObstacle> {
        PolygonObstacle::with_margin(vertices, self.bounding_box_margin)
    }

    /// Build a rectangle obstacle with this section's margin.
    pub fn rectangle(&self, center: Pose, length_x: f64, length_y: f64) -> PolygonObstacle {
        PolygonObstacle::rectangle_with_margin(
            center,
            length_x,
            length_y,
            self.bounding_box_margin,
        )
    }

    /// Build a circle obstacle with this section's margin and vertex count.
    pub fn circle(&self, center: Pose, radius: f64) -> CircleObstacle {
        CircleObstacle::with_options(
            center,
            radius,
            self.bounding_box_margin,
            self.bounding_box_points_number,
        )
    }
}
