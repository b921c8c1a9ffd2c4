//! Rectangle constructors.
//!
//! A rectangle is an oriented box given by a center pose (position plus
//! rotation in degrees) and two side lengths. It is stored as a
//! [`PolygonObstacle`] of 4 vertices; only the constructors are specific.

use crate::config::DEFAULT_BOUNDING_BOX_MARGIN;
use crate::core::{Coords, Pose};

use super::polygon::PolygonObstacle;

impl PolygonObstacle {
    /// Build a rectangle obstacle with the default bounding box margin.
    pub fn rectangle(center: Pose, length_x: f64, length_y: f64) -> Self {
        Self::rectangle_with_margin(center, length_x, length_y, DEFAULT_BOUNDING_BOX_MARGIN)
    }

    /// Build a rectangle obstacle with an explicit bounding box margin.
    ///
    /// The circumscribed radius is half the diagonal; the bounding box is
    /// the corner ring of the rectangle with both side lengths scaled by
    /// (1 + margin).
    pub fn rectangle_with_margin(
        center: Pose,
        length_x: f64,
        length_y: f64,
        margin: f64,
    ) -> Self {
        let radius = (length_x * length_x + length_y * length_y).sqrt() / 2.0;
        let vertices = corner_ring(&center, length_x, length_y);
        let bounding_box = corner_ring(
            &center,
            length_x * (1.0 + margin),
            length_y * (1.0 + margin),
        );

        Self::from_parts(center, radius, vertices, margin, bounding_box)
    }
}

/// Corner ring of an oriented rectangle, counter-clockwise.
fn corner_ring(center: &Pose, length_x: f64, length_y: f64) -> Vec<Coords> {
    let (sin_o, cos_o) = center.o_rad().sin_cos();
    let hx = length_x / 2.0;
    let hy = length_y / 2.0;

    vec![
        Coords::new(
            center.x - hx * cos_o + hy * sin_o,
            center.y - hx * sin_o - hy * cos_o,
        ),
        Coords::new(
            center.x + hx * cos_o + hy * sin_o,
            center.y + hx * sin_o - hy * cos_o,
        ),
        Coords::new(
            center.x + hx * cos_o - hy * sin_o,
            center.y + hx * sin_o + hy * cos_o,
        ),
        Coords::new(
            center.x - hx * cos_o - hy * sin_o,
            center.y - hx * sin_o + hy * cos_o,
        ),
    ]
}
