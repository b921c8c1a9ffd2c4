//! Polygonal obstacle.

use crate::config::DEFAULT_BOUNDING_BOX_MARGIN;
use crate::core::coords::EPSILON;
use crate::core::math::{on_segment, segment_crosses_segment};
use crate::core::{Coords, Pose};
use crate::error::{Error, Result};

/// A convex polygonal obstacle.
///
/// The vertex ring must be counter-clockwise in the y-up frame. Center and
/// circumscribed radius are derived from the vertices; the bounding box is
/// the ring inflated outward from the centroid by the margin.
#[derive(Clone, Debug)]
pub struct PolygonObstacle {
    vertices: Vec<Coords>,
    center: Pose,
    radius: f64,
    margin: f64,
    bounding_box: Vec<Coords>,
    enabled: bool,
}

impl PolygonObstacle {
    /// Build a polygon with the default bounding box margin.
    pub fn new(vertices: Vec<Coords>) -> Result<Self> {
        Self::with_margin(vertices, DEFAULT_BOUNDING_BOX_MARGIN)
    }

    /// Build a polygon with an explicit bounding box margin.
    ///
    /// Fails with [`Error::DegeneratePolygon`] on fewer than 3 vertices.
    pub fn with_margin(vertices: Vec<Coords>, margin: f64) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::DegeneratePolygon(vertices.len()));
        }

        let centroid = centroid(&vertices);
        let radius = vertices
            .iter()
            .map(|v| centroid.distance(v))
            .fold(0.0, f64::max);
        let bounding_box = vertices
            .iter()
            .map(|v| centroid + (*v - centroid) * (1.0 + margin))
            .collect();

        Ok(Self {
            vertices,
            center: Pose::from_coords(centroid),
            radius,
            margin,
            bounding_box,
            enabled: true,
        })
    }

    /// Assemble a polygon whose derived data is already known.
    ///
    /// Used by the rectangle constructor, which computes center, radius and
    /// bounding box in closed form.
    pub(crate) fn from_parts(
        center: Pose,
        radius: f64,
        vertices: Vec<Coords>,
        margin: f64,
        bounding_box: Vec<Coords>,
    ) -> Self {
        Self {
            vertices,
            center,
            radius,
            margin,
            bounding_box,
            enabled: true,
        }
    }

    /// Vertex ring (counter-clockwise).
    pub fn vertices(&self) -> &[Coords] {
        &self.vertices
    }

    /// Inflated bounding box ring (counter-clockwise).
    pub fn bounding_box(&self) -> &[Coords] {
        &self.bounding_box
    }

    /// Polygon centroid with the construction orientation.
    pub fn center(&self) -> Pose {
        self.center
    }

    /// Circumscribed circle radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Bounding box inflation margin.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// True iff the obstacle participates in planning.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the obstacle without removing it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Strict containment test.
    ///
    /// The point is inside iff it lies strictly left of every directed
    /// edge of the CCW ring; boundary points count as outside.
    pub fn contains(&self, p: &Coords) -> bool {
        let n = self.vertices.len();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];

            let ab = b - a;
            let ap = *p - a;
            if ab.cross(&ap) <= 0.0 {
                return false;
            }
        }
        true
    }

    /// True iff segment AB crosses the polygon.
    ///
    /// Holds when any polygon edge strictly crosses AB, when A and B are
    /// two non-adjacent vertices of the ring (the connecting chord passes
    /// through the interior), or when a vertex other than A or B lies on AB.
    pub fn crosses_segment(&self, a: &Coords, b: &Coords) -> bool {
        let n = self.vertices.len();

        for i in 0..n {
            let v = self.vertices[i];
            let v_next = self.vertices[(i + 1) % n];

            if segment_crosses_segment(a, b, &v, &v_next) {
                return true;
            }
        }

        if let (Some(i), Some(j)) = (self.vertex_index(a), self.vertex_index(b)) {
            if i != j && !ring_adjacent(i, j, n) {
                return true;
            }
        }

        self.vertices
            .iter()
            .any(|v| !v.approx_eq(a, EPSILON) && !v.approx_eq(b, EPSILON) && on_segment(v, a, b))
    }

    /// Boundary point nearest to `p`, approximated by the nearest vertex.
    ///
    /// Only used to snap a start pose out of an obstacle, so the vertex
    /// approximation is sufficient.
    pub fn nearest_boundary_point(&self, p: &Coords) -> Coords {
        self.vertices
            .iter()
            .copied()
            .min_by(|u, v| {
                p.distance(u)
                    .partial_cmp(&p.distance(v))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(*p)
    }

    fn vertex_index(&self, p: &Coords) -> Option<usize> {
        self.vertices.iter().position(|v| v.approx_eq(p, EPSILON))
    }
}

/// Ring adjacency: consecutive indices, including the wrap-around pair.
fn ring_adjacent(i: usize, j: usize, n: usize) -> bool {
    let d = i.abs_diff(j);
    d == 1 || d == n - 1
}

/// Centroid of a vertex ring by the signed-area formula.
fn centroid(vertices: &[Coords]) -> Coords {
    let n = vertices.len();
    let mut area = 0.0;
    let mut x_sum = 0.0;
    let mut y_sum = 0.0;

    for i in 0..n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];

        let cross = p1.x * p2.y - p2.x * p1.y;
        area += cross;
        x_sum += (p1.x + p2.x) * cross;
        y_sum += (p1.y + p2.y) * cross;
    }

    area *= 0.5;
    let factor = 1.0 / (6.0 * area.abs());

    Coords::new(x_sum * factor, y_sum * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> PolygonObstacle {
        PolygonObstacle::with_margin(
            vec![
                Coords::new(0.0, 0.0),
                Coords::new(100.0, 0.0),
                Coords::new(100.0, 100.0),
                Coords::new(0.0, 100.0),
            ],
            0.2,
        )
        .unwrap()
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        let result = PolygonObstacle::new(vec![Coords::new(0.0, 0.0), Coords::new(1.0, 0.0)]);
        assert_eq!(result.unwrap_err(), Error::DegeneratePolygon(2));
    }

    #[test]
    fn test_centroid_and_radius() {
        let square = unit_square();
        assert_eq!(square.center().coords(), Coords::new(50.0, 50.0));
        assert_relative_eq!(square.radius(), 50.0 * std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_contains_is_strict() {
        let square = unit_square();

        assert!(square.contains(&Coords::new(50.0, 50.0)));
        assert!(!square.contains(&Coords::new(150.0, 50.0)));
        // Boundary and vertices count as outside
        assert!(!square.contains(&Coords::new(50.0, 0.0)));
        assert!(!square.contains(&Coords::new(0.0, 0.0)));
    }

    #[test]
    fn test_bounding_box_inflation() {
        let square = unit_square();
        let bb = square.bounding_box();

        assert_eq!(bb.len(), 4);
        // Each corner moves outward from the centroid by 20%
        assert_eq!(bb[0], Coords::new(-10.0, -10.0));
        assert_eq!(bb[2], Coords::new(110.0, 110.0));
        // Inflated corners are outside the polygon
        for p in bb {
            assert!(!square.contains(p));
        }
    }

    #[test]
    fn test_segment_through_polygon_crosses() {
        let square = unit_square();

        assert!(square.crosses_segment(&Coords::new(-50.0, 50.0), &Coords::new(150.0, 50.0)));
        assert!(!square.crosses_segment(&Coords::new(-50.0, 150.0), &Coords::new(150.0, 150.0)));
    }

    #[test]
    fn test_non_adjacent_vertex_chord_crosses() {
        let square = unit_square();

        // Diagonal through the interior
        assert!(square.crosses_segment(&Coords::new(0.0, 0.0), &Coords::new(100.0, 100.0)));
        // Edge between adjacent vertices does not cross
        assert!(!square.crosses_segment(&Coords::new(0.0, 0.0), &Coords::new(100.0, 0.0)));
    }

    #[test]
    fn test_vertex_on_segment_crosses() {
        let square = unit_square();

        // Grazing segment passing over vertex (0, 100)
        assert!(square.crosses_segment(&Coords::new(-50.0, 50.0), &Coords::new(50.0, 150.0)));
    }

    #[test]
    fn test_nearest_boundary_point_is_a_vertex() {
        let square = unit_square();
        let nearest = square.nearest_boundary_point(&Coords::new(10.0, 20.0));
        assert_eq!(nearest, Coords::new(0.0, 0.0));
    }
}
