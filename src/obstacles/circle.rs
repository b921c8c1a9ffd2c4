//! Circular obstacle.

use crate::config::{DEFAULT_BOUNDING_BOX_MARGIN, DEFAULT_BOUNDING_BOX_POINTS};
use crate::core::coords::EPSILON;
use crate::core::{Coords, Pose};

/// A circular obstacle.
///
/// The bounding box is a counter-clockwise ring of equally spaced samples
/// of the inflated circle, starting at angle 0.
#[derive(Clone, Debug)]
pub struct CircleObstacle {
    center: Pose,
    radius: f64,
    margin: f64,
    points_number: usize,
    bounding_box: Vec<Coords>,
    enabled: bool,
}

impl CircleObstacle {
    /// Build a circle with the default margin and sample count.
    pub fn new(center: Pose, radius: f64) -> Self {
        Self::with_options(
            center,
            radius,
            DEFAULT_BOUNDING_BOX_MARGIN,
            DEFAULT_BOUNDING_BOX_POINTS,
        )
    }

    /// Build a circle with an explicit margin and bounding box sample count.
    pub fn with_options(center: Pose, radius: f64, margin: f64, points_number: usize) -> Self {
        let bounding_box = sample_ring(&center, radius, margin, points_number);
        Self {
            center,
            radius,
            margin,
            points_number,
            bounding_box,
            enabled: true,
        }
    }

    /// Circle center.
    pub fn center(&self) -> Pose {
        self.center
    }

    /// Circle radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Bounding box inflation margin.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Number of bounding box samples.
    pub fn points_number(&self) -> usize {
        self.points_number
    }

    /// Inflated bounding box ring (counter-clockwise from angle 0).
    pub fn bounding_box(&self) -> &[Coords] {
        &self.bounding_box
    }

    /// True iff the obstacle participates in planning.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the obstacle without removing it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Containment test, boundary included.
    pub fn contains(&self, p: &Coords) -> bool {
        self.center.distance(p) <= self.radius
    }

    /// True iff segment AB crosses the circle.
    ///
    /// Holds when an endpoint is inside, or when the line through AB passes
    /// within the radius and the foot of the perpendicular from the center
    /// falls between A and B.
    pub fn crosses_segment(&self, a: &Coords, b: &Coords) -> bool {
        if self.contains(a) || self.contains(b) {
            return true;
        }

        let ab = *b - *a;
        if ab.length() < EPSILON {
            return false;
        }

        let c = self.center.coords();
        let ac = c - *a;
        let bc = c - *b;

        // Foot of the perpendicular lies within the segment.
        if ab.dot(&ac) < 0.0 || (ab * -1.0).dot(&bc) < 0.0 {
            return false;
        }

        self.line_distance(a, b) <= self.radius
    }

    /// Projection of `p` onto the inflated circle.
    ///
    /// A point at the exact center projects along the +X axis.
    pub fn nearest_boundary_point(&self, p: &Coords) -> Coords {
        let c = self.center.coords();
        let inflated = self.radius * (1.0 + self.margin);

        let v = *p - c;
        let norm = v.length();
        if norm < EPSILON {
            return Coords::new(c.x + inflated, c.y);
        }

        c + v * (inflated / norm)
    }

    /// Distance from the center to the infinite line through AB.
    fn line_distance(&self, a: &Coords, b: &Coords) -> f64 {
        let ab = *b - *a;
        let ac = self.center.coords() - *a;
        ab.cross(&ac).abs() / ab.length()
    }
}

/// Equally spaced samples of the inflated circle, CCW from angle 0.
fn sample_ring(center: &Pose, radius: f64, margin: f64, points_number: usize) -> Vec<Coords> {
    if radius <= 0.0 {
        return Vec::new();
    }

    let inflated = radius * (1.0 + margin);
    (0..points_number)
        .map(|i| {
            let angle = (i as f64) * std::f64::consts::TAU / (points_number as f64);
            Coords::new(
                center.x + inflated * angle.cos(),
                center.y + inflated * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circle() -> CircleObstacle {
        CircleObstacle::with_options(Pose::new(0.0, 0.0, 0.0), 100.0, 0.2, 8)
    }

    #[test]
    fn test_contains_includes_boundary() {
        let c = circle();
        assert!(c.contains(&Coords::new(50.0, 0.0)));
        assert!(c.contains(&Coords::new(100.0, 0.0)));
        assert!(!c.contains(&Coords::new(100.1, 0.0)));
    }

    #[test]
    fn test_bounding_box_samples() {
        let c = circle();
        let bb = c.bounding_box();

        assert_eq!(bb.len(), 8);
        assert_eq!(bb[0], Coords::new(120.0, 0.0));
        assert_eq!(bb[2], Coords::new(0.0, 120.0));
        // Inflated ring lies outside the circle
        for p in bb {
            assert!(!c.contains(p));
            assert_relative_eq!(c.center().distance(p), 120.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_segment_through_circle_crosses() {
        let c = circle();
        assert!(c.crosses_segment(&Coords::new(-200.0, 0.0), &Coords::new(200.0, 0.0)));
        assert!(c.crosses_segment(&Coords::new(-200.0, 50.0), &Coords::new(200.0, 50.0)));
    }

    #[test]
    fn test_endpoint_inside_crosses() {
        let c = circle();
        assert!(c.crosses_segment(&Coords::new(0.0, 0.0), &Coords::new(500.0, 0.0)));
    }

    #[test]
    fn test_segment_short_of_circle_does_not_cross() {
        let c = circle();

        // Collinear with a diameter but stops before the circle
        assert!(!c.crosses_segment(&Coords::new(-500.0, 0.0), &Coords::new(-150.0, 0.0)));
        // Line crosses, segment is past the circle
        assert!(!c.crosses_segment(&Coords::new(150.0, 0.0), &Coords::new(500.0, 0.0)));
        // Line misses entirely
        assert!(!c.crosses_segment(&Coords::new(-200.0, 150.0), &Coords::new(200.0, 150.0)));
    }

    #[test]
    fn test_nearest_boundary_point_on_inflated_circle() {
        let c = circle();

        let p = c.nearest_boundary_point(&Coords::new(50.0, 0.0));
        assert_eq!(p, Coords::new(120.0, 0.0));

        let centered = c.nearest_boundary_point(&Coords::new(0.0, 0.0));
        assert_eq!(centered, Coords::new(120.0, 0.0));
    }

    #[test]
    fn test_zero_radius_has_empty_bounding_box() {
        let c = CircleObstacle::new(Pose::new(0.0, 0.0, 0.0), 0.0);
        assert!(c.bounding_box().is_empty());
    }
}
