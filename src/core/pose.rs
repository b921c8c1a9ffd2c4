//! Robot pose: position plus orientation.

use serde::{Deserialize, Serialize};

use super::coords::Coords;

/// A position with an orientation.
///
/// Coordinates in millimetres, orientation `o` in degrees (CCW positive).
/// The planner treats the orientation as an opaque angular parameter; it is
/// only interpreted when building rotated rectangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X position in millimetres.
    pub x: f64,
    /// Y position in millimetres.
    pub y: f64,
    /// Orientation in degrees (CCW positive from +X).
    pub o: f64,
}

impl Pose {
    /// Create a new pose.
    #[inline]
    pub fn new(x: f64, y: f64, o: f64) -> Self {
        Self { x, y, o }
    }

    /// Create a pose from a position only (orientation 0).
    #[inline]
    pub fn from_coords(coords: Coords) -> Self {
        Self {
            x: coords.x,
            y: coords.y,
            o: 0.0,
        }
    }

    /// Position component.
    #[inline]
    pub fn coords(&self) -> Coords {
        Coords::new(self.x, self.y)
    }

    /// Orientation in radians.
    #[inline]
    pub fn o_rad(&self) -> f64 {
        self.o.to_radians()
    }

    /// Euclidean distance to a point.
    #[inline]
    pub fn distance(&self, p: &Coords) -> f64 {
        self.coords().distance(p)
    }
}
