//! Planar coordinates in millimetres.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Tolerance for coordinate and scalar comparisons (millimetres).
pub const EPSILON: f64 = 1e-3;

/// A point or vector in the playing-field frame (millimetres, y-up).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Coords {
    /// X coordinate in millimetres.
    pub x: f64,
    /// Y coordinate in millimetres.
    pub y: f64,
}

impl Coords {
    /// Create a new coordinate pair.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin.
    pub const ZERO: Coords = Coords { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Coords) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Length of this point as a vector from the origin.
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Coords) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors.
    #[inline]
    pub fn cross(&self, other: &Coords) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Componentwise equality within `eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Coords, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }
}

/// Equality within [`EPSILON`] on each component.
impl PartialEq for Coords {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }
}

impl Add for Coords {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Coords::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coords {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Coords::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Coords {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Coords::new(self.x * scalar, self.y * scalar)
    }
}
