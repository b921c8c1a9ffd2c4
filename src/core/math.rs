//! Segment predicates used by the obstacle geometry.
//!
//! All products are computed in double precision. Degenerate contacts
//! (collinear touches, shared endpoints) count as non-crossing: the
//! directional test uses a strict inequality.

use super::coords::{Coords, EPSILON};

/// Compare two scalars within [`EPSILON`].
#[inline]
pub fn epsilon_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// True iff `p` is collinear with segment AB and inside its bounding
/// interval, both within [`EPSILON`].
pub fn on_segment(p: &Coords, a: &Coords, b: &Coords) -> bool {
    let ab = *b - *a;
    let ap = *p - *a;

    let len = ab.length();
    if len < EPSILON {
        return p.approx_eq(a, EPSILON);
    }

    // Perpendicular distance from p to the line through AB.
    if (ab.cross(&ap) / len).abs() >= EPSILON {
        return false;
    }

    p.x >= a.x.min(b.x) - EPSILON
        && p.x <= a.x.max(b.x) + EPSILON
        && p.y >= a.y.min(b.y) - EPSILON
        && p.y <= a.y.max(b.y) + EPSILON
}

/// True iff points C and D lie strictly on opposite sides of the infinite
/// line through A and B.
#[inline]
pub fn segment_crosses_line(a: &Coords, b: &Coords, c: &Coords, d: &Coords) -> bool {
    let ab = *b - *a;
    let ac = *c - *a;
    let ad = *d - *a;

    ab.cross(&ad) * ab.cross(&ac) < 0.0
}

/// True iff segments AB and CD strictly cross each other.
#[inline]
pub fn segment_crosses_segment(a: &Coords, b: &Coords, c: &Coords, d: &Coords) -> bool {
    segment_crosses_line(a, b, c, d) && segment_crosses_line(c, d, a, b)
}
