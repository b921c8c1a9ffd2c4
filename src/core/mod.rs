//! Fundamental geometric types and predicates.

pub mod coords;
pub mod math;
pub mod pose;

pub use coords::{Coords, EPSILON};
pub use math::{epsilon_equal, on_segment, segment_crosses_line, segment_crosses_segment};
pub use pose::Pose;
