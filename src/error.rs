//! Error types for the avoidance planner.

use thiserror::Error;

/// Planner error type.
///
/// Every non-recovered failure of the planner maps to exactly one variant.
/// A start pose inside an obstacle is recovered locally (snapped to the
/// obstacle boundary) and therefore has no variant here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Polygon built with fewer than 3 vertices.
    #[error("degenerate polygon: need at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),

    /// Finish pose is not strictly inside the borders.
    #[error("finish pose outside borders")]
    FinishOutsideBorders,

    /// Finish pose is inside an enabled obstacle.
    #[error("finish pose inside an obstacle")]
    FinishInsideObstacle,

    /// The start vertex has no visible neighbour in the graph.
    #[error("start pose has no reachable neighbours")]
    StartIsolated,

    /// Start and finish are in disconnected components of the graph.
    #[error("no path between start and finish")]
    NoPath,

    /// Path waypoint index past the end of the computed path.
    #[error("path index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// Requested waypoint index.
        index: usize,
        /// Current path length.
        len: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::DegeneratePolygon(2).to_string(),
            "degenerate polygon: need at least 3 vertices, got 2"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 4, len: 2 }.to_string(),
            "path index 4 out of range (length 2)"
        );
    }
}
