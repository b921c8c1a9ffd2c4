//! # Marga-Plan: Visibility-Graph Obstacle Avoidance
//!
//! A 2D geometric path planner for table-top robots. Given a start pose, a
//! finish pose, a polygonal playing field and a set of fixed and dynamic
//! obstacles, it computes a piecewise-linear collision-free path over a
//! visibility graph of inflated obstacle corners.
//!
//! ## Features
//!
//! - **Obstacle primitives**: polygons, rotated rectangles and circles with
//!   containment, segment-crossing and nearest-boundary-point predicates
//! - **Inflated bounding boxes**: waypoint rings scaled outward from each
//!   obstacle so paths keep a configurable margin
//! - **Visibility graph + Dijkstra**: deterministic shortest waypoint path
//! - **Concurrent dynamic obstacles**: a lidar thread can add and remove
//!   obstacles through a cloneable handle while the planner reads snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_plan::{Coords, PolygonObstacle, Planner};
//!
//! // A 3 m x 2 m playing field, counter-clockwise, millimetres.
//! let borders = PolygonObstacle::new(vec![
//!     Coords::new(0.0, 0.0),
//!     Coords::new(3000.0, 0.0),
//!     Coords::new(3000.0, 2000.0),
//!     Coords::new(0.0, 2000.0),
//! ])
//! .unwrap();
//!
//! let mut planner = Planner::new(borders);
//! planner
//!     .plan(Coords::new(100.0, 100.0), Coords::new(2900.0, 1900.0))
//!     .unwrap();
//!
//! assert_eq!(planner.path_len(), 1);
//! ```
//!
//! ## Coordinate Frame
//!
//! Lengths are in millimetres, angles in degrees. The frame is right-handed
//! and y-up; every polygon vertex ring is counter-clockwise. Polygon
//! containment is strict: boundary points count as outside.

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod obstacles;
pub mod planner;
pub mod registry;

// Re-export main types at crate root
pub use config::ObstacleDefaults;
pub use core::{Coords, Pose};
pub use error::{Error, Result};
pub use obstacles::{CircleObstacle, Obstacle, PolygonObstacle};
pub use planner::{Planner, PlannerState};
pub use registry::{DynamicObstacles, ObstacleId, ObstacleRegistry};
