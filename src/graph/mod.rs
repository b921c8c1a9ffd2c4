//! Visibility graph construction and search.
//!
//! The graph is an adjacency list over candidate vertices; vertex 0 is
//! always the start and vertex 1 the finish. Edge weights are Euclidean
//! distances in millimetres.

pub mod builder;
pub mod candidates;
pub mod dijkstra;

pub use builder::build_visibility_graph;
pub use candidates::collect_candidates;
pub use dijkstra::shortest_path;

/// Adjacency list: `edges[i] = [(neighbour index, distance), ...]`.
pub type AdjacencyList = Vec<Vec<(usize, f64)>>;

/// Index of the start vertex in every candidate list.
pub const START_INDEX: usize = 0;

/// Index of the finish vertex in every candidate list.
pub const FINISH_INDEX: usize = 1;
