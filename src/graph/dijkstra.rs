//! Shortest-path search over the visibility graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};

use super::AdjacencyList;

/// Priority queue entry for the Dijkstra search.
#[derive(Clone, Copy, Debug)]
struct SearchState {
    cost: f64,
    node: usize,
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for SearchState {}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; equal costs settle the lower
        // vertex index first so the search is deterministic.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra search from `start` to `finish`.
///
/// Returns the vertex index sequence of the shortest path, excluding
/// `start` and ending with `finish`.
///
/// Fails with [`Error::StartIsolated`] when the start vertex has no
/// neighbours, and [`Error::NoPath`] when the frontier empties before the
/// finish is settled.
pub fn shortest_path(edges: &AdjacencyList, start: usize, finish: usize) -> Result<Vec<usize>> {
    let n = edges.len();
    if start >= n || finish >= n {
        return Err(Error::NoPath);
    }
    if edges[start].is_empty() {
        return Err(Error::StartIsolated);
    }
    if start == finish {
        return Ok(vec![finish]);
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[start] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(SearchState {
        cost: 0.0,
        node: start,
    });

    while let Some(SearchState { cost, node }) = heap.pop() {
        if cost > dist[node] {
            continue;
        }
        if node == finish {
            break;
        }

        for &(neighbour, weight) in &edges[node] {
            let next = dist[node] + weight;
            if next < dist[neighbour] {
                dist[neighbour] = next;
                prev[neighbour] = Some(node);
                heap.push(SearchState {
                    cost: next,
                    node: neighbour,
                });
            }
        }
    }

    if prev[finish].is_none() {
        return Err(Error::NoPath);
    }

    let mut path = Vec::new();
    let mut current = finish;
    while current != start {
        path.push(current);
        current = prev[current].ok_or(Error::NoPath)?;
    }
    path.reverse();

    Ok(path)
}

/// Total weight of a vertex path starting at `start`.
pub fn path_weight(edges: &AdjacencyList, start: usize, path: &[usize]) -> f64 {
    let mut weight = 0.0;
    let mut from = start;
    for &to in path {
        if let Some((_, w)) = edges[from].iter().find(|(n, _)| *n == to) {
            weight += w;
        }
        from = to;
    }
    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> AdjacencyList {
        // 0 --1.0-- 2 --1.0-- 1
        //  \                 /
        //   2.0 --- 3 --- 2.0
        vec![
            vec![(2, 1.0), (3, 2.0)],
            vec![(2, 1.0), (3, 2.0)],
            vec![(0, 1.0), (1, 1.0)],
            vec![(0, 2.0), (1, 2.0)],
        ]
    }

    #[test]
    fn test_shortest_route_is_taken() {
        let path = shortest_path(&diamond(), 0, 1).unwrap();
        assert_eq!(path, vec![2, 1]);
    }

    #[test]
    fn test_path_excludes_start_includes_finish() {
        let path = shortest_path(&diamond(), 0, 1).unwrap();
        assert_ne!(path[0], 0);
        assert_eq!(*path.last().unwrap(), 1);
    }

    #[test]
    fn test_direct_edge() {
        let edges: AdjacencyList = vec![vec![(1, 5.0)], vec![(0, 5.0)]];
        let path = shortest_path(&edges, 0, 1).unwrap();
        assert_eq!(path, vec![1]);
    }

    #[test]
    fn test_same_start_and_finish() {
        let edges: AdjacencyList = vec![vec![(1, 0.0)], vec![(0, 0.0)]];
        let path = shortest_path(&edges, 0, 0).unwrap();
        assert_eq!(path, vec![0]);
    }

    #[test]
    fn test_start_isolated() {
        let edges: AdjacencyList = vec![vec![], vec![(2, 1.0)], vec![(1, 1.0)]];
        assert_eq!(shortest_path(&edges, 0, 1).unwrap_err(), Error::StartIsolated);
    }

    #[test]
    fn test_no_path() {
        // 0-2 connected, 1 reachable from nothing
        let edges: AdjacencyList = vec![vec![(2, 1.0)], vec![], vec![(0, 1.0)]];
        assert_eq!(shortest_path(&edges, 0, 1).unwrap_err(), Error::NoPath);
    }

    #[test]
    fn test_deterministic_tie_break() {
        // Two equal-cost routes 0->2->1 and 0->3->1: the lower intermediate
        // index must win.
        let edges: AdjacencyList = vec![
            vec![(2, 1.0), (3, 1.0)],
            vec![(2, 1.0), (3, 1.0)],
            vec![(0, 1.0), (1, 1.0)],
            vec![(0, 1.0), (1, 1.0)],
        ];
        let path = shortest_path(&edges, 0, 1).unwrap();
        assert_eq!(path, vec![2, 1]);
    }

    #[test]
    fn test_path_weight() {
        let edges = diamond();
        let path = shortest_path(&edges, 0, 1).unwrap();
        assert_eq!(path_weight(&edges, 0, &path), 2.0);
    }
}
