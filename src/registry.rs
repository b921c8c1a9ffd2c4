//! Obstacle ownership and iteration.
//!
//! The registry owns the borders polygon, a fixed obstacle list mutated
//! from the owner thread, and a dynamic obstacle list that an external
//! producer (typically a lidar thread) mutates through a cloneable
//! [`DynamicObstacles`] handle. The planner never iterates the dynamic
//! list in place: it takes a snapshot under the guard and releases it
//! before any geometry runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::obstacles::{Obstacle, PolygonObstacle};

/// Registry-issued obstacle identity, used for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObstacleId(u64);

/// Shared, mutex-guarded dynamic obstacle list.
///
/// Clones share the same underlying list, so a producer thread can hold
/// one handle while the planner holds another. Every method takes the
/// guard for the duration of the call only.
#[derive(Clone, Debug, Default)]
pub struct DynamicObstacles {
    obstacles: Arc<Mutex<Vec<(ObstacleId, Obstacle)>>>,
    next_id: Arc<AtomicU64>,
}

impl DynamicObstacles {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an obstacle, returning its identity.
    pub fn add(&self, obstacle: Obstacle) -> ObstacleId {
        let id = ObstacleId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.obstacles.lock().push((id, obstacle));
        id
    }

    /// Remove the obstacle with the given identity.
    ///
    /// Returns false if the identity is not present.
    pub fn remove(&self, id: ObstacleId) -> bool {
        let mut obstacles = self.obstacles.lock();
        let before = obstacles.len();
        obstacles.retain(|(oid, _)| *oid != id);
        obstacles.len() != before
    }

    /// Remove all obstacles.
    pub fn clear(&self) {
        self.obstacles.lock().clear();
    }

    /// Number of obstacles currently registered.
    pub fn len(&self) -> usize {
        self.obstacles.lock().len()
    }

    /// True iff no obstacle is registered.
    pub fn is_empty(&self) -> bool {
        self.obstacles.lock().is_empty()
    }

    /// Point-in-time clone of the list.
    ///
    /// The guard is held only while the vector is cloned.
    pub fn snapshot(&self) -> Vec<Obstacle> {
        self.obstacles
            .lock()
            .iter()
            .map(|(_, o)| o.clone())
            .collect()
    }
}

/// Borders, fixed obstacles and the shared dynamic list.
#[derive(Debug)]
pub struct ObstacleRegistry {
    borders: PolygonObstacle,
    fixed: Vec<(ObstacleId, Obstacle)>,
    dynamic: DynamicObstacles,
    next_fixed_id: u64,
}

impl ObstacleRegistry {
    /// Create a registry for the given playing field borders.
    pub fn new(borders: PolygonObstacle) -> Self {
        Self {
            borders,
            fixed: Vec::new(),
            dynamic: DynamicObstacles::new(),
            next_fixed_id: 0,
        }
    }

    /// Playing field borders.
    pub fn borders(&self) -> &PolygonObstacle {
        &self.borders
    }

    /// Replace the playing field borders.
    pub fn set_borders(&mut self, borders: PolygonObstacle) {
        self.borders = borders;
    }

    /// Append a fixed obstacle, returning its identity.
    pub fn add_fixed(&mut self, obstacle: Obstacle) -> ObstacleId {
        let id = ObstacleId(self.next_fixed_id);
        self.next_fixed_id += 1;
        self.fixed.push((id, obstacle));
        id
    }

    /// Remove the fixed obstacle with the given identity.
    pub fn remove_fixed(&mut self, id: ObstacleId) -> bool {
        let before = self.fixed.len();
        self.fixed.retain(|(oid, _)| *oid != id);
        self.fixed.len() != before
    }

    /// Remove all fixed obstacles.
    pub fn clear_fixed(&mut self) {
        self.fixed.clear();
    }

    /// Fixed obstacles in insertion order.
    pub fn fixed(&self) -> impl Iterator<Item = &Obstacle> {
        self.fixed.iter().map(|(_, o)| o)
    }

    /// Handle to the shared dynamic list.
    pub fn dynamic(&self) -> DynamicObstacles {
        self.dynamic.clone()
    }

    /// Consistent view of all obstacles: fixed, then a locked snapshot of
    /// the dynamic list.
    pub fn snapshot(&self) -> Vec<Obstacle> {
        let mut all: Vec<Obstacle> = self.fixed.iter().map(|(_, o)| o.clone()).collect();
        all.extend(self.dynamic.snapshot());
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coords, Pose};
    use crate::obstacles::CircleObstacle;

    fn borders() -> PolygonObstacle {
        PolygonObstacle::new(vec![
            Coords::new(0.0, 0.0),
            Coords::new(1000.0, 0.0),
            Coords::new(1000.0, 1000.0),
            Coords::new(0.0, 1000.0),
        ])
        .unwrap()
    }

    fn circle_at(x: f64, y: f64) -> Obstacle {
        CircleObstacle::new(Pose::new(x, y, 0.0), 50.0).into()
    }

    #[test]
    fn test_fixed_add_remove() {
        let mut registry = ObstacleRegistry::new(borders());

        let a = registry.add_fixed(circle_at(100.0, 100.0));
        let b = registry.add_fixed(circle_at(200.0, 200.0));
        assert_eq!(registry.fixed().count(), 2);

        assert!(registry.remove_fixed(a));
        assert!(!registry.remove_fixed(a));
        assert_eq!(registry.fixed().count(), 1);

        assert!(registry.remove_fixed(b));
        assert_eq!(registry.fixed().count(), 0);
    }

    #[test]
    fn test_dynamic_handle_shares_list() {
        let registry = ObstacleRegistry::new(borders());
        let producer = registry.dynamic();
        let reader = registry.dynamic();

        let id = producer.add(circle_at(500.0, 500.0));
        assert_eq!(reader.len(), 1);

        assert!(reader.remove(id));
        assert!(producer.is_empty());
    }

    #[test]
    fn test_snapshot_chains_fixed_and_dynamic() {
        let mut registry = ObstacleRegistry::new(borders());
        registry.add_fixed(circle_at(100.0, 100.0));
        registry.dynamic().add(circle_at(900.0, 900.0));

        let all = registry.snapshot();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].center().coords(), Coords::new(100.0, 100.0));
        assert_eq!(all[1].center().coords(), Coords::new(900.0, 900.0));
    }

    #[test]
    fn test_snapshot_is_decoupled_from_later_mutation() {
        let registry = ObstacleRegistry::new(borders());
        let producer = registry.dynamic();

        producer.add(circle_at(500.0, 500.0));
        let snapshot = registry.snapshot();
        producer.clear();

        assert_eq!(snapshot.len(), 1);
        assert!(producer.is_empty());
    }

    #[test]
    fn test_concurrent_producer() {
        let registry = ObstacleRegistry::new(borders());
        let producer = registry.dynamic();

        let handle = std::thread::spawn(move || {
            for i in 0..100 {
                producer.add(circle_at(i as f64, i as f64));
            }
        });

        // Reader side takes snapshots while the producer runs.
        for _ in 0..50 {
            let _ = registry.snapshot();
        }

        handle.join().unwrap();
        assert_eq!(registry.dynamic().len(), 100);
    }
}
