//! Partition store abstraction.
//!
//! A partition store resolves a grid cell to the POI records of its
//! dataset shard. Transports (HTTP, filesystem) live in the client crate;
//! this module defines the contract they implement plus an in-memory store
//! for tests and examples.

use crate::error::StoreError;
use pubgrid_types::{GridCell, Poi};
use std::collections::{HashMap, HashSet};

/// Source of dataset shards, one per grid cell.
///
/// A cell with no data is `Ok` with an empty vector; missing shards are a
/// valid "nothing here" answer, not an error. Errors describe lookups that
/// actually failed; the query planner absorbs them per cell, so an
/// implementation never needs to retry or mask its own failures.
pub trait PartitionStore {
    /// Fetch the POI records of one cell's shard.
    fn fetch(
        &self,
        cell: GridCell,
    ) -> impl Future<Output = std::result::Result<Vec<Poi>, StoreError>> + Send;
}

/// In-memory partition store.
///
/// Buckets inserted records by their containing cell, exactly like the
/// dataset producer does with files. Cells can be marked unavailable to
/// exercise failure handling.
///
/// # Examples
///
/// ```rust
/// use pubgrid::store::MemoryPartitionStore;
/// use pubgrid_types::{Coordinate, Poi};
///
/// let mut store = MemoryPartitionStore::new();
/// store.insert(Poi::new("The Anchor", Coordinate::new(51.5065, -0.0960)));
/// assert_eq!(store.shard_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryPartitionStore {
    shards: HashMap<GridCell, Vec<Poi>>,
    unavailable: HashSet<GridCell>,
}

impl MemoryPartitionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record into the shard of its containing cell.
    ///
    /// Returns the cell it was bucketed into.
    pub fn insert(&mut self, poi: Poi) -> GridCell {
        let cell = GridCell::containing(&poi.location);
        self.shards.entry(cell).or_default().push(poi);
        cell
    }

    /// Mark a cell as unavailable: fetching it fails instead of returning
    /// an empty shard.
    pub fn mark_unavailable(&mut self, cell: GridCell) {
        self.unavailable.insert(cell);
    }

    /// Number of non-empty shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}

impl PartitionStore for MemoryPartitionStore {
    async fn fetch(&self, cell: GridCell) -> std::result::Result<Vec<Poi>, StoreError> {
        if self.unavailable.contains(&cell) {
            return Err(StoreError::Request(format!(
                "cell {} is unavailable",
                cell.name()
            )));
        }
        Ok(self.shards.get(&cell).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubgrid_types::Coordinate;

    #[test]
    fn test_insert_buckets_by_cell() {
        let mut store = MemoryPartitionStore::new();
        let a = store.insert(Poi::new("A", Coordinate::new(51.501, -0.101)));
        let b = store.insert(Poi::new("B", Coordinate::new(51.509, -0.109)));
        let c = store.insert(Poi::new("C", Coordinate::new(51.511, -0.101)));

        // A and B share a cell, C is one row north.
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(store.shard_count(), 2);
    }

    #[test]
    fn test_fetch_missing_cell_is_empty() {
        let store = MemoryPartitionStore::new();
        let cell = GridCell::from_indices(0, 0);
        let pois = futures::executor::block_on(store.fetch(cell)).unwrap();
        assert!(pois.is_empty());
    }

    #[test]
    fn test_fetch_unavailable_cell_fails() {
        let mut store = MemoryPartitionStore::new();
        let cell = store.insert(Poi::new("A", Coordinate::new(51.501, -0.101)));
        store.mark_unavailable(cell);
        assert!(futures::executor::block_on(store.fetch(cell)).is_err());
    }
}
