//! Filesystem shard transport.
//!
//! Reads dataset shards straight from a directory of `{cell}.json` files,
//! as written by the partitioner. Useful for local datasets and for
//! exercising the full query path in tests without a file host.

use pubgrid::store::PartitionStore;
use pubgrid::StoreError;
use pubgrid_types::{GridCell, Poi};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Partition store backed by a local shard directory.
#[derive(Debug, Clone)]
pub struct FsPartitionStore {
    root: PathBuf,
}

impl FsPartitionStore {
    /// Create a store reading shards from `root`.
    ///
    /// `root` is the directory holding the `{cell}.json` files themselves
    /// (the equivalent of the file host's `partitions/` directory).
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn shard_path(&self, cell: GridCell) -> PathBuf {
        self.root.join(format!("{}.json", cell.name()))
    }
}

impl PartitionStore for FsPartitionStore {
    async fn fetch(&self, cell: GridCell) -> Result<Vec<Poi>, StoreError> {
        let path = self.shard_path(cell);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            // No shard file for this cell: an empty cell, not a failure.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Request(format!(
                    "{}: {}",
                    path.display(),
                    err
                )));
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| StoreError::Malformed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubgrid_types::Coordinate;

    #[tokio::test]
    async fn test_missing_shard_is_empty_cell() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsPartitionStore::new(dir.path());
        let pois = store.fetch(GridCell::from_indices(0, 0)).await.unwrap();
        assert!(pois.is_empty());
    }

    #[tokio::test]
    async fn test_reads_shard_by_cell_name() {
        let dir = tempfile::tempdir().unwrap();
        let poi = Poi::new("The Anchor", Coordinate::new(51.5065, -0.0960));
        let cell = GridCell::containing(&poi.location);
        std::fs::write(
            dir.path().join(format!("{}.json", cell.name())),
            serde_json::to_vec(&vec![poi.clone()]).unwrap(),
        )
        .unwrap();

        let store = FsPartitionStore::new(dir.path());
        let pois = store.fetch(cell).await.unwrap();
        assert_eq!(pois, vec![poi]);
    }

    #[tokio::test]
    async fn test_malformed_shard_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cell = GridCell::from_indices(5150, -13);
        std::fs::write(dir.path().join(format!("{}.json", cell.name())), b"not json").unwrap();

        let store = FsPartitionStore::new(dir.path());
        assert!(matches!(
            store.fetch(cell).await,
            Err(StoreError::Malformed(_))
        ));
    }
}
