//! Grid-partitioned static POI index: partition key encoding and region
//! query planning.
//!
//! A POI dataset is sharded offline into fixed 0.01°×0.01° grid cells, one
//! JSON file per occupied cell, named after the cell. This crate holds the
//! consumer side of that contract: quantizing coordinates to cells,
//! planning which cells a radius query touches, fanning the shard fetches
//! out through a [`store::PartitionStore`], and ranking the merged results
//! by distance.
//!
//! ```rust
//! use pubgrid::prelude::*;
//!
//! let mut store = MemoryPartitionStore::new();
//! store.insert(Poi::new("The Anchor", Coordinate::new(51.5065, -0.0960)));
//! store.insert(Poi::new("The Gun", Coordinate::new(51.5007, -0.0174)));
//!
//! let origin = Coordinate::new(51.5074, -0.0940);
//! let found = futures::executor::block_on(find_nearby(
//!     &store,
//!     &origin,
//!     &Config::default(),
//! ))?;
//!
//! // The Gun is ~5 km away, well outside the default 1 km radius.
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].poi.name, "The Anchor");
//! # Ok::<(), pubgrid::PubgridError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod query;
pub mod store;

pub use config::Config;
pub use error::{PubgridError, Result, StoreError};
pub use query::{fetch_all, find_nearby, plan, rank};
pub use store::{MemoryPartitionStore, PartitionStore};

pub use geometry::DistanceMetric;
pub use pubgrid_types::{BoundingBox, Coordinate, GridCell, Poi, RankedPoi};
pub use pubgrid_types::cell::CELL_SIZE_DEGREES;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, PubgridError, Result, StoreError};

    pub use crate::{BoundingBox, Coordinate, GridCell, Poi, RankedPoi};

    pub use crate::{MemoryPartitionStore, PartitionStore};

    pub use crate::{DistanceMetric, fetch_all, find_nearby, plan, rank};
}
