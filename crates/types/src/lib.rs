//! # pubgrid-types
//!
//! Core geographic data types for the Pubgrid partitioned POI index.
//!
//! This crate provides the types shared by the dataset producer and the
//! query side:
//!
//! - **Coordinate**: a latitude/longitude pair, the wire format for locations
//! - **Poi**: a named point of interest, the shard record
//! - **BoundingBox**: an axis-aligned latitude/longitude rectangle
//! - **GridCell**: a 0.01°×0.01° partition of coordinate space, and its
//!   canonical shard name
//!
//! All types are serializable with Serde and built on top of the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use pubgrid_types::cell::GridCell;
//! use pubgrid_types::coord::Coordinate;
//!
//! let origin = Coordinate::new(51.5074, -0.1278); // London
//! let cell = GridCell::containing(&origin);
//! assert_eq!(cell.name(), "51.50x-0.13");
//! ```

pub mod bbox;
pub mod cell;
pub mod coord;
pub mod poi;

pub use bbox::BoundingBox;
pub use cell::GridCell;
pub use coord::Coordinate;
pub use poi::{Poi, RankedPoi};
