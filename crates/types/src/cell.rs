//! Grid cells: the unit of dataset partitioning.
//!
//! Coordinate space is carved into fixed 0.01°×0.01° cells. A POI dataset
//! is sharded into one JSON file per occupied cell, named after the cell,
//! so a query only downloads the cells its search area touches. The
//! producer and the query side both derive cell identity and cell names
//! from this module; the shard naming scheme has no second implementation.
//!
//! Cells are held as integer indices (the coordinate axis scaled by 100
//! and floored). All cell arithmetic, in particular enumerating the cells
//! of a rectangle, happens on the integers, so stepping across a region
//! can never drift, skip, or duplicate a row the way repeated addition of
//! 0.01 would.

use crate::bbox::BoundingBox;
use crate::coord::Coordinate;
use std::fmt;

/// Side length of a grid cell, in degrees.
///
/// About 1.1 km of latitude; less longitude at higher latitudes, an
/// accepted approximation of the partitioning scheme.
pub const CELL_SIZE_DEGREES: f64 = 0.01;

/// Identifies one 0.01°×0.01° partition of coordinate space.
///
/// A cell is the pair of its axis indices: `lat_idx = floor(lat / 0.01)`,
/// `lon_idx = floor(lon / 0.01)`. Every coordinate inside the cell maps to
/// the same `GridCell`, and [`GridCell::name`] yields the canonical shard
/// name shared with the dataset producer.
///
/// # Examples
///
/// ```
/// use pubgrid_types::cell::GridCell;
/// use pubgrid_types::coord::Coordinate;
///
/// let cell = GridCell::containing(&Coordinate::new(51.5074, -0.1278));
/// assert_eq!(cell.name(), "51.50x-0.13");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    lat_idx: i32,
    lon_idx: i32,
}

impl GridCell {
    /// The cell containing a coordinate.
    ///
    /// Each axis is floored independently, toward negative infinity,
    /// never truncated toward zero. A coordinate of -0.005 therefore lands
    /// in cell -0.01, not 0.00; truncation would silently misroute
    /// lookups just south of the equator or west of the prime meridian.
    pub fn containing(position: &Coordinate) -> Self {
        Self {
            lat_idx: floor_index(position.lat()),
            lon_idx: floor_index(position.lon()),
        }
    }

    /// Build a cell directly from its axis indices.
    pub fn from_indices(lat_idx: i32, lon_idx: i32) -> Self {
        Self { lat_idx, lon_idx }
    }

    /// Build a cell from its own corner coordinates.
    ///
    /// For values that are already multiples of the cell size (e.g. read
    /// back from a cell name), rounding recovers the exact index even when
    /// the product picks up floating-point noise: `4.56 * 100` is not
    /// quite 456. Use [`GridCell::containing`] for arbitrary coordinates.
    pub fn from_corner(lat: f64, lon: f64) -> Self {
        Self {
            lat_idx: round_index(lat),
            lon_idx: round_index(lon),
        }
    }

    /// Latitude index of the cell.
    #[inline]
    pub fn lat_idx(&self) -> i32 {
        self.lat_idx
    }

    /// Longitude index of the cell.
    #[inline]
    pub fn lon_idx(&self) -> i32 {
        self.lon_idx
    }

    /// Latitude of the cell's southern edge, in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        f64::from(self.lat_idx) / 100.0
    }

    /// Longitude of the cell's western edge, in degrees.
    #[inline]
    pub fn lon(&self) -> f64 {
        f64::from(self.lon_idx) / 100.0
    }

    /// The cell's southwest corner.
    pub fn southwest(&self) -> Coordinate {
        Coordinate::new(self.lat(), self.lon())
    }

    /// Canonical shard name for this cell, e.g. `"51.50x-0.13"`.
    ///
    /// This string, plus a `.json` extension, is the filename of the
    /// dataset shard for the cell. Both axis values are rendered to
    /// exactly two decimal places; any change here breaks the contract
    /// with already-published datasets.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// All cells in the inclusive rectangle spanned by two corner cells.
    ///
    /// Runs entirely on the integer indices, so the enumeration is exact:
    /// no floating-point accumulation, no skipped or duplicated rows at
    /// the boundary. An inverted span (southwest beyond northeast on
    /// either axis) yields no cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubgrid_types::cell::GridCell;
    ///
    /// let sw = GridCell::from_corner(1.23, 4.56);
    /// let ne = GridCell::from_corner(1.25, 4.56);
    /// let cells = GridCell::span(sw, ne);
    /// assert_eq!(cells.len(), 3);
    /// ```
    pub fn span(southwest: GridCell, northeast: GridCell) -> Vec<GridCell> {
        let mut cells = Vec::new();
        for lat_idx in southwest.lat_idx..=northeast.lat_idx {
            for lon_idx in southwest.lon_idx..=northeast.lon_idx {
                cells.push(GridCell { lat_idx, lon_idx });
            }
        }
        cells
    }

    /// All cells intersecting a bounding box.
    ///
    /// Quantizes both corners and spans the inclusive rectangle between
    /// them, covering every cell the box touches.
    pub fn covering(bounds: &BoundingBox) -> Vec<GridCell> {
        Self::span(
            Self::containing(&bounds.southwest()),
            Self::containing(&bounds.northeast()),
        )
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}x{:.2}", self.lat(), self.lon())
    }
}

/// Scale a coordinate axis value to its cell index, flooring toward
/// negative infinity.
#[inline]
fn floor_index(value: f64) -> i32 {
    (value * 100.0).floor() as i32
}

/// Recover a cell index from a value that is already a cell corner.
#[inline]
fn round_index(value: f64) -> i32 {
    (value * 100.0).round() as i32
}
