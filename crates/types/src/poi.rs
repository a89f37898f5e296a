//! Point-of-interest records, as stored in dataset shards.

use crate::coord::Coordinate;
use serde::{Deserialize, Serialize};

/// A named point of interest.
///
/// This is exactly the record stored in dataset shards: a display name and
/// a location. Distances are never part of the stored record; they are
/// attached per query as [`RankedPoi`].
///
/// # Examples
///
/// ```
/// use pubgrid_types::coord::Coordinate;
/// use pubgrid_types::poi::Poi;
///
/// let pub_ = Poi::new("The Anchor", Coordinate::new(51.5065, -0.0960));
/// assert_eq!(pub_.name, "The Anchor");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    /// Display name of the venue.
    pub name: String,
    /// Where it is.
    pub location: Coordinate,
}

impl Poi {
    /// Create a new POI record.
    pub fn new<N: Into<String>>(name: N, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A POI annotated with its distance from a query origin, in meters.
///
/// Exists only for the duration of query processing and rendering; it is
/// never serialized back into a shard.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPoi {
    /// The underlying record.
    pub poi: Poi,
    /// Straight-line distance from the query origin, in meters.
    pub distance_m: f64,
}

impl RankedPoi {
    /// Distance from the origin in kilometers.
    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}
