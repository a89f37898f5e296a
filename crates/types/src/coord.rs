//! Wrapped coordinate type built on the `geo` crate's point primitive.
//!
//! Dataset shards and map links both speak in latitude-first coordinate
//! pairs, while `geo` is x/y (longitude-first). `Coordinate` owns that
//! conversion so the rest of the codebase never flips axes by hand.

use serde::{Deserialize, Serialize};

/// A geographic position in floating-point degrees.
///
/// Wraps `geo::Point` (x = longitude, y = latitude) and serializes as the
/// `{"lat": .., "lon": ..}` object used by dataset shards.
///
/// # Examples
///
/// ```
/// use pubgrid_types::coord::Coordinate;
///
/// let london = Coordinate::new(51.5074, -0.1278);
/// assert_eq!(london.lat(), 51.5074);
/// assert_eq!(london.lon(), -0.1278);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LatLon", into = "LatLon")]
pub struct Coordinate {
    inner: geo::Point<f64>,
}

/// Wire shape of a coordinate: latitude first, named fields.
#[derive(Serialize, Deserialize)]
struct LatLon {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a new coordinate from latitude and longitude in degrees.
    ///
    /// # Arguments
    ///
    /// * `lat` - Latitude in degrees (typically -90 to 90)
    /// * `lon` - Longitude in degrees (typically -180 to 180)
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            inner: geo::Point::new(lon, lat),
        }
    }

    /// Get the latitude in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.inner.y()
    }

    /// Get the longitude in degrees.
    #[inline]
    pub fn lon(&self) -> f64 {
        self.inner.x()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// Calculate haversine distance to another coordinate in meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubgrid_types::coord::Coordinate;
    ///
    /// let nyc = Coordinate::new(40.7128, -74.0060);
    /// let la = Coordinate::new(34.0522, -118.2437);
    /// let distance = nyc.haversine_distance(&la);
    /// assert!(distance > 3_900_000.0); // ~3,944 km
    /// ```
    #[inline]
    pub fn haversine_distance(&self, other: &Coordinate) -> f64 {
        use geo::Distance;
        geo::Haversine.distance(self.inner, other.inner)
    }
}

impl From<LatLon> for Coordinate {
    fn from(value: LatLon) -> Self {
        Self::new(value.lat, value.lon)
    }
}

impl From<Coordinate> for LatLon {
    fn from(value: Coordinate) -> Self {
        Self {
            lat: value.lat(),
            lon: value.lon(),
        }
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        coord.inner
    }
}

impl std::fmt::Display for Coordinate {
    /// Renders as `lat,lon`, the form map query strings expect.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat(), self.lon())
    }
}
