//! Geometric helpers leveraging the geo crate.
//!
//! Distance computation and radius-to-bounding-box conversion for the
//! query planner. Coordinates are geodetic lat/lon degrees; distances are
//! meters.

use crate::error::{PubgridError, Result};
use geo::{Distance, Euclidean, Geodesic, Haversine, Rhumb};
use pubgrid_types::{BoundingBox, Coordinate};
use serde::{Deserialize, Serialize};

/// Meters per degree of latitude (and of longitude at the equator).
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Distance metrics for spatial calculations.
///
/// - **Haversine**: spherical distance, fast and accurate enough for
///   neighborhood-scale queries (the default)
/// - **Geodesic**: ellipsoidal distance (Karney 2013), more accurate, slower
/// - **Rhumb**: constant-bearing distance
/// - **Euclidean**: planar distance, only for projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Haversine,
    Geodesic,
    Rhumb,
    Euclidean,
}

/// Calculate the distance between two coordinates using the given metric.
///
/// # Returns
///
/// Distance in meters.
///
/// # Examples
///
/// ```rust
/// use pubgrid::geometry::{DistanceMetric, distance_between};
/// use pubgrid_types::Coordinate;
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// let la = Coordinate::new(34.0522, -118.2437);
/// let dist = distance_between(&nyc, &la, DistanceMetric::Haversine);
/// assert!(dist > 3_900_000.0); // ~3,944 km
/// ```
pub fn distance_between(a: &Coordinate, b: &Coordinate, metric: DistanceMetric) -> f64 {
    let (a, b) = (*a.inner(), *b.inner());
    match metric {
        DistanceMetric::Haversine => Haversine.distance(a, b),
        DistanceMetric::Geodesic => Geodesic.distance(a, b),
        DistanceMetric::Rhumb => Rhumb.distance(a, b),
        DistanceMetric::Euclidean => Euclidean.distance(a, b),
    }
}

/// Bounding box extending `radius_m` meters from `origin` in each cardinal
/// direction.
///
/// Approximately square: the latitude offset uses the mean meters-per-degree
/// figure, and the longitude offset widens with latitude. The box is clamped
/// to [-90, 90] latitude near the poles; longitude is not wrapped at ±180°.
///
/// # Errors
///
/// Returns an error if the radius is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use pubgrid::geometry::bounds_of_distance;
/// use pubgrid_types::Coordinate;
///
/// let origin = Coordinate::new(51.5074, -0.1278);
/// let bounds = bounds_of_distance(&origin, 1000.0).unwrap();
/// assert!(bounds.contains(&origin));
/// ```
pub fn bounds_of_distance(origin: &Coordinate, radius_m: f64) -> Result<BoundingBox> {
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(PubgridError::InvalidInput(format!(
            "search radius must be a non-negative number of meters, got {}",
            radius_m
        )));
    }

    let lat_offset = radius_m / METERS_PER_DEGREE;

    // A degree of longitude shrinks with latitude; clamp the cosine so the
    // box stays finite at the poles.
    let cos_lat = origin.lat().to_radians().cos().max(0.01);
    let lon_offset = radius_m / (METERS_PER_DEGREE * cos_lat);

    let south = (origin.lat() - lat_offset).max(-90.0);
    let north = (origin.lat() + lat_offset).min(90.0);

    Ok(BoundingBox::new(
        Coordinate::new(south, origin.lon() - lon_offset),
        Coordinate::new(north, origin.lon() + lon_offset),
    ))
}
