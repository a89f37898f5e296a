use crate::coord::Coordinate;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned latitude/longitude rectangle.
///
/// Defined by its southwest and northeast corners. This is a wrapper
/// around `geo::Rect` with coordinate-oriented accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The underlying geometric rectangle (x = lon, y = lat).
    rect: Rect<f64>,
}

impl BoundingBox {
    /// Create a bounding box from two opposite corners.
    ///
    /// The corners are normalized, so the arguments may be given in either
    /// order; `southwest()`/`northeast()` always return the true extremes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubgrid_types::bbox::BoundingBox;
    /// use pubgrid_types::coord::Coordinate;
    ///
    /// let bounds = BoundingBox::new(
    ///     Coordinate::new(51.49, -0.14),
    ///     Coordinate::new(51.52, -0.11),
    /// );
    /// assert_eq!(bounds.southwest().lat(), 51.49);
    /// assert_eq!(bounds.northeast().lon(), -0.11);
    /// ```
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: a.lon(), y: a.lat() },
                geo::coord! { x: b.lon(), y: b.lat() },
            ),
        }
    }

    /// The southwest corner (minimum latitude, minimum longitude).
    pub fn southwest(&self) -> Coordinate {
        Coordinate::new(self.rect.min().y, self.rect.min().x)
    }

    /// The northeast corner (maximum latitude, maximum longitude).
    pub fn northeast(&self) -> Coordinate {
        Coordinate::new(self.rect.max().y, self.rect.max().x)
    }

    /// The center of the box.
    pub fn center(&self) -> Coordinate {
        let c = self.rect.center();
        Coordinate::new(c.y, c.x)
    }

    /// Height of the box in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        self.rect.height()
    }

    /// Width of the box in degrees of longitude.
    pub fn lon_span(&self) -> f64 {
        self.rect.width()
    }

    /// Check whether a coordinate lies within the box (borders included).
    pub fn contains(&self, position: &Coordinate) -> bool {
        position.lat() >= self.rect.min().y
            && position.lat() <= self.rect.max().y
            && position.lon() >= self.rect.min().x
            && position.lon() <= self.rect.max().x
    }

    /// Access the inner `geo::Rect`.
    pub fn inner(&self) -> &Rect<f64> {
        &self.rect
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self { rect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_corners() {
        let bounds = BoundingBox::new(
            Coordinate::new(51.49, -0.14),
            Coordinate::new(51.52, -0.11),
        );
        assert_eq!(bounds.southwest(), Coordinate::new(51.49, -0.14));
        assert_eq!(bounds.northeast(), Coordinate::new(51.52, -0.11));
    }

    #[test]
    fn test_bbox_normalizes_corner_order() {
        let bounds = BoundingBox::new(
            Coordinate::new(51.52, -0.11),
            Coordinate::new(51.49, -0.14),
        );
        assert_eq!(bounds.southwest(), Coordinate::new(51.49, -0.14));
        assert_eq!(bounds.northeast(), Coordinate::new(51.52, -0.11));
    }

    #[test]
    fn test_bbox_contains() {
        let bounds = BoundingBox::new(
            Coordinate::new(51.49, -0.14),
            Coordinate::new(51.52, -0.11),
        );
        assert!(bounds.contains(&Coordinate::new(51.50, -0.12)));
        assert!(bounds.contains(&Coordinate::new(51.49, -0.14))); // border
        assert!(!bounds.contains(&Coordinate::new(51.48, -0.12)));
        assert!(!bounds.contains(&Coordinate::new(51.50, -0.10)));
    }

    #[test]
    fn test_bbox_spans() {
        let bounds = BoundingBox::new(
            Coordinate::new(51.49, -0.14),
            Coordinate::new(51.52, -0.11),
        );
        assert!((bounds.lat_span() - 0.03).abs() < 1e-12);
        assert!((bounds.lon_span() - 0.03).abs() < 1e-12);
    }
}
