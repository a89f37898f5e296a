//! Render model: what the display layer receives.
//!
//! Each result row is a name, a distance in kilometers to one decimal,
//! and a walking-directions deep link. Building the rows is pure; putting
//! them on screen belongs to whoever implements
//! [`RenderSink`](crate::session::RenderSink).

use pubgrid_types::{Coordinate, RankedPoi};

/// One displayable result row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPub {
    /// Venue name.
    pub name: String,
    /// Distance from the origin in kilometers, one decimal, e.g. `"0.3"`.
    pub distance_km: String,
    /// Walking-directions deep link from the origin to the venue.
    pub map_url: String,
}

/// Walking-directions deep link between two coordinates.
///
/// Coordinates are rendered in plain `lat,lon` form; the commas stay
/// unescaped, matching what map clients accept in practice.
///
/// # Examples
///
/// ```rust
/// use pubgrid_client::render::map_url;
/// use pubgrid_types::Coordinate;
///
/// let url = map_url(&Coordinate::new(51.5, -0.1), &Coordinate::new(51.51, -0.11));
/// assert!(url.contains("origin=51.5,-0.1&destination=51.51,-0.11&travelmode=walking"));
/// ```
pub fn map_url(origin: &Coordinate, destination: &Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={}&destination={}&travelmode=walking",
        origin, destination
    )
}

/// Turn ranked results into display rows, preserving their order.
pub fn to_rows(ranked: &[RankedPoi], origin: &Coordinate) -> Vec<RenderedPub> {
    ranked
        .iter()
        .map(|entry| RenderedPub {
            name: entry.poi.name.clone(),
            distance_km: format!("{:.1}", entry.distance_km()),
            map_url: map_url(origin, &entry.poi.location),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubgrid_types::Poi;

    #[test]
    fn test_map_url_query_string() {
        let url = map_url(&Coordinate::new(51.5, -0.1), &Coordinate::new(51.51, -0.11));
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=51.5,-0.1&destination=51.51,-0.11&travelmode=walking"
        );
    }

    #[test]
    fn test_rows_format_km_to_one_decimal() {
        let origin = Coordinate::new(51.5, -0.1);
        let ranked = vec![
            RankedPoi {
                poi: Poi::new("Round the corner", Coordinate::new(51.5021, -0.1)),
                distance_m: 234.0,
            },
            RankedPoi {
                poi: Poi::new("A stroll away", Coordinate::new(51.5085, -0.1)),
                distance_m: 949.9,
            },
        ];

        let rows = to_rows(&ranked, &origin);
        assert_eq!(rows[0].distance_km, "0.2");
        assert_eq!(rows[1].distance_km, "0.9");
        assert_eq!(rows[0].name, "Round the corner");
        assert!(rows[0].map_url.contains("origin=51.5,-0.1"));
        assert!(rows[0].map_url.contains("destination=51.5021,-0.1"));
    }
}
