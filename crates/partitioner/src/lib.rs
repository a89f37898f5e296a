//! Dataset producer for Pubgrid.
//!
//! Takes a raw POI collection, buckets every record into its 0.01°×0.01°
//! grid cell, and writes one JSON shard per occupied cell, named with the
//! cell's canonical name. The consumer quantizes query coordinates with
//! the same encoder, so whatever this tool writes, the query side finds.
//!
//! Two input formats:
//! - a JSON array of `{name, location: {lat, lon}}` records (the shard
//!   record shape itself);
//! - a GeoJSON FeatureCollection, where `Point` features become records
//!   directly and `Polygon` features (venues mapped as outlines) are
//!   collapsed to their centroid. Features without a usable name or
//!   geometry are skipped with a warning.

use geo::Centroid;
use geojson::{Feature, GeoJson, Value};
use pubgrid_types::{Coordinate, GridCell, Poi};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PartitionError>;

/// What can go wrong while producing a dataset.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input is not valid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),
}

/// Outcome of a partitioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardSummary {
    /// Records written across all shards.
    pub records: usize,
    /// Shard files written (occupied cells).
    pub cells: usize,
}

/// Load POI records from a dataset file.
///
/// Accepts either a plain JSON array of records or a GeoJSON
/// FeatureCollection.
pub fn load_pois<P: AsRef<Path>>(path: P) -> Result<Vec<Poi>> {
    let raw = fs::read_to_string(path)?;

    let value: serde_json::Value = serde_json::from_str(&raw)?;
    if value.get("type").and_then(|t| t.as_str()) == Some("FeatureCollection") {
        return pois_from_geojson(&raw);
    }

    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => Err(PartitionError::UnsupportedInput(format!(
            "expected a record array or a GeoJSON FeatureCollection, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn pois_from_geojson(raw: &str) -> Result<Vec<Poi>> {
    let geojson: GeoJson = raw.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(PartitionError::UnsupportedInput(
            "expected a GeoJSON FeatureCollection".to_string(),
        ));
    };

    Ok(collection
        .features
        .iter()
        .filter_map(poi_from_feature)
        .collect())
}

/// Turn one GeoJSON feature into a record, if it carries enough.
fn poi_from_feature(feature: &Feature) -> Option<Poi> {
    let name = feature
        .properties
        .as_ref()
        .and_then(|props| props.get("name"))
        .and_then(|name| name.as_str());
    let Some(name) = name else {
        log::warn!("skipping unnamed feature");
        return None;
    };

    let Some(geometry) = feature.geometry.as_ref() else {
        log::warn!("skipping feature {:?} without geometry", name);
        return None;
    };

    let location = match &geometry.value {
        // GeoJSON positions are [lon, lat].
        Value::Point(position) if position.len() >= 2 => {
            Coordinate::new(position[1], position[0])
        }
        Value::Polygon(rings) => centroid_of_rings(rings)?,
        _ => {
            log::warn!("skipping feature {:?} with unsupported geometry", name);
            return None;
        }
    };

    Some(Poi::new(name, location))
}

/// Centroid of a polygon given as GeoJSON rings.
fn centroid_of_rings(rings: &[Vec<Vec<f64>>]) -> Option<Coordinate> {
    let exterior = rings.first()?;
    let coords: Vec<geo::Coord<f64>> = exterior
        .iter()
        .filter(|position| position.len() >= 2)
        .map(|position| geo::coord! { x: position[0], y: position[1] })
        .collect();
    if coords.len() < 4 {
        // Not a closed ring; nothing sensible to collapse.
        return None;
    }

    let polygon = geo::Polygon::new(geo::LineString::from(coords), vec![]);
    let centroid = polygon.centroid()?;
    Some(Coordinate::new(centroid.y(), centroid.x()))
}

/// Bucket records by the grid cell containing them.
pub fn partition(pois: Vec<Poi>) -> HashMap<GridCell, Vec<Poi>> {
    let mut shards: HashMap<GridCell, Vec<Poi>> = HashMap::new();
    for poi in pois {
        shards
            .entry(GridCell::containing(&poi.location))
            .or_default()
            .push(poi);
    }
    shards
}

/// Write one `{cell}.json` shard per occupied cell into `out_dir`.
///
/// Cells with no records get no file; the consumer treats a missing shard
/// as an empty cell.
pub fn write_shards<P: AsRef<Path>>(
    out_dir: P,
    shards: &HashMap<GridCell, Vec<Poi>>,
) -> Result<ShardSummary> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut records = 0;
    for (cell, pois) in shards {
        let path = out_dir.join(format!("{}.json", cell.name()));
        fs::write(&path, serde_json::to_vec(pois)?)?;
        records += pois.len();
        log::debug!("wrote {} records to {}", pois.len(), path.display());
    }

    Ok(ShardSummary {
        records,
        cells: shards.len(),
    })
}

/// Produce a sharded dataset from an input file.
pub fn run<I: AsRef<Path>, O: AsRef<Path>>(input: I, out_dir: O) -> Result<ShardSummary> {
    let pois = load_pois(input)?;
    let shards = partition(pois);
    write_shards(out_dir, &shards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_groups_by_cell() {
        let pois = vec![
            Poi::new("A", Coordinate::new(51.501, -0.101)),
            Poi::new("B", Coordinate::new(51.509, -0.109)),
            Poi::new("C", Coordinate::new(51.511, -0.101)),
        ];

        let shards = partition(pois);
        assert_eq!(shards.len(), 2);

        let shared = GridCell::from_indices(5150, -11);
        assert_eq!(shards[&shared].len(), 2);
        assert_eq!(shards[&GridCell::from_indices(5151, -11)].len(), 1);
    }

    #[test]
    fn test_point_feature_becomes_poi() {
        let feature: Feature = serde_json::from_str(
            r#"{
                "type": "Feature",
                "properties": {"name": "The Anchor"},
                "geometry": {"type": "Point", "coordinates": [-0.096, 51.5065]}
            }"#,
        )
        .unwrap();

        let poi = poi_from_feature(&feature).unwrap();
        assert_eq!(poi.name, "The Anchor");
        assert_eq!(poi.location.lat(), 51.5065);
        assert_eq!(poi.location.lon(), -0.096);
    }

    #[test]
    fn test_polygon_feature_collapses_to_centroid() {
        let feature: Feature = serde_json::from_str(
            r#"{
                "type": "Feature",
                "properties": {"name": "The Courtyard"},
                "geometry": {"type": "Polygon", "coordinates": [[
                    [-0.100, 51.500],
                    [-0.098, 51.500],
                    [-0.098, 51.502],
                    [-0.100, 51.502],
                    [-0.100, 51.500]
                ]]}
            }"#,
        )
        .unwrap();

        let poi = poi_from_feature(&feature).unwrap();
        assert!((poi.location.lat() - 51.501).abs() < 1e-9);
        assert!((poi.location.lon() - -0.099).abs() < 1e-9);
    }

    #[test]
    fn test_unnamed_feature_is_skipped() {
        let feature: Feature = serde_json::from_str(
            r#"{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Point", "coordinates": [-0.096, 51.5065]}
            }"#,
        )
        .unwrap();

        assert!(poi_from_feature(&feature).is_none());
    }
}
