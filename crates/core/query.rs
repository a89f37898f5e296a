//! Region query planning.
//!
//! Turns an origin and a search radius into the set of grid cells to look
//! up, fans the shard fetches out in parallel, and folds the results into
//! one distance-ranked list. The fan-out is joined exactly once: every
//! cell is waited for, and a cell that fails only costs its own
//! contribution; it never cancels, delays, or taints the others.

use crate::config::Config;
use crate::error::Result;
use crate::geometry;
use crate::store::PartitionStore;
use futures::future::join_all;
use pubgrid_types::{Coordinate, GridCell, Poi, RankedPoi};
use std::cmp::Ordering;

/// The cells a query must fetch: every cell intersecting the bounding box
/// that extends `radius_m` meters from the origin.
///
/// # Errors
///
/// Returns an error if the radius is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use pubgrid::query::plan;
/// use pubgrid_types::Coordinate;
///
/// let cells = plan(&Coordinate::new(51.5074, -0.1278), 1000.0).unwrap();
/// // A 1 km radius around central London touches a 3x4 block of cells.
/// assert_eq!(cells.len(), 12);
/// ```
pub fn plan(origin: &Coordinate, radius_m: f64) -> Result<Vec<GridCell>> {
    let bounds = geometry::bounds_of_distance(origin, radius_m)?;
    Ok(GridCell::covering(&bounds))
}

/// Fetch every cell's shard and flatten the results.
///
/// All fetches are issued up front and joined once. A cell whose lookup
/// fails contributes zero records; the failure is logged and absorbed
/// here, at the cell boundary.
pub async fn fetch_all<S: PartitionStore>(store: &S, cells: &[GridCell]) -> Vec<Poi> {
    let shards = join_all(cells.iter().map(|cell| async move {
        match store.fetch(*cell).await {
            Ok(pois) => pois,
            Err(err) => {
                log::debug!("cell {} contributed no results: {}", cell.name(), err);
                Vec::new()
            }
        }
    }))
    .await;

    shards.into_iter().flatten().collect()
}

/// Annotate each record with its distance from the origin, sort ascending,
/// and drop everything beyond the radius.
///
/// The sort is stable: records at equal distance keep their input order.
pub fn rank(pois: Vec<Poi>, origin: &Coordinate, config: &Config) -> Vec<RankedPoi> {
    let mut ranked: Vec<RankedPoi> = pois
        .into_iter()
        .map(|poi| {
            let distance_m = geometry::distance_between(origin, &poi.location, config.metric);
            RankedPoi { poi, distance_m }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance_m
            .partial_cmp(&b.distance_m)
            .unwrap_or(Ordering::Equal)
    });
    ranked.retain(|entry| entry.distance_m <= config.radius_m);
    ranked
}

/// Run a complete nearby query: plan the cells, fetch them all, rank the
/// merged results.
///
/// # Errors
///
/// Returns an error only for an invalid radius. Individual shard failures
/// are absorbed per cell and never fail the query.
///
/// # Examples
///
/// ```rust
/// use pubgrid::query::find_nearby;
/// use pubgrid::store::MemoryPartitionStore;
/// use pubgrid::Config;
/// use pubgrid_types::{Coordinate, Poi};
///
/// let mut store = MemoryPartitionStore::new();
/// store.insert(Poi::new("The Anchor", Coordinate::new(51.5065, -0.0960)));
///
/// let origin = Coordinate::new(51.5074, -0.0940);
/// let found = futures::executor::block_on(find_nearby(
///     &store,
///     &origin,
///     &Config::default(),
/// )).unwrap();
/// assert_eq!(found[0].poi.name, "The Anchor");
/// ```
pub async fn find_nearby<S: PartitionStore>(
    store: &S,
    origin: &Coordinate,
    config: &Config,
) -> Result<Vec<RankedPoi>> {
    let cells = plan(origin, config.radius_m)?;
    log::debug!(
        "querying {} cells within {} m of ({}, {})",
        cells.len(),
        config.radius_m,
        origin.lat(),
        origin.lon()
    );

    let pois = fetch_all(store, &cells).await;
    Ok(rank(pois, origin, config))
}
