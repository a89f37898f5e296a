//! Full query path over a dataset written by the partitioner.

use pubgrid::{Config, find_nearby};
use pubgrid_client::render::RenderedPub;
use pubgrid_client::session::{QueryOutcome, QuerySession, RenderSink};
use pubgrid_client::transport::fs::FsPartitionStore;
use pubgrid_client::{LocationError, StaticPosition};
use pubgrid_partitioner::{partition, write_shards};
use pubgrid_types::{Coordinate, Poi};

#[derive(Default)]
struct RecordingSink {
    statuses: Vec<String>,
    rendered: Vec<Vec<RenderedPub>>,
}

impl RenderSink for RecordingSink {
    fn status(&mut self, line: &str) {
        self.statuses.push(line.to_string());
    }

    fn results(&mut self, rows: &[RenderedPub]) {
        self.rendered.push(rows.to_vec());
    }
}

fn write_dataset(dir: &std::path::Path) {
    let shards = partition(vec![
        Poi::new("The Chandos", Coordinate::new(51.5090, -0.1280)),
        Poi::new("The Harp", Coordinate::new(51.5096, -0.1160)),
        Poi::new("The Ship & Shovell", Coordinate::new(51.5130, -0.1280)),
        Poi::new("The Mayflower", Coordinate::new(51.5015, -0.0536)),
    ]);
    write_shards(dir, &shards).unwrap();
}

#[tokio::test]
async fn whatever_the_producer_writes_the_query_finds() {
    let dataset = tempfile::tempdir().unwrap();
    write_dataset(dataset.path());

    let origin = Coordinate::new(51.5074, -0.1278);
    let store = FsPartitionStore::new(dataset.path());

    let found = find_nearby(&store, &origin, &Config::default()).await.unwrap();
    let names: Vec<&str> = found.iter().map(|r| r.poi.name.as_str()).collect();
    assert_eq!(names, ["The Chandos", "The Ship & Shovell", "The Harp"]);
}

#[tokio::test]
async fn session_renders_rows_with_links() {
    let dataset = tempfile::tempdir().unwrap();
    write_dataset(dataset.path());

    let store = FsPartitionStore::new(dataset.path());
    let session = QuerySession::new();
    let mut sink = RecordingSink::default();

    let outcome = session
        .run(
            &StaticPosition::at(Coordinate::new(51.5074, -0.1278)),
            &store,
            &mut sink,
            &Config::default(),
        )
        .await
        .unwrap();

    assert_eq!(outcome, QueryOutcome::Rendered(3));
    assert_eq!(
        sink.statuses,
        vec![
            "Getting location.",
            "Finding pubs near (51.5074, -0.1278)",
        ]
    );

    let rows = &sink.rendered[0];
    assert_eq!(rows[0].name, "The Chandos");
    assert_eq!(rows[0].distance_km, "0.2");
    assert!(
        rows[0]
            .map_url
            .contains("origin=51.5074,-0.1278&destination=51.509,-0.128&travelmode=walking")
    );
}

#[tokio::test]
async fn a_corrupt_shard_only_silences_its_own_cell() {
    let dataset = tempfile::tempdir().unwrap();
    write_dataset(dataset.path());

    // Corrupt The Harp's shard.
    std::fs::write(dataset.path().join("51.50x-0.12.json"), b"{truncated").unwrap();

    let origin = Coordinate::new(51.5074, -0.1278);
    let store = FsPartitionStore::new(dataset.path());
    let found = find_nearby(&store, &origin, &Config::default()).await.unwrap();

    let names: Vec<&str> = found.iter().map(|r| r.poi.name.as_str()).collect();
    assert_eq!(names, ["The Chandos", "The Ship & Shovell"]);
}

#[tokio::test]
async fn location_failure_stops_before_the_dataset_is_touched() {
    let store = FsPartitionStore::new("/nonexistent/dataset");
    let session = QuerySession::new();
    let mut sink = RecordingSink::default();

    let outcome = session
        .run(
            &StaticPosition::failing(LocationError::PermissionDenied),
            &store,
            &mut sink,
            &Config::default(),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        QueryOutcome::LocationFailed(LocationError::PermissionDenied)
    );
    assert_eq!(sink.statuses.last().unwrap(), "Location permission denied");
    assert!(sink.rendered.is_empty());
}
