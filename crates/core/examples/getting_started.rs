use pubgrid::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see per-cell lookups)
    env_logger::init();

    println!("=== Pubgrid - Getting Started ===\n");

    // === PARTITION KEYS ===
    println!("1. Partition Keys");
    println!("-----------------");

    let origin = Coordinate::new(51.5074, -0.1278); // central London
    let cell = GridCell::containing(&origin);
    println!("   ({}, {}) lives in cell {}", origin.lat(), origin.lon(), cell);
    println!("   Its shard would be served as partitions/{}.json\n", cell);

    // === AN IN-MEMORY DATASET ===
    println!("2. Building a Store");
    println!("-------------------");

    let mut store = MemoryPartitionStore::new();
    store.insert(Poi::new("The Chandos", Coordinate::new(51.5090, -0.1280)));
    store.insert(Poi::new("The Harp", Coordinate::new(51.5096, -0.1268)));
    store.insert(Poi::new("The Mayflower", Coordinate::new(51.5015, -0.0536)));
    println!("   3 pubs bucketed into {} shards\n", store.shard_count());

    // === THE QUERY ===
    println!("3. Finding What's Nearby");
    println!("------------------------");

    let config = Config::default(); // 1000 m radius, haversine
    let cells = plan(&origin, config.radius_m)?;
    println!("   A {} m radius fans out over {} cells", config.radius_m, cells.len());

    let found = futures::executor::block_on(find_nearby(&store, &origin, &config))?;
    println!("   {} pubs within reach:", found.len());
    for entry in &found {
        println!("     - {} ({:.0} m)", entry.poi.name, entry.distance_m);
    }
    println!("   (The Mayflower is ~5 km east, outside the radius)");

    Ok(())
}
