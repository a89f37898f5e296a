use clap::Parser;
use pubgrid_partitioner::run;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Shard a POI dataset into grid-cell files", long_about = None)]
struct Args {
    /// POI dataset: a JSON record array or a GeoJSON FeatureCollection
    input: PathBuf,

    /// Directory to write `{cell}.json` shards into
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pubgrid_partitioner=info,info".into()),
        )
        .init();

    let args = Args::parse();

    let summary = run(&args.input, &args.out_dir)?;
    info!(
        "wrote {} records into {} shards under {}",
        summary.records,
        summary.cells,
        args.out_dir.display()
    );

    Ok(())
}
