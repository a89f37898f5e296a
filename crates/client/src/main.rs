use clap::{ArgGroup, Parser};
use pubgrid::Config;
use pubgrid_client::render::RenderedPub;
use pubgrid_client::session::{QuerySession, RenderSink};
use pubgrid_client::transport::fs::FsPartitionStore;
use pubgrid_client::transport::http::HttpPartitionStore;
use pubgrid_client::StaticPosition;
use pubgrid_types::Coordinate;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Find pubs near a position", long_about = None)]
#[command(group(
    ArgGroup::new("dataset")
        .required(true)
        .args(["base_url", "data_dir"])
))]
struct Args {
    /// Latitude of the current position, in degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of the current position, in degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Search radius in meters
    #[arg(short, long, default_value_t = 1000.0)]
    radius: f64,

    /// Base URL of a dataset file host
    #[arg(long)]
    base_url: Option<String>,

    /// Local dataset shard directory
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

/// Prints status lines and result rows to stdout.
struct Stdout;

impl RenderSink for Stdout {
    fn status(&mut self, line: &str) {
        println!("{}", line);
    }

    fn results(&mut self, rows: &[RenderedPub]) {
        for row in rows {
            println!("{} ({}km)  {}", row.name, row.distance_km, row.map_url);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pubgrid_client=info,pubgrid=info,info".into()),
        )
        .init();

    let args = Args::parse();

    // Stand-in for device geolocation: coordinates come from the command
    // line, and their absence is a position-unavailable failure.
    let provider = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => StaticPosition::at(Coordinate::new(lat, lon)),
        _ => StaticPosition::unavailable(),
    };

    let config = Config::default().with_radius_m(args.radius);
    let session = QuerySession::new();
    let mut sink = Stdout;

    if let Some(data_dir) = args.data_dir {
        let store = FsPartitionStore::new(data_dir);
        session.run(&provider, &store, &mut sink, &config).await?;
    } else if let Some(base_url) = args.base_url {
        let store = HttpPartitionStore::new(base_url);
        session.run(&provider, &store, &mut sink, &config).await?;
    }

    Ok(())
}
