//! Pubgrid Client
//!
//! Query client for Pubgrid partitioned POI datasets.
//!
//! Resolves the caller's position, fans shard lookups out over the grid
//! cells around it, and renders the merged results as distance-annotated
//! map links.
//!
//! # Transports
//!
//! - **HTTP**: fetches shards from a static file host
//! - **Filesystem**: reads shards straight from a local dataset directory
//!
//! # Example
//!
//! ```ignore
//! use pubgrid_client::session::QuerySession;
//! use pubgrid_client::transport::http::HttpPartitionStore;
//!
//! let store = HttpPartitionStore::new("https://example.net/pubs");
//! let session = QuerySession::new();
//! session.run(&provider, &store, &mut sink, &config).await?;
//! ```

pub mod location;
pub mod render;
pub mod session;
pub mod transport;

pub use location::{LocationError, LocationProvider, StaticPosition};
pub use render::{RenderedPub, map_url};
pub use session::{QueryOutcome, QuerySession, RenderSink};
pub use transport::fs::FsPartitionStore;
pub use transport::http::HttpPartitionStore;
