//! HTTP shard transport.
//!
//! Fetches dataset shards from a static file host at
//! `{base_url}/partitions/{cell}.json`. A 404 is a valid "no data in this
//! cell" answer; everything else that goes wrong is reported as a
//! [`StoreError`] for the query planner to absorb.

use pubgrid::store::PartitionStore;
use pubgrid::StoreError;
use pubgrid_types::{GridCell, Poi};
use reqwest::StatusCode;

/// Partition store backed by a static file host.
///
/// # Example
///
/// ```ignore
/// use pubgrid_client::transport::http::HttpPartitionStore;
///
/// let store = HttpPartitionStore::new("https://example.net/pubs");
/// let pois = store.fetch(cell).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpPartitionStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPartitionStore {
    /// Create a store rooted at `base_url`.
    ///
    /// The URL is the dataset root; the `partitions/` path segment and the
    /// shard filename are appended per fetch. A trailing slash on
    /// `base_url` is tolerated.
    pub fn new<U: Into<String>>(base_url: U) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// URL of one cell's shard.
    fn shard_url(&self, cell: GridCell) -> String {
        format!("{}/partitions/{}.json", self.base_url, cell.name())
    }
}

impl PartitionStore for HttpPartitionStore {
    async fn fetch(&self, cell: GridCell) -> Result<Vec<Poi>, StoreError> {
        let url = self.shard_url(cell);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            // No shard published for this cell: an empty cell, not a failure.
            return Ok(Vec::new());
        }

        let response = response
            .error_for_status()
            .map_err(|err| StoreError::Response(err.to_string()))?;

        response
            .json::<Vec<Poi>>()
            .await
            .map_err(|err| StoreError::Malformed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_url_shape() {
        let store = HttpPartitionStore::new("https://example.net/pubs");
        let cell = GridCell::from_corner(51.50, -0.13);
        assert_eq!(
            store.shard_url(cell),
            "https://example.net/pubs/partitions/51.50x-0.13.json"
        );
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let store = HttpPartitionStore::new("https://example.net/pubs/");
        let cell = GridCell::from_corner(0.00, 0.00);
        assert_eq!(
            store.shard_url(cell),
            "https://example.net/pubs/partitions/0.00x0.00.json"
        );
    }
}
