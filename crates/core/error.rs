//! Error types for the pubgrid crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PubgridError>;

/// Top-level error type for query planning.
#[derive(Debug, Error)]
pub enum PubgridError {
    /// A caller-supplied value was out of range or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Error raised by a partition store when a single shard lookup fails.
///
/// These never abort a query: the planner folds every failed cell into an
/// empty contribution. They exist so transports can say *why* a cell
/// yielded nothing when diagnostics are needed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request could not be issued or did not complete.
    #[error("shard request failed: {0}")]
    Request(String),
    /// The shard host answered with a non-success status (other than
    /// not-found, which is a valid empty cell).
    #[error("shard response rejected: {0}")]
    Response(String),
    /// The shard body was not a valid POI array.
    #[error("shard body malformed: {0}")]
    Malformed(String),
}
