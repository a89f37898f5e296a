//! Origin resolution.
//!
//! The device geolocation capability is consumed at a trait boundary: a
//! provider resolves the caller's position once per query, or fails with
//! one of four structured kinds. Location failures are terminal for the
//! query: no shard fetch is ever issued after one.

use pubgrid_types::Coordinate;
use thiserror::Error;

/// Why the origin could not be resolved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// The user or platform refused access to the position.
    #[error("permission to read the position was denied")]
    PermissionDenied,
    /// No position could be determined.
    #[error("no position available")]
    Unavailable,
    /// The position request did not complete in time.
    #[error("position request timed out")]
    TimedOut,
    /// Anything else, with the provider's own message.
    #[error("{0}")]
    Other(String),
}

/// Source of the caller's current position.
pub trait LocationProvider {
    /// Resolve the current position once.
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinate, LocationError>> + Send;
}

/// A provider with a fixed answer.
///
/// Covers the CLI (coordinates given as arguments) and tests (any of the
/// failure kinds on demand).
#[derive(Debug, Clone)]
pub struct StaticPosition {
    answer: Result<Coordinate, LocationError>,
}

impl StaticPosition {
    /// A provider that reports the given position.
    pub fn at(position: Coordinate) -> Self {
        Self {
            answer: Ok(position),
        }
    }

    /// A provider that reports no position available.
    pub fn unavailable() -> Self {
        Self::failing(LocationError::Unavailable)
    }

    /// A provider that fails with the given error.
    pub fn failing(err: LocationError) -> Self {
        Self { answer: Err(err) }
    }
}

impl LocationProvider for StaticPosition {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        self.answer.clone()
    }
}
