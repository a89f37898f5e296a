//! Query session: the per-query lifecycle.
//!
//! A query moves through
//! `LocatingOrigin -> PlanningBoundingBox -> FetchingPartitions(n) ->
//! Merging -> Rendering` and back to idle; a location failure ends it
//! before any shard is fetched. Results are handed to the caller's
//! [`RenderSink`] rather than written to shared display state, and every
//! query carries a sequence number so a slow query that finishes after a
//! newer one started is dropped instead of overwriting the newer display.

use crate::location::{LocationError, LocationProvider};
use crate::render::{self, RenderedPub};
use pubgrid::store::PartitionStore;
use pubgrid::{Config, Result, query};
use std::sync::atomic::{AtomicU64, Ordering};

/// Where a query is in its lifecycle. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    LocatingOrigin,
    PlanningBoundingBox,
    FetchingPartitions(usize),
    Merging,
    Rendering,
}

/// How a query ended.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Results were handed to the sink; holds the number of rows.
    Rendered(usize),
    /// A newer query started before this one finished; nothing rendered.
    Superseded,
    /// The origin could not be resolved; no shard fetch was issued.
    LocationFailed(LocationError),
}

/// Receiver for status lines and result rows.
pub trait RenderSink {
    /// A single-line, user-visible progress or failure message.
    fn status(&mut self, line: &str);

    /// The ordered result rows of a completed query.
    fn results(&mut self, rows: &[RenderedPub]);
}

/// Hands out query sequence numbers and remembers the newest.
///
/// The display belongs to whichever query began last; completions holding
/// an older number are stale and must not render.
#[derive(Debug, Default)]
pub struct DisplayGate {
    latest: AtomicU64,
}

impl DisplayGate {
    /// Begin a query: claim the next sequence number.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `seq` still owns the display.
    pub fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }
}

/// Runs queries against a partition store, one lifecycle at a time.
///
/// The session owns the [`DisplayGate`]; reuse one session across queries
/// so overlapping runs are sequenced against each other.
#[derive(Debug, Default)]
pub struct QuerySession {
    gate: DisplayGate,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one query: resolve the origin, fetch and rank, render.
    ///
    /// Location failures and supersession are outcomes, not errors; the
    /// `Err` path is reserved for invalid input such as a bad radius.
    pub async fn run<L, S, R>(
        &self,
        provider: &L,
        store: &S,
        sink: &mut R,
        config: &Config,
    ) -> Result<QueryOutcome>
    where
        L: LocationProvider,
        S: PartitionStore,
        R: RenderSink,
    {
        let seq = self.gate.begin();
        let mut phase = QueryPhase::LocatingOrigin;
        log::debug!("query {}: {:?}", seq, phase);

        sink.status("Getting location.");
        let origin = match provider.current_position().await {
            Ok(origin) => origin,
            Err(err) => {
                sink.status(&location_status(&err));
                log::debug!("query {} ended in {:?}", seq, err);
                return Ok(QueryOutcome::LocationFailed(err));
            }
        };
        sink.status(&format!(
            "Finding pubs near ({}, {})",
            origin.lat(),
            origin.lon()
        ));

        phase = QueryPhase::PlanningBoundingBox;
        log::debug!("query {}: {:?}", seq, phase);
        let cells = query::plan(&origin, config.radius_m)?;

        phase = QueryPhase::FetchingPartitions(cells.len());
        log::debug!("query {}: {:?}", seq, phase);
        let pois = query::fetch_all(store, &cells).await;

        phase = QueryPhase::Merging;
        log::debug!("query {}: {:?}", seq, phase);
        let ranked = query::rank(pois, &origin, config);

        phase = QueryPhase::Rendering;
        log::debug!("query {}: {:?}", seq, phase);
        if !self.gate.is_current(seq) {
            log::debug!("query {} superseded before rendering", seq);
            return Ok(QueryOutcome::Superseded);
        }
        let rows = render::to_rows(&ranked, &origin);
        sink.results(&rows);

        Ok(QueryOutcome::Rendered(rows.len()))
    }
}

/// The user-visible status line for a location failure.
fn location_status(err: &LocationError) -> String {
    match err {
        LocationError::PermissionDenied => "Location permission denied".to_string(),
        LocationError::Unavailable => "Unable to find location.".to_string(),
        LocationError::TimedOut => "Timed out when getting location".to_string(),
        LocationError::Other(message) => message.clone(),
    }
}
