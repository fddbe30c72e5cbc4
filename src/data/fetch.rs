//! "Last request wins" bookkeeping for collection fetches
//!
//! Every fetch is issued a monotonically increasing ticket. Only a result
//! carrying the most recently issued ticket may touch the collection, so a
//! slow response to an older request can never overwrite a fresher one.

use crate::error::FetchError;

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Fetch state surfaced to the view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// What happened to a completed fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// The result replaced the collection
    Applied { items: usize },
    /// A newer fetch was issued after this one; the result was discarded
    Stale,
    /// The data source failed; the collection was left as it was
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied { .. })
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, FetchOutcome::Stale)
    }
}

#[derive(Debug, Default)]
pub struct FetchTracker {
    issued: u64,
    in_flight: Option<FetchTicket>,
    status: FetchStatus,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding any fetch still in flight
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        if let Some(previous) = self.in_flight.replace(ticket) {
            tracing::debug!(target: "fetch", "fetch #{} superseded by #{}", previous.id(), ticket.id());
        }
        self.status = FetchStatus::Loading;
        ticket
    }

    /// True if `ticket` is the one whose result may still be applied
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    /// Settle `ticket`. Returns false when it was superseded.
    pub fn settle(&mut self, ticket: FetchTicket, error: Option<&FetchError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = None;
        self.status = match error {
            Some(err) => FetchStatus::Failed(err.to_string()),
            None => FetchStatus::Idle,
        };
        true
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }
}
