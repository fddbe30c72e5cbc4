//! Background refresh of a list view's collection
//!
//! Fetches run on tokio's blocking pool and report back over a channel. Only
//! the task owning the `ListViewController` drains that channel, so the
//! controller is never written from more than one place. Results that arrive
//! after a newer fetch was issued are discarded by the controller's ticket
//! check.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::data::data_source::DataSource;
use crate::data::fetch::{FetchOutcome, FetchTicket};
use crate::data::list_view::ListViewController;
use crate::error::FetchError;

struct Completion<T> {
    ticket: FetchTicket,
    result: Result<Vec<T>, FetchError>,
}

pub struct Refresher<T> {
    source: Arc<dyn DataSource<T>>,
    tx: mpsc::UnboundedSender<Completion<T>>,
    rx: mpsc::UnboundedReceiver<Completion<T>>,
}

impl<T: Send + 'static> Refresher<T> {
    pub fn new(source: Arc<dyn DataSource<T>>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { source, tx, rx }
    }

    /// Issue a fetch in the background. Must be called inside a tokio runtime.
    pub fn refresh(&self, view: &mut ListViewController<T>) -> FetchTicket {
        let ticket = view.begin_fetch();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        debug!(target: "refresher", "fetch #{} from {}", ticket.id(), source.describe());
        tokio::task::spawn_blocking(move || {
            let result = source.fetch();
            // A closed channel means the owning view is gone
            let _ = tx.send(Completion { ticket, result });
        });

        ticket
    }

    /// Apply every completion that has already arrived, without waiting
    pub fn apply_ready(&mut self, view: &mut ListViewController<T>) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            outcomes.push(Self::apply(view, completion));
        }
        outcomes
    }

    /// Wait for the next completion and apply it
    pub async fn next_outcome(&mut self, view: &mut ListViewController<T>) -> Option<FetchOutcome> {
        let completion = self.rx.recv().await?;
        Some(Self::apply(view, completion))
    }

    /// Wait until the latest issued fetch settles. Returns `None` when no
    /// fetch is in flight.
    pub async fn settle(&mut self, view: &mut ListViewController<T>) -> Option<FetchOutcome> {
        while view.fetch_in_flight().is_some() {
            let outcome = self.next_outcome(view).await?;
            if !outcome.is_stale() {
                return Some(outcome);
            }
        }
        None
    }

    fn apply(view: &mut ListViewController<T>, completion: Completion<T>) -> FetchOutcome {
        let outcome = view.complete_fetch(completion.ticket, completion.result);
        if let FetchOutcome::Applied { items } = &outcome {
            info!(target: "refresher", "fetch #{} applied ({} records)", completion.ticket.id(), items);
        }
        outcome
    }
}
