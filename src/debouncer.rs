use std::time::{Duration, Instant};

use crate::data::list_view::ListViewController;

/// Delays search updates until typing has been idle for a while.
///
/// The view feeds every keystroke into `input` and calls `poll` from its
/// tick/render loop. The controller only sees the term once input settles,
/// so it never recomputes for intermediate keystrokes.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    /// The duration to wait after the last keystroke before applying
    delay: Duration,
    /// When the last keystroke arrived
    last_input: Option<Instant>,
    /// Term waiting to be applied
    pending: Option<String>,
}

impl SearchDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_input: None,
            pending: None,
        }
    }

    /// Record the current contents of the search box
    pub fn input(&mut self, term: &str) {
        self.input_at(term, Instant::now());
    }

    fn input_at(&mut self, term: &str, at: Instant) {
        self.last_input = Some(at);
        self.pending = Some(term.to_string());
    }

    /// Apply the pending term if the delay has elapsed. Returns true when the
    /// controller's search changed.
    pub fn poll<T>(&mut self, view: &mut ListViewController<T>) -> bool {
        self.poll_at(view, Instant::now())
    }

    fn poll_at<T>(&mut self, view: &mut ListViewController<T>, now: Instant) -> bool {
        let Some(last) = self.last_input else {
            return false;
        };
        if now.saturating_duration_since(last) < self.delay {
            return false;
        }

        self.last_input = None;
        match self.pending.take() {
            Some(term) if term != view.search() => {
                view.set_search(&term);
                true
            }
            _ => false,
        }
    }

    /// Apply the pending term immediately, e.g. when Enter is pressed
    pub fn flush<T>(&mut self, view: &mut ListViewController<T>) -> bool {
        self.last_input = None;
        match self.pending.take() {
            Some(term) if term != view.search() => {
                view.set_search(&term);
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending term is applied
    pub fn time_remaining(&self) -> Option<Duration> {
        self.last_input
            .map(|last| self.delay.saturating_sub(last.elapsed()))
    }

    /// Drop any pending term
    pub fn reset(&mut self) {
        self.last_input = None;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
