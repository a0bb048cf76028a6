//! In-memory listing store.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};

use crate::domain::{Listing, ListingQuery};
use crate::error::QueryError;
use crate::port::outbound::store::ListingStore;

/// Releases one held [`MemoryStore::select`] call.
#[derive(Debug)]
pub struct Gate {
    tx: oneshot::Sender<()>,
}

impl Gate {
    pub fn release(self) {
        let _ = self.tx.send(());
    }
}

/// [`ListingStore`] evaluating queries over a vector of rows.
///
/// The outcome of each call (rows or failure) is fixed when the call
/// starts; a held call then waits for its [`Gate`] before returning.
/// Holds and failures apply to calls in arrival order.
pub struct MemoryStore {
    rows: Mutex<Vec<Listing>>,
    queries: Mutex<Vec<ListingQuery>>,
    holds: Mutex<VecDeque<oneshot::Receiver<()>>>,
    failures: Mutex<usize>,
    respect_limit: bool,
    calls: watch::Sender<usize>,
}

impl MemoryStore {
    pub fn new(rows: Vec<Listing>) -> Self {
        let (calls, _) = watch::channel(0);
        Self {
            rows: Mutex::new(rows),
            queries: Mutex::new(Vec::new()),
            holds: Mutex::new(VecDeque::new()),
            failures: Mutex::new(0),
            respect_limit: true,
            calls,
        }
    }

    /// Return every match, ignoring the query's row cap.
    #[must_use]
    pub fn ignoring_limit(mut self) -> Self {
        self.respect_limit = false;
        self
    }

    /// Replace the stored rows.
    pub fn set_rows(&self, rows: Vec<Listing>) {
        *self.rows.lock() = rows;
    }

    /// Make the next `n` calls fail with a 503.
    pub fn fail_next(&self, n: usize) {
        *self.failures.lock() += n;
    }

    /// Hold the next call that has no hold yet until the gate is released.
    pub fn hold_next(&self) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.holds.lock().push_back(rx);
        Gate { tx }
    }

    /// Number of `select` calls started so far.
    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }

    /// Queries received, in arrival order.
    pub fn queries(&self) -> Vec<ListingQuery> {
        self.queries.lock().clone()
    }

    /// Wait until at least `n` calls have started.
    pub async fn wait_for_calls(&self, n: usize) {
        let mut rx = self.calls.subscribe();
        let _ = rx.wait_for(|count| *count >= n).await;
    }

    fn evaluate(&self, query: &ListingQuery) -> Vec<Listing> {
        let rows = self.rows.lock().clone();
        if self.respect_limit {
            query.apply(rows)
        } else {
            query.clone().with_limit(usize::MAX).apply(rows)
        }
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn select(&self, query: &ListingQuery) -> Result<Vec<Listing>, QueryError> {
        self.queries.lock().push(query.clone());

        let fail = {
            let mut failures = self.failures.lock();
            let fail = *failures > 0;
            if fail {
                *failures -= 1;
            }
            fail
        };
        let outcome = if fail {
            Err(QueryError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            })
        } else {
            Ok(self.evaluate(query))
        };
        let hold = self.holds.lock().pop_front();

        self.calls.send_modify(|count| *count += 1);

        if let Some(hold) = hold {
            let _ = hold.await;
        }
        outcome
    }
}
