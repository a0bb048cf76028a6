//! Listing query service.
//!
//! Turns a [`ListingFilter`] into one read against the [`ListingStore`] and
//! publishes the outcome through a `watch` channel:
//!
//! ```text
//! fetch_listings(filter)
//!     |
//!     +-- seq = ++issued, loading = true
//!     +-- store.select(live + category + title ilike, newest first, limit)
//!     |
//!     +-- Ok(rows), seq latest   -> listings = rows, loading = false
//!     +-- Err(e),   seq latest   -> warn!, listings kept, loading = false
//!     +-- any,      seq stale    -> dropped (a newer fetch is in flight)
//! ```
//!
//! Fetches may overlap. Each one takes a sequence number when issued and
//! only the latest-issued fetch may touch `listings` or clear `loading`,
//! so a slow early response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::state::QueryState;
use crate::domain::{Listing, ListingFilter, ListingQuery};
use crate::port::outbound::store::ListingStore;

/// Read-only listing search over an injected store.
pub struct ListingQueryService {
    store: Arc<dyn ListingStore>,
    limit: usize,
    /// Sequence number of the most recently issued fetch.
    issued: AtomicU64,
    state: watch::Sender<QueryState>,
}

impl ListingQueryService {
    /// Create a service reading from `store`, capping results at `limit`.
    pub fn new(store: Arc<dyn ListingStore>, limit: usize) -> Self {
        let (state, _) = watch::channel(QueryState::default());
        Self {
            store,
            limit,
            issued: AtomicU64::new(0),
            state,
        }
    }

    /// Receive every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> QueryState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Fetch live listings matching `filter` and return what is displayed
    /// once this fetch settles.
    ///
    /// Store failures are logged and swallowed: the previous listings stay
    /// in place and `loading` still returns to `false`.
    pub async fn fetch_listings(&self, filter: ListingFilter) -> Vec<Listing> {
        let fetch = self.issue(filter);
        self.execute(fetch).await
    }

    /// Number a fetch and publish its filter with `loading` set.
    ///
    /// The number is taken under the state lock, so issue order alone
    /// decides which fetch is the latest; callers that spawn the read
    /// must issue before spawning.
    pub fn issue(&self, filter: ListingFilter) -> IssuedFetch {
        let mut seq = 0;
        self.state.send_modify(|state| {
            seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            state.loading = true;
            state.search_query.clone_from(&filter.search_query);
            state.category = filter.category.clone();
        });
        IssuedFetch { seq, filter }
    }

    /// Run the read for an issued fetch and apply it if it is still the
    /// latest one.
    pub async fn execute(&self, fetch: IssuedFetch) -> Vec<Listing> {
        let IssuedFetch { seq, filter } = fetch;
        let query = ListingQuery::for_filter(&filter, self.limit);
        debug!(
            seq,
            store = self.store.name(),
            search = %filter.search_query,
            category = %filter.category,
            "Fetching listings"
        );
        let result = self.store.select(&query).await;

        let limit = self.limit;
        let applied = self.state.send_if_modified(|state| {
            if self.issued.load(Ordering::SeqCst) != seq {
                return false;
            }
            match &result {
                Ok(rows) => {
                    state.listings = rows.iter().take(limit).cloned().collect();
                    state.generation = seq;
                }
                Err(err) => {
                    warn!(seq, error = %err, "Listing query failed");
                }
            }
            state.loading = false;
            true
        });

        if !applied {
            match &result {
                Ok(rows) => debug!(seq, count = rows.len(), "Discarding stale listing response"),
                Err(err) => warn!(seq, error = %err, "Stale listing query failed"),
            }
        } else if let Ok(rows) = &result {
            debug!(seq, count = rows.len().min(limit), "Listings updated");
        }

        self.state.borrow().listings.clone()
    }
}

/// A numbered fetch whose read has not run yet.
#[derive(Debug)]
#[must_use = "an issued fetch holds `loading` until it is executed"]
pub struct IssuedFetch {
    seq: u64,
    filter: ListingFilter,
}

impl IssuedFetch {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}
