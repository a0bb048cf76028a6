//! Search trigger policy.
//!
//! Watches the user's [`ListingFilter`] and issues fetches on the
//! [`ListingQueryService`]:
//!
//! - the initial filter is fetched immediately
//! - a category change is fetched immediately
//! - search text edits are coalesced until the input has been quiet for
//!   the debounce interval, then the latest text is fetched
//!
//! Each fetch is numbered before its task is spawned, so spawn order
//! never decides which result wins. Fetches run as their own tasks and may
//! overlap; the service's sequence guard keeps the newest one. When the
//! input sender is dropped the driver waits for outstanding fetches and
//! exits.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::service::ListingQueryService;
use crate::domain::ListingFilter;

/// Handle for a running [`SearchDriver`].
pub struct SearchDriverHandle {
    task: JoinHandle<()>,
}

impl SearchDriverHandle {
    /// Wait for the driver to exit (after its input closes).
    pub async fn join(self) {
        if let Err(err) = self.task.await {
            debug!(error = %err, "Search driver task ended abnormally");
        }
    }

    /// Stop the driver without waiting for outstanding fetches.
    pub fn abort(&self) {
        self.task.abort();
    }
}

/// Re-issues listing fetches as the filter changes.
pub struct SearchDriver {
    service: Arc<ListingQueryService>,
    debounce: Duration,
    in_flight: Vec<JoinHandle<()>>,
}

impl SearchDriver {
    #[must_use]
    pub fn new(service: Arc<ListingQueryService>, debounce: Duration) -> Self {
        Self {
            service,
            debounce,
            in_flight: Vec::new(),
        }
    }

    /// Spawn the driver on the current runtime.
    pub fn start(self, input: watch::Receiver<ListingFilter>) -> SearchDriverHandle {
        SearchDriverHandle {
            task: tokio::spawn(self.run(input)),
        }
    }

    /// Drive fetches until `input` closes.
    pub async fn run(mut self, mut input: watch::Receiver<ListingFilter>) {
        let mut last = input.borrow_and_update().clone();
        info!(
            search = %last.search_query,
            category = %last.category,
            debounce_ms = self.debounce.as_millis() as u64,
            "Search driver started"
        );
        self.dispatch(last.clone());

        while input.changed().await.is_ok() {
            let mut next = input.borrow_and_update().clone();

            if next.category == last.category && !self.debounce.is_zero() {
                next = Self::settle(&mut input, next, self.debounce).await;
            }

            if next == last {
                debug!("Filter settled unchanged, skipping fetch");
                continue;
            }
            self.dispatch(next.clone());
            last = next;
        }

        debug!(pending = self.in_flight.len(), "Search input closed");
        for task in self.in_flight.drain(..) {
            let _ = task.await;
        }
        info!("Search driver stopped");
    }

    /// Absorb text edits until the input is quiet for `debounce`.
    ///
    /// Returns early on a category change or when the input closes.
    async fn settle(
        input: &mut watch::Receiver<ListingFilter>,
        mut pending: ListingFilter,
        debounce: Duration,
    ) -> ListingFilter {
        let category = pending.category.clone();
        loop {
            tokio::select! {
                changed = input.changed() => {
                    if changed.is_err() {
                        return pending;
                    }
                    pending = input.borrow_and_update().clone();
                    if pending.category != category {
                        return pending;
                    }
                }
                () = tokio::time::sleep(debounce) => return pending,
            }
        }
    }

    /// Issue a fetch now and run its read on a separate task.
    fn dispatch(&mut self, filter: ListingFilter) {
        self.in_flight.retain(|task| !task.is_finished());
        let fetch = self.service.issue(filter);
        let service = Arc::clone(&self.service);
        self.in_flight.push(tokio::spawn(async move {
            service.execute(fetch).await;
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::port::outbound::store::ListingStore;
    use crate::testkit::domain::listing;
    use crate::testkit::store::MemoryStore;

    fn setup(debounce_ms: u64) -> (Arc<MemoryStore>, Arc<ListingQueryService>, SearchDriver) {
        let store = Arc::new(MemoryStore::new(vec![
            listing("a", "Red truck", 1),
            listing("b", "Blue truck", 2),
            listing("c", "Oak table", 3),
        ]));
        let service = Arc::new(ListingQueryService::new(
            Arc::clone(&store) as Arc<dyn ListingStore>,
            50,
        ));
        let driver = SearchDriver::new(Arc::clone(&service), Duration::from_millis(debounce_ms));
        (store, service, driver)
    }

    #[tokio::test]
    async fn test_initial_filter_is_fetched() {
        let (store, service, driver) = setup(50);
        let (tx, rx) = watch::channel(ListingFilter::default());
        let handle = driver.start(rx);

        drop(tx);
        handle.join().await;

        assert_eq!(store.call_count(), 1);
        assert_eq!(service.snapshot().listings.len(), 3);
    }

    #[tokio::test]
    async fn test_keystrokes_are_coalesced() {
        let (store, service, driver) = setup(100);
        let (tx, rx) = watch::channel(ListingFilter::default());
        let handle = driver.start(rx);
        store.wait_for_calls(1).await;

        for text in ["t", "tr", "tru", "truc", "truck"] {
            tx.send_modify(|f| f.search_query = text.to_string());
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        drop(tx);
        handle.join().await;

        assert_eq!(store.call_count(), 2);
        let state = service.snapshot();
        assert_eq!(state.search_query, "truck");
        assert_eq!(state.listings.len(), 2);
    }

    #[tokio::test]
    async fn test_zero_debounce_fetches_every_edit() {
        let (store, service, driver) = setup(0);
        let (tx, rx) = watch::channel(ListingFilter::default());
        let handle = driver.start(rx);
        store.wait_for_calls(1).await;

        tx.send_modify(|f| f.search_query = "oak".into());
        store.wait_for_calls(2).await;
        tx.send_modify(|f| f.search_query = "red".into());
        store.wait_for_calls(3).await;
        drop(tx);
        handle.join().await;

        assert_eq!(store.call_count(), 3);
        assert_eq!(service.snapshot().search_query, "red");
    }

    #[tokio::test]
    async fn test_category_change_skips_debounce() {
        let (store, service, driver) = setup(60_000);
        let (tx, rx) = watch::channel(ListingFilter::default());
        let handle = driver.start(rx);
        store.wait_for_calls(1).await;

        tx.send_modify(|f| f.category = Category::new("vehicles"));
        tokio::time::timeout(Duration::from_secs(5), store.wait_for_calls(2))
            .await
            .expect("category change should fetch without waiting");

        drop(tx);
        handle.join().await;
        assert_eq!(service.snapshot().category, Category::new("vehicles"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_back_to_back_dispatches_keep_the_later_filter() {
        for _ in 0..200 {
            let (store, service, mut driver) = setup(0);
            let settled = tokio::spawn(async move {
                driver.dispatch(ListingFilter::default().with_search("red"));
                driver.dispatch(ListingFilter::default().with_search("oak"));
                for task in driver.in_flight.drain(..) {
                    task.await.unwrap();
                }
            });
            settled.await.unwrap();

            assert_eq!(store.call_count(), 2);
            let state = service.snapshot();
            assert!(!state.loading);
            assert_eq!(state.search_query, "oak");
            assert_eq!(state.generation, 2);
            assert_eq!(state.listings.len(), 1);
            assert_eq!(state.listings[0].title, "Oak table");
        }
    }

    #[tokio::test]
    async fn test_abort_stops_pending_debounce() {
        let (store, _service, driver) = setup(60_000);
        let (tx, rx) = watch::channel(ListingFilter::default());
        let handle = driver.start(rx);
        store.wait_for_calls(1).await;

        tx.send_modify(|f| f.search_query = "oak".into());
        tokio::task::yield_now().await;
        handle.abort();
        handle.join().await;

        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn test_edit_back_to_fetched_value_is_skipped() {
        let (store, _service, driver) = setup(50);
        let (tx, rx) = watch::channel(ListingFilter::default());
        let handle = driver.start(rx);
        store.wait_for_calls(1).await;

        tx.send_modify(|f| f.search_query = "x".into());
        tx.send_modify(|f| f.search_query.clear());
        drop(tx);
        handle.join().await;

        assert_eq!(store.call_count(), 1);
    }
}
