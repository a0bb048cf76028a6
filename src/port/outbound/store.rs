//! Remote listing store port.

use async_trait::async_trait;

use crate::domain::{Listing, ListingQuery};
use crate::error::QueryError;

/// Read-only access to the remote listings collection.
///
/// Implementations must honour every predicate, the ordering and the row
/// cap of the query. A store that has no matching rows returns an empty
/// vector, never an error.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: one instance is shared by every
/// in-flight fetch.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Return the store name for logging.
    fn name(&self) -> &'static str;

    /// Execute one read.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] for transport, status or decoding failures.
    async fn select(&self, query: &ListingQuery) -> Result<Vec<Listing>, QueryError>;
}
