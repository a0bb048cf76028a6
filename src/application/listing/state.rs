//! Observable listing search state.

use serde::Serialize;

use crate::domain::{Category, Listing, ListingFilter};

/// What the display layer renders.
///
/// `listings` is replaced wholesale by each applied fetch and never
/// patched. `search_query` and `category` track the most recently issued
/// fetch, so they can run ahead of `listings` while `loading` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub listings: Vec<Listing>,
    pub loading: bool,
    pub search_query: String,
    pub category: Category,
    /// Sequence number of the fetch whose rows are in `listings`.
    ///
    /// Zero until the first fetch succeeds.
    pub generation: u64,
}

impl QueryState {
    /// Filter of the most recently issued fetch.
    #[must_use]
    pub fn filter(&self) -> ListingFilter {
        ListingFilter::new(self.search_query.clone(), self.category.clone())
    }

    /// Settled with nothing to show.
    #[must_use]
    pub fn shows_no_results(&self) -> bool {
        !self.loading && self.listings.is_empty()
    }
}
