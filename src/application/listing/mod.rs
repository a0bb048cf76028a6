//! Listing search: the query service, its observable state, and the
//! trigger policy that re-issues fetches as the user edits the filter.

pub mod config;
pub mod driver;
pub mod service;
pub mod state;

pub use config::SearchConfig;
pub use driver::{SearchDriver, SearchDriverHandle};
pub use service::{IssuedFetch, ListingQueryService};
pub use state::QueryState;
