//! Listing domain types and query construction.
//!
//! Everything here is pure: no I/O, no clocks. The remote store and the
//! display layers depend on these types, never the other way around.

mod category;
mod filter;
mod id;
mod listing;
mod query;

pub use category::{Category, CategoryInfo, KNOWN_CATEGORIES};
pub use filter::ListingFilter;
pub use id::ListingId;
pub use listing::Listing;
pub use query::{column, ListingQuery, OrderBy, Predicate, DEFAULT_LIMIT, LISTINGS_TABLE};
