//! Scrapeview - browse scraped marketplace listings.
//!
//! Reads live listings from a hosted PostgREST backend (Supabase), filtered
//! by a free-text title search and a category, newest first.
//!
//! # Architecture
//!
//! - **`domain`** - Listings, categories, filters and the backend-neutral
//!   [`ListingQuery`](domain::ListingQuery)
//! - **`port`** - The [`ListingStore`](port::ListingStore) seam
//! - **`adapter::outbound::postgrest`** - HTTP client for the `listings` table
//! - **`application::listing`** - Query service with stale-response guard,
//!   plus the debounced search driver
//! - **`adapter::inbound::cli`** - Command-line front end
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Features
//!
//! - `testkit` - Expose in-memory test doubles to integration tests
//! - `integration-tests` - Enable tests that need a reachable backend
//!
//! # Example
//!
//! ```no_run
//! use scrapeview::domain::{Category, ListingFilter};
//! use scrapeview::infrastructure::bootstrap;
//! use scrapeview::infrastructure::config::settings::Config;
//!
//! # async fn run() -> scrapeview::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! let service = bootstrap::build_listing_service(&config)?;
//! let filter = ListingFilter::new("truck", Category::new("vehicles"));
//! for listing in service.fetch_listings(filter).await {
//!     println!("{} {}", listing.formatted_price, listing.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
