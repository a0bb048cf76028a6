//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for listings with deterministic timestamps.
//! - [`store`] - [`MemoryStore`](store::MemoryStore), an in-memory
//!   [`ListingStore`](crate::port::ListingStore) with scripted failures
//!   and per-call gates.

pub mod domain;
pub mod store;
