//! Composition root: builds the store client and the services on top of it.
//!
//! The backend client is created here exactly once and handed to the
//! services as `Arc<dyn ListingStore>`; nothing else constructs one.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::postgrest::PostgrestClient;
use crate::application::listing::{ListingQueryService, SearchDriver};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::ListingStore;

/// Build the listing store from configuration.
///
/// # Errors
///
/// Returns an error if the backend URL is invalid.
pub fn build_store(config: &Config) -> Result<Arc<dyn ListingStore>> {
    let client = PostgrestClient::from_config(&config.backend)?;
    info!(
        endpoint = client.endpoint(),
        key = %config.backend.masked_key(),
        "Listing store ready"
    );
    Ok(Arc::new(client))
}

/// Build the listing query service over an existing store.
#[must_use]
pub fn build_service(config: &Config, store: Arc<dyn ListingStore>) -> Arc<ListingQueryService> {
    Arc::new(ListingQueryService::new(store, config.search.limit))
}

/// Build the search driver for a service.
#[must_use]
pub fn build_driver(config: &Config, service: Arc<ListingQueryService>) -> SearchDriver {
    SearchDriver::new(service, config.search.debounce())
}

/// Build the full stack from configuration.
///
/// # Errors
///
/// Returns an error if the backend URL is invalid.
pub fn build_listing_service(config: &Config) -> Result<Arc<ListingQueryService>> {
    let store = build_store(config)?;
    Ok(build_service(config, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListingFilter;
    use crate::testkit::domain::catalogue;
    use crate::testkit::store::MemoryStore;

    #[test]
    fn store_uses_configured_backend() {
        let config = Config::default();
        let store = build_store(&config).unwrap();
        assert_eq!(store.name(), "postgrest");
    }

    #[tokio::test]
    async fn service_honours_configured_limit() {
        let mut config = Config::default();
        config.search.limit = 7;
        let store: Arc<dyn ListingStore> = Arc::new(MemoryStore::new(catalogue(40)));
        let service = build_service(&config, store);

        assert_eq!(service.limit(), 7);
        let listings = service.fetch_listings(ListingFilter::default()).await;
        assert_eq!(listings.len(), 7);
    }
}
