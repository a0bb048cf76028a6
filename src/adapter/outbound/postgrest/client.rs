//! PostgREST HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::decode_rows;
use super::request::query_params;
use super::settings::PostgrestConfig;
use crate::domain::{Listing, ListingQuery};
use crate::error::{QueryError, Result};
use crate::port::outbound::store::ListingStore;

/// Header carrying the project key.
const API_KEY_HEADER: &str = "apikey";

/// Listing store backed by a PostgREST endpoint.
///
/// Built once by the entry point and shared behind an `Arc`; the inner
/// `reqwest::Client` pools connections across fetches.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    http: HttpClient,
    endpoint: String,
    anon_key: String,
}

impl PostgrestClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(base_url: &str, table: &str, anon_key: impl Into<String>) -> Result<Self> {
        let config = PostgrestConfig {
            url: base_url.to_string(),
            table: table.to_string(),
            anon_key: anon_key.into(),
            ..Default::default()
        };
        Self::from_config(&config)
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is not a valid URL.
    pub fn from_config(config: &PostgrestConfig) -> Result<Self> {
        url::Url::parse(&config.url)?;

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            anon_key: config.anon_key.clone(),
        })
    }

    /// Collection endpoint this client reads from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ListingStore for PostgrestClient {
    fn name(&self) -> &'static str {
        "postgrest"
    }

    async fn select(&self, query: &ListingQuery) -> std::result::Result<Vec<Listing>, QueryError> {
        let params = query_params(query);
        debug!(endpoint = %self.endpoint, ?params, "Querying listings");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&params)
            .header(API_KEY_HEADER, &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let listings = decode_rows(&body)?;
        debug!(count = listings.len(), "Fetched listings");
        Ok(listings)
    }
}


/// Integration tests that require a reachable backend.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use super::*;
    use crate::domain::{Category, ListingFilter, DEFAULT_LIMIT};

    fn create_test_client() -> Option<PostgrestClient> {
        let mut config = PostgrestConfig::default();
        config.apply_env(|name| std::env::var(name).ok());
        if config.anon_key.is_empty() {
            eprintln!("Skipping PostgREST integration test: SUPABASE_ANON_KEY not set");
            return None;
        }
        PostgrestClient::from_config(&config).ok()
    }

    #[tokio::test]
    #[ignore = "requires SUPABASE_URL, SUPABASE_ANON_KEY and network access"]
    async fn test_live_listings_are_ordered_and_capped() {
        let Some(client) = create_test_client() else {
            return;
        };

        let query = ListingQuery::for_filter(&ListingFilter::default(), DEFAULT_LIMIT);
        let listings = client.select(&query).await.expect("query failed");

        assert!(listings.len() <= DEFAULT_LIMIT);
        assert!(listings.iter().all(|l| l.is_live));
        assert!(listings
            .windows(2)
            .all(|pair| pair[0].scraped_at >= pair[1].scraped_at));
    }

    #[tokio::test]
    #[ignore = "requires SUPABASE_URL, SUPABASE_ANON_KEY and network access"]
    async fn test_category_filter_is_exact() {
        let Some(client) = create_test_client() else {
            return;
        };

        let filter = ListingFilter::new("", Category::new("vehicles"));
        let query = ListingQuery::for_filter(&filter, DEFAULT_LIMIT);
        let listings = client.select(&query).await.expect("query failed");

        assert!(listings.iter().all(|l| l.category_name == "vehicles"));
    }
}
