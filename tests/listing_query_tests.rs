//! Listing search behavior over an in-memory store.

use std::sync::Arc;

use scrapeview::application::listing::ListingQueryService;
use scrapeview::domain::{Category, Listing, ListingFilter};
use scrapeview::port::ListingStore;
use scrapeview::testkit::domain::{catalogue, listing, ListingBuilder};
use scrapeview::testkit::store::MemoryStore;

fn service_over(rows: Vec<Listing>) -> (Arc<MemoryStore>, ListingQueryService) {
    let store = Arc::new(MemoryStore::new(rows));
    let service = ListingQueryService::new(Arc::clone(&store) as Arc<dyn ListingStore>, 50);
    (store, service)
}

/// Reference result computed directly from the rows.
fn expected(rows: &[Listing], needle: &str, category: Option<&str>, limit: usize) -> Vec<Listing> {
    let needle = needle.to_lowercase();
    let mut matched: Vec<Listing> = rows
        .iter()
        .filter(|l| l.is_live)
        .filter(|l| category.map_or(true, |slug| l.category_name == slug))
        .filter(|l| l.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.scraped_at.cmp(&a.scraped_at));
    matched.truncate(limit);
    matched
}

fn assert_newest_first(listings: &[Listing]) {
    for pair in listings.windows(2) {
        assert!(
            pair[0].scraped_at >= pair[1].scraped_at,
            "{} scraped before {}",
            pair[0].id,
            pair[1].id
        );
    }
}

#[tokio::test]
async fn default_filter_returns_newest_live_listings_capped() {
    let rows = catalogue(120);
    let (_store, service) = service_over(rows.clone());

    let listings = service.fetch_listings(ListingFilter::default()).await;

    assert_eq!(listings.len(), 50);
    assert!(listings.iter().all(|l| l.is_live));
    assert_newest_first(&listings);
    assert_eq!(listings, expected(&rows, "", None, 50));
}

#[tokio::test]
async fn category_and_search_combine() {
    let rows = catalogue(120);
    let (_store, service) = service_over(rows.clone());

    let filter = ListingFilter::new("truck", Category::new("vehicles"));
    let listings = service.fetch_listings(filter).await;

    assert!(!listings.is_empty());
    for l in &listings {
        assert!(l.is_live);
        assert_eq!(l.category_name, "vehicles");
        assert!(l.title.to_lowercase().contains("truck"), "{}", l.title);
    }
    assert_newest_first(&listings);
    assert_eq!(listings, expected(&rows, "truck", Some("vehicles"), 50));
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let rows = vec![
        listing("a", "Ford F-150 Truck", 1),
        listing("b", "TRUCK toy set", 2),
        listing("c", "Firetruck bedding", 3),
        listing("d", "Oak table", 4),
    ];
    let (_store, service) = service_over(rows);

    let ids: Vec<String> = service
        .fetch_listings(ListingFilter::default().with_search("tRuCk"))
        .await
        .iter()
        .map(|l| l.id.to_string())
        .collect();

    assert_eq!(ids, ["a", "b", "c"]);
}

#[tokio::test]
async fn all_category_does_not_filter_by_category() {
    let rows = vec![
        ListingBuilder::new("a").category("vehicles").minutes_ago(1).build(),
        ListingBuilder::new("b").category("tools").minutes_ago(2).build(),
        ListingBuilder::new("c").category("tools").live(false).build(),
    ];
    let (store, service) = service_over(rows);

    let all = service
        .fetch_listings(ListingFilter::new("", Category::All))
        .await;
    assert_eq!(all.len(), 2);

    let tools = service
        .fetch_listings(ListingFilter::new("", Category::new("tools")))
        .await;
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].id.as_str(), "b");

    assert_eq!(store.call_count(), 2);
}

#[tokio::test]
async fn unknown_category_yields_no_results() {
    let (_store, service) = service_over(catalogue(30));

    let listings = service
        .fetch_listings(ListingFilter::new("", Category::new("spaceships")))
        .await;

    assert!(listings.is_empty());
    let state = service.snapshot();
    assert!(state.shows_no_results());
    assert_eq!(state.category, Category::new("spaceships"));
}

#[tokio::test]
async fn failure_keeps_previous_listings_and_clears_loading() {
    let (store, service) = service_over(catalogue(20));
    let before = service.fetch_listings(ListingFilter::default()).await;
    assert!(!before.is_empty());

    store.fail_next(1);
    let after = service
        .fetch_listings(ListingFilter::default().with_search("sofa"))
        .await;

    assert_eq!(after, before);
    let state = service.snapshot();
    assert!(!state.loading);
    assert_eq!(state.listings, before);
    assert_eq!(state.search_query, "sofa");
}

#[tokio::test]
async fn newer_fetch_wins_over_slow_older_one() {
    let (store, service) = service_over(catalogue(40));
    let service = Arc::new(service);

    let gate = store.hold_next();
    let slow = tokio::spawn({
        let service = Arc::clone(&service);
        async move { service.fetch_listings(ListingFilter::default()).await }
    });
    store.wait_for_calls(1).await;

    let fresh = service
        .fetch_listings(ListingFilter::default().with_search("sofa"))
        .await;
    gate.release();
    let _ = slow.await.unwrap();

    let state = service.snapshot();
    assert!(!state.loading);
    assert_eq!(state.search_query, "sofa");
    assert_eq!(state.listings, fresh);
    assert!(state.listings.iter().all(|l| l.title.contains("sofa")));
}

#[tokio::test]
async fn store_receives_one_query_per_fetch_with_the_filter() {
    let (store, service) = service_over(catalogue(10));

    service
        .fetch_listings(ListingFilter::new("bike", Category::new("furniture")))
        .await;

    let queries = store.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].limit(), 50);
    assert!(queries[0].order().descending);
}
