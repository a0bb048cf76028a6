//! Builders for listings used across tests.
//!
//! Timestamps count back from a fixed instant so ordering assertions
//! never depend on the wall clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{Listing, ListingId};

/// Reference instant all builder timestamps are relative to.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Live `home-goods` listing scraped `minutes_ago` before [`base_time`].
pub fn listing(id: &str, title: &str, minutes_ago: i64) -> Listing {
    ListingBuilder::new(id)
        .title(title)
        .minutes_ago(minutes_ago)
        .build()
}

/// Fluent builder for [`Listing`].
#[derive(Debug, Clone)]
pub struct ListingBuilder {
    listing: Listing,
}

impl ListingBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            listing: Listing {
                id: ListingId::from(id),
                title: format!("Listing {id}"),
                price: Decimal::from(100),
                formatted_price: "$100".to_string(),
                images: vec![format!("https://img.example/{id}.jpg")],
                city: "Portland".to_string(),
                state: "OR".to_string(),
                category_name: "home-goods".to_string(),
                listing_url: format!("https://market.example/item/{id}"),
                is_live: true,
                scraped_at: base_time(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.listing.title = title.to_string();
        self
    }

    pub fn category(mut self, slug: &str) -> Self {
        self.listing.category_name = slug.to_string();
        self
    }

    pub fn price(mut self, amount: i64, formatted: &str) -> Self {
        self.listing.price = Decimal::from(amount);
        self.listing.formatted_price = formatted.to_string();
        self
    }

    pub fn location(mut self, city: &str, state: &str) -> Self {
        self.listing.city = city.to_string();
        self.listing.state = state.to_string();
        self
    }

    pub fn images(mut self, images: &[&str]) -> Self {
        self.listing.images = images.iter().map(|s| (*s).to_string()).collect();
        self
    }

    pub fn live(mut self, is_live: bool) -> Self {
        self.listing.is_live = is_live;
        self
    }

    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.listing.scraped_at = base_time() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Listing {
        self.listing
    }
}

/// A mixed catalogue: `count` listings cycling through categories, titles
/// and liveness, scraped one minute apart.
pub fn catalogue(count: usize) -> Vec<Listing> {
    const CATEGORIES: &[&str] = &["vehicles", "home-goods", "electronics", "furniture"];
    const TITLES: &[&str] = &[
        "Ford F-150 Truck",
        "Toyota Tacoma truck bed",
        "Oak dining table",
        "TRUCK toy set",
        "Samsung TV",
        "Leather sofa",
        "Mountain bike",
    ];

    (0..count)
        .map(|i| {
            ListingBuilder::new(&format!("item-{i}"))
                .title(&format!("{} #{i}", TITLES[i % TITLES.len()]))
                .category(CATEGORIES[(i / 2) % CATEGORIES.len()])
                .live(i % 5 != 3)
                .minutes_ago(((i * 37) % count) as i64)
                .build()
        })
        .collect()
}
