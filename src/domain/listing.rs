//! Marketplace listing snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::category::Category;
use super::id::ListingId;

/// A single scraped marketplace item.
///
/// Listings are read-only snapshots: nothing in this crate creates,
/// mutates or deletes them on the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    /// Numeric amount, currency-independent.
    pub price: Decimal,
    /// Display string computed upstream. Rendering uses this, never `price`.
    pub formatted_price: String,
    pub images: Vec<String>,
    pub city: String,
    pub state: String,
    /// Category slug, e.g. `home-goods`.
    pub category_name: String,
    pub listing_url: String,
    pub is_live: bool,
    /// Freshness ordering key.
    pub scraped_at: DateTime<Utc>,
}

impl Listing {
    /// First image, used as the thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// `"{city}, {state}"`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Category slug with hyphens rendered as spaces.
    #[must_use]
    pub fn category_label(&self) -> String {
        Category::label_for(&self.category_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn listing() -> Listing {
        Listing {
            id: ListingId::from("abc"),
            title: "Ford F-150 truck".into(),
            price: dec!(12500),
            formatted_price: "$12,500".into(),
            images: vec![
                "https://img.example/1.jpg".into(),
                "https://img.example/2.jpg".into(),
            ],
            city: "Austin".into(),
            state: "TX".into(),
            category_name: "home-goods".into(),
            listing_url: "https://market.example/item/abc".into(),
            is_live: true,
            scraped_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn thumbnail_is_first_image() {
        assert_eq!(listing().thumbnail(), Some("https://img.example/1.jpg"));
    }

    #[test]
    fn thumbnail_absent_without_images() {
        let mut item = listing();
        item.images.clear();
        assert_eq!(item.thumbnail(), None);
    }

    #[test]
    fn location_joins_city_and_state() {
        assert_eq!(listing().location(), "Austin, TX");
    }

    #[test]
    fn category_label_replaces_hyphens() {
        assert_eq!(listing().category_label(), "home goods");
    }
}
