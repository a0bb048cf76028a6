//! Listing cards: the per-listing view rendered by `search` and `browse`.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::Listing;

/// What one result card shows.
///
/// The price is the upstream display string; the numeric price is never
/// formatted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingCard {
    pub href: String,
    pub thumbnail: Option<String>,
    pub title: String,
    pub price: String,
    pub location: String,
    pub category: String,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        Self {
            href: listing.listing_url.clone(),
            thumbnail: listing.thumbnail().map(str::to_string),
            title: listing.title.clone(),
            price: listing.formatted_price.clone(),
            location: listing.location(),
            category: listing.category_label(),
        }
    }
}

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Thumbnail")]
    thumbnail: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Link")]
    href: String,
}

const TITLE_WIDTH: usize = 48;
const THUMBNAIL_WIDTH: usize = 32;

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

/// Build cards in result order.
#[must_use]
pub fn cards(listings: &[Listing]) -> Vec<ListingCard> {
    listings.iter().map(ListingCard::from).collect()
}

/// Render cards as a text table.
#[must_use]
pub fn render_table(cards: &[ListingCard]) -> String {
    let rows = cards.iter().map(|card| CardRow {
        thumbnail: card
            .thumbnail
            .as_deref()
            .map_or_else(|| "-".to_string(), |url| clip(url, THUMBNAIL_WIDTH)),
        title: clip(&card.title, TITLE_WIDTH),
        price: card.price.clone(),
        location: card.location.clone(),
        category: card.category.clone(),
        href: card.href.clone(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
