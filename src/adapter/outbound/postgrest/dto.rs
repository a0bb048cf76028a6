//! Row shapes returned by the listings collection.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::domain::{Listing, ListingId};
use crate::error::QueryError;

/// One row of the `listings` collection as PostgREST returns it.
///
/// Text columns that the scraper may leave `NULL` are optional here and
/// default to empty in the domain type.
#[derive(Debug, Deserialize)]
pub struct ListingRow {
    pub id: IdValue,
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub formatted_price: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub category_name: String,
    pub listing_url: String,
    pub is_live: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub scraped_at: DateTime<Utc>,
}

/// Accept `timestamptz` values and bare `timestamp` values, reading the
/// latter as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// Primary keys may be text/uuid or integer columns.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Number(i64),
}

impl From<IdValue> for ListingId {
    fn from(value: IdValue) -> Self {
        match value {
            IdValue::Text(text) => ListingId::new(text),
            IdValue::Number(n) => ListingId::new(n.to_string()),
        }
    }
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Self {
            id: row.id.into(),
            title: row.title,
            price: row.price,
            formatted_price: row.formatted_price.unwrap_or_default(),
            images: row.images.unwrap_or_default(),
            city: row.city.unwrap_or_default(),
            state: row.state.unwrap_or_default(),
            category_name: row.category_name,
            listing_url: row.listing_url,
            is_live: row.is_live,
            scraped_at: row.scraped_at,
        }
    }
}

/// Decode a response body into listings.
///
/// A `null` body is an empty result.
pub fn decode_rows(body: &[u8]) -> Result<Vec<Listing>, QueryError> {
    let rows: Option<Vec<ListingRow>> =
        serde_json::from_slice(body).map_err(|e| QueryError::Decode(e.to_string()))?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .map(Listing::from)
        .collect())
}
