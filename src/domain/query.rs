//! Listing query construction.
//!
//! A [`ListingQuery`] is a plain value describing one read against the
//! listings collection: equality and case-insensitive substring
//! predicates, a single ordering column, and a row cap. Store adapters
//! translate it to their wire format; [`ListingQuery::apply`] evaluates
//! it in memory with the same semantics.

use std::cmp::Ordering;

use super::filter::ListingFilter;
use super::listing::Listing;

/// Remote collection holding listings.
pub const LISTINGS_TABLE: &str = "listings";

/// Hard cap on rows returned by one query.
pub const DEFAULT_LIMIT: usize = 50;

/// Column names of the listings collection.
pub mod column {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const CATEGORY_NAME: &str = "category_name";
    pub const IS_LIVE: &str = "is_live";
    pub const SCRAPED_AT: &str = "scraped_at";
}

/// Wildcard used in [`Predicate::ILike`] patterns.
pub const WILDCARD: char = '*';

/// A single row filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact equality on the column's text form.
    Eq { column: &'static str, value: String },
    /// Case-insensitive match where `*` matches any run of characters.
    ILike { column: &'static str, pattern: String },
}

impl Predicate {
    /// Whether `listing` satisfies this predicate.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Self::Eq { column, value } => {
                field_text(listing, column).is_some_and(|field| field == *value)
            }
            Self::ILike { column, pattern } => field_text(listing, column)
                .is_some_and(|field| wildcard_match(&pattern.to_lowercase(), &field.to_lowercase())),
        }
    }
}

/// Ordering applied before the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub descending: bool,
}

/// One read against the listings collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    predicates: Vec<Predicate>,
    order: OrderBy,
    limit: usize,
}

impl ListingQuery {
    /// Base query: live listings, newest first, capped at `limit`.
    #[must_use]
    pub fn live(limit: usize) -> Self {
        Self {
            predicates: vec![Predicate::Eq {
                column: column::IS_LIVE,
                value: "true".into(),
            }],
            order: OrderBy {
                column: column::SCRAPED_AT,
                descending: true,
            },
            limit,
        }
    }

    /// Query for what the user asked for.
    ///
    /// Adds an exact category match unless the selector is `all`, and a
    /// case-insensitive title substring match when the search text is
    /// non-empty.
    #[must_use]
    pub fn for_filter(filter: &ListingFilter, limit: usize) -> Self {
        let mut query = Self::live(limit);
        if let Some(slug) = filter.category.slug() {
            query = query.eq(column::CATEGORY_NAME, slug);
        }
        if filter.has_search() {
            query = query.contains(column::TITLE, &filter.search_query);
        }
        query
    }

    /// Add an equality predicate.
    #[must_use]
    pub fn eq(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Eq {
            column,
            value: value.into(),
        });
        self
    }

    /// Add a case-insensitive substring predicate.
    #[must_use]
    pub fn contains(mut self, column: &'static str, needle: &str) -> Self {
        self.predicates.push(Predicate::ILike {
            column,
            pattern: format!("{WILDCARD}{needle}{WILDCARD}"),
        });
        self
    }

    /// Replace the row cap.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[must_use]
    pub const fn order(&self) -> OrderBy {
        self.order
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Whether `listing` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.predicates.iter().all(|p| p.matches(listing))
    }

    /// Evaluate the query over an in-memory collection.
    pub fn apply<I>(&self, rows: I) -> Vec<Listing>
    where
        I: IntoIterator<Item = Listing>,
    {
        let mut selected: Vec<Listing> = rows.into_iter().filter(|l| self.matches(l)).collect();
        let order = self.order;
        selected.sort_by(|a, b| {
            let ordering = compare_by(order.column, a, b);
            if order.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        selected.truncate(self.limit);
        selected
    }
}

fn compare_by(column: &str, a: &Listing, b: &Listing) -> Ordering {
    if column == column::SCRAPED_AT {
        return a.scraped_at.cmp(&b.scraped_at);
    }
    field_text(a, column).cmp(&field_text(b, column))
}

fn field_text(listing: &Listing, column: &str) -> Option<String> {
    let text = match column {
        column::ID => listing.id.as_str().to_string(),
        column::TITLE => listing.title.clone(),
        column::CITY => listing.city.clone(),
        column::STATE => listing.state.clone(),
        column::CATEGORY_NAME => listing.category_name.clone(),
        column::IS_LIVE => listing.is_live.to_string(),
        column::SCRAPED_AT => listing.scraped_at.to_rfc3339(),
        _ => return None,
    };
    Some(text)
}

/// Glob match where `*` matches any (possibly empty) run of characters.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let parts: Vec<&str> = pattern.split(WILDCARD).collect();
    if parts.len() == 1 {
        return pattern == text;
    }

    let first = parts[0];
    let last = parts[parts.len() - 1];
    let middle = &parts[1..parts.len() - 1];

    let Some(mut remaining) = text.strip_prefix(first) else {
        return false;
    };
    for part in middle {
        match remaining.find(part) {
            Some(idx) => remaining = &remaining[idx + part.len()..],
            None => return false,
        }
    }
    remaining.ends_with(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn base_query_selects_live_newest_first() {
        let query = ListingQuery::live(DEFAULT_LIMIT);
        assert_eq!(
            query.predicates(),
            &[Predicate::Eq {
                column: "is_live",
                value: "true".into()
            }]
        );
        assert_eq!(
            query.order(),
            OrderBy {
                column: "scraped_at",
                descending: true
            }
        );
        assert_eq!(query.limit(), 50);
    }

    #[test]
    fn all_category_and_empty_search_add_nothing() {
        let query = ListingQuery::for_filter(&ListingFilter::default(), DEFAULT_LIMIT);
        assert_eq!(query, ListingQuery::live(DEFAULT_LIMIT));
    }

    #[test]
    fn category_adds_exact_match() {
        let filter = ListingFilter::new("", Category::new("vehicles"));
        let query = ListingQuery::for_filter(&filter, DEFAULT_LIMIT);
        assert_eq!(query.predicates().len(), 2);
        assert_eq!(
            query.predicates()[1],
            Predicate::Eq {
                column: "category_name",
                value: "vehicles".into()
            }
        );
    }

    #[test]
    fn search_adds_unanchored_ilike() {
        let filter = ListingFilter::new("Truck", Category::All);
        let query = ListingQuery::for_filter(&filter, DEFAULT_LIMIT);
        assert_eq!(
            query.predicates().last(),
            Some(&Predicate::ILike {
                column: "title",
                pattern: "*Truck*".into()
            })
        );
    }

    #[test]
    fn wildcard_match_handles_anchors() {
        assert!(wildcard_match("*truck*", "big truck for sale"));
        assert!(wildcard_match("*truck*", "truck"));
        assert!(wildcard_match("truck*", "trucks"));
        assert!(!wildcard_match("truck*", "a truck"));
        assert!(wildcard_match("*a*c*", "abc"));
        assert!(!wildcard_match("*a*c*", "cab"));
        assert!(wildcard_match("**", ""));
        assert!(wildcard_match("exact", "exact"));
        assert!(!wildcard_match("exact", "exactly"));
    }
}
