//! User-facing listing filter.

use serde::Serialize;

use super::category::Category;

/// What the user asked for: free text plus a category selector.
///
/// An empty `search_query` means "no text filter". Strings are taken
/// as-is; nothing is trimmed or escaped here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ListingFilter {
    pub search_query: String,
    pub category: Category,
}

impl ListingFilter {
    pub fn new(search_query: impl Into<String>, category: Category) -> Self {
        Self {
            search_query: search_query.into(),
            category,
        }
    }

    /// Replace the search text, keeping the category.
    #[must_use]
    pub fn with_search(mut self, search_query: impl Into<String>) -> Self {
        self.search_query = search_query.into();
        self
    }

    /// Replace the category, keeping the search text.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// True when the text filter is active.
    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search_query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_unfiltered() {
        let filter = ListingFilter::default();
        assert!(!filter.has_search());
        assert!(filter.category.is_all());
    }

    #[test]
    fn whitespace_counts_as_search_text() {
        let filter = ListingFilter::default().with_search(" ");
        assert!(filter.has_search());
    }

    #[test]
    fn builders_replace_one_field() {
        let filter = ListingFilter::new("truck", Category::All).with_category("vehicles".into());
        assert_eq!(filter.search_query, "truck");
        assert_eq!(filter.category.slug(), Some("vehicles"));
    }
}
