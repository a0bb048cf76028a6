//! Category selector and the built-in slug catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Sentinel meaning "no category filter".
const ALL: &str = "all";

/// Category selector: every category, or one exact slug.
///
/// The slug set is open-ended. Any string other than `"all"` is accepted
/// as a slug without normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Slug(String),
}

impl Category {
    /// Build a selector from a slug, mapping `"all"` to [`Category::All`].
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        if slug == ALL {
            Self::All
        } else {
            Self::Slug(slug)
        }
    }

    /// Slug to filter on, or `None` for [`Category::All`].
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Slug(slug) => Some(slug),
        }
    }

    /// Canonical wire form: `"all"` or the slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.slug().unwrap_or(ALL)
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Display label for a slug: hyphens stand in for spaces.
    #[must_use]
    pub fn label_for(slug: &str) -> String {
        slug.replace('-', " ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Entry in the built-in category catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub slug: &'static str,
    pub label: &'static str,
}

/// Categories offered by the front-end selector.
///
/// Not exhaustive: the store may hold slugs outside this list and they
/// remain valid filters.
pub const KNOWN_CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { slug: "vehicles", label: "Vehicles" },
    CategoryInfo { slug: "home-goods", label: "Home goods" },
    CategoryInfo { slug: "electronics", label: "Electronics" },
    CategoryInfo { slug: "furniture", label: "Furniture" },
    CategoryInfo { slug: "clothing", label: "Clothing" },
    CategoryInfo { slug: "tools", label: "Tools" },
    CategoryInfo { slug: "sports", label: "Sports" },
    CategoryInfo { slug: "toys", label: "Toys" },
    CategoryInfo { slug: "free", label: "Free stuff" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_parses_to_all() {
        assert_eq!(Category::new("all"), Category::All);
        assert_eq!("all".parse::<Category>().unwrap(), Category::All);
        assert_eq!(Category::All.slug(), None);
        assert_eq!(Category::All.as_str(), "all");
    }

    #[test]
    fn slugs_are_kept_verbatim() {
        let category = Category::new("Home Goods");
        assert_eq!(category.slug(), Some("Home Goods"));

        let category = Category::from("vehicles");
        assert_eq!(category, Category::Slug("vehicles".into()));
        assert_eq!(category.to_string(), "vehicles");
    }

    #[test]
    fn label_replaces_every_hyphen() {
        assert_eq!(Category::label_for("sporting-goods-and-more"), "sporting goods and more");
        assert_eq!(Category::label_for("toys"), "toys");
    }

    #[test]
    fn catalogue_slugs_are_canonical() {
        for info in KNOWN_CATEGORIES {
            assert_ne!(info.slug, "all");
            assert!(!info.slug.contains(' '), "{} has a space", info.slug);
            assert_eq!(info.slug, info.slug.to_lowercase());
        }
    }

    #[test]
    fn serializes_as_wire_string() {
        assert_eq!(serde_json::to_string(&Category::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&Category::new("tools")).unwrap(),
            "\"tools\""
        );
    }
}
