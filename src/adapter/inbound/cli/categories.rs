//! Handler for the `categories` command.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::{CategoryInfo, KNOWN_CATEGORIES};
use crate::error::Result;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Slug")]
    slug: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
}

fn table(categories: &[CategoryInfo]) -> String {
    let rows = std::iter::once(CategoryRow {
        slug: "all",
        label: "All categories",
    })
    .chain(categories.iter().map(|info| CategoryRow {
        slug: info.slug,
        label: info.label,
    }));
    Table::new(rows).with(Style::rounded()).to_string()
}

/// List the category slugs accepted by `--category`.
pub fn execute() -> Result<()> {
    if output::is_json() {
        let categories: Vec<_> = KNOWN_CATEGORIES
            .iter()
            .map(|info| json!({ "slug": info.slug, "label": info.label }))
            .collect();
        output::json_line("categories", json!({ "categories": categories }));
        return Ok(());
    }

    output::lines(&table(KNOWN_CATEGORIES));
    output::note("Other slugs present in the store are accepted too.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_all_sentinel_first() {
        let rendered = table(KNOWN_CATEGORIES);
        let all = rendered.find("All categories").unwrap();
        let vehicles = rendered.find("vehicles").unwrap();
        assert!(all < vehicles);
        assert!(rendered.contains("home-goods"));
    }
}
