//! Handler for the `search` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::SearchArgs;
use crate::adapter::inbound::cli::{card, output};
use crate::application::listing::QueryState;
use crate::domain::{Category, ListingFilter};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute `search`: one fetch for the given filter, then print.
pub async fn execute(config: &Config, args: &SearchArgs) -> Result<()> {
    let service = bootstrap::build_listing_service(config)?;
    let filter = ListingFilter::new(args.query.clone(), Category::new(&args.category));

    let pb = output::spinner("Fetching listings");
    let listings = service.fetch_listings(filter).await;
    output::spinner_success(&pb, &format!("{} listing(s)", listings.len()));

    render(&service.snapshot());
    Ok(())
}

/// Print a settled query state.
pub fn render(state: &QueryState) {
    let cards = card::cards(&state.listings);

    if output::is_json() {
        output::json_line(
            "listings",
            json!({
                "search_query": state.search_query,
                "category": state.category,
                "count": cards.len(),
                "listings": cards,
            }),
        );
        return;
    }

    if state.shows_no_results() {
        output::note("No listings found.");
        if !state.search_query.is_empty() || !state.category.is_all() {
            output::hint("try a shorter search or the \"all\" category");
        }
        return;
    }

    output::lines(&card::render_table(&cards));
}
