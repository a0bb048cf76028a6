//! Handler for the `check` command.
//!
//! Unlike the search path, which logs and swallows store failures, this
//! command reports them and exits nonzero.

use crate::adapter::inbound::cli::output;
use crate::domain::ListingQuery;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Run a one-row live query against the configured backend.
pub async fn execute(config: &Config) -> Result<()> {
    let store = bootstrap::build_store(config)?;
    let endpoint = config.backend.endpoint();

    let pb = output::spinner(&format!("Querying {endpoint}"));
    match store.select(&ListingQuery::live(1)).await {
        Ok(rows) => {
            output::spinner_success(&pb, "Backend reachable");
            output::field("Endpoint", output::highlight(&endpoint));
            output::field("Key", config.backend.masked_key());
            match rows.first() {
                Some(latest) => output::field(
                    "Newest",
                    format!("{} ({})", latest.title, latest.scraped_at.to_rfc3339()),
                ),
                None => output::note("No live listings yet."),
            }
            Ok(())
        }
        Err(err) => {
            output::spinner_fail(&pb, "Backend query failed");
            output::field("Endpoint", output::muted(&endpoint));
            Err(err.into())
        }
    }
}
