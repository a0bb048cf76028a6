//! Handler for the `browse` command.
//!
//! Reads stdin line by line. A plain line replaces the search text, a
//! `:c <slug>` line switches category, `:q` or end of input quits. The
//! lines feed a [`SearchDriver`], and every settled state the service
//! publishes is printed.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::debug;

use crate::adapter::inbound::cli::command::BrowseArgs;
use crate::adapter::inbound::cli::{output, search};
use crate::application::listing::{QueryState, SearchDriver};
use crate::domain::{Category, ListingFilter};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// One parsed line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    /// Replace the search text.
    Search(String),
    /// Switch category.
    Category(Category),
    Quit,
}

impl BrowseInput {
    /// Parse a raw input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();

        if matches!(trimmed, ":q" | ":quit") {
            return Self::Quit;
        }
        for prefix in [":category", ":c"] {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                    let slug = rest.trim();
                    return Self::Category(if slug.is_empty() {
                        Category::All
                    } else {
                        Category::new(slug)
                    });
                }
            }
        }
        Self::Search(line.to_string())
    }

    /// Apply this input to `filter`. Returns `false` for [`BrowseInput::Quit`].
    pub fn apply(self, filter: &mut ListingFilter) -> bool {
        match self {
            Self::Search(text) => filter.search_query = text,
            Self::Category(category) => filter.category = category,
            Self::Quit => return false,
        }
        true
    }
}

/// Execute `browse`.
pub async fn execute(config: &Config, args: &BrowseArgs) -> Result<()> {
    let service = bootstrap::build_listing_service(config)?;
    let driver = match args.debounce_ms {
        Some(ms) => SearchDriver::new(Arc::clone(&service), Duration::from_millis(ms)),
        None => bootstrap::build_driver(config, Arc::clone(&service)),
    };

    output::hint("type to search, \":c <slug>\" to change category, \":q\" to quit");

    let initial = ListingFilter::default().with_category(Category::new(&args.category));
    let (tx, rx) = watch::channel(initial);
    let renderer = tokio::spawn(render_loop(service.subscribe()));
    let handle = driver.start(rx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = BrowseInput::parse(&line);
        debug!(?input, "Browse input");
        let mut keep_going = true;
        tx.send_if_modified(|filter| {
            let before = filter.clone();
            keep_going = input.apply(filter);
            *filter != before
        });
        if !keep_going {
            break;
        }
    }

    drop(tx);
    handle.join().await;
    drop(service);
    if let Err(err) = renderer.await {
        debug!(error = %err, "Render task ended abnormally");
    }
    Ok(())
}

/// Print each state once its latest fetch has settled.
async fn render_loop(mut states: watch::Receiver<QueryState>) {
    let mut spinner: Option<indicatif::ProgressBar> = None;

    while states.changed().await.is_ok() {
        let state = states.borrow_and_update().clone();
        if state.loading {
            if spinner.is_none() {
                spinner = Some(output::spinner("Searching"));
            }
            continue;
        }
        if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
        search::render(&state);
    }
}
