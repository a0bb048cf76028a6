//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `config show`.
///
/// The anon key is never printed in full.
pub fn execute_show(path: &Path, config: &Config) -> Result<()> {
    let file_state = if path.exists() { "loaded" } else { "not found, using defaults" };

    if output::is_json() {
        output::json_line(
            "config",
            json!({
                "path": path.display().to_string(),
                "file": file_state,
                "backend": {
                    "url": config.backend.url,
                    "endpoint": config.backend.endpoint(),
                    "anon_key": config.backend.masked_key(),
                    "table": config.backend.table,
                    "timeout_ms": config.backend.timeout_ms,
                    "connect_timeout_ms": config.backend.connect_timeout_ms,
                },
                "search": {
                    "limit": config.search.limit,
                    "debounce_ms": config.search.debounce_ms,
                },
                "logging": {
                    "level": config.logging.level,
                    "format": config.logging.format,
                },
            }),
        );
    } else {
        output::section("Effective Configuration");
        output::field("File", format!("{} ({file_state})", path.display()));

        output::section("Backend");
        output::field("URL", &config.backend.url);
        output::field("Endpoint", config.backend.endpoint());
        output::field("Anon key", config.backend.masked_key());
        output::field("Timeout", format!("{}ms", config.backend.timeout_ms));
        output::field("Connect", format!("{}ms", config.backend.connect_timeout_ms));

        output::section("Search");
        output::field("Limit", config.search.limit);
        output::field("Debounce", format!("{}ms", config.search.debounce_ms));

        output::section("Logging");
        output::field("Level", &config.logging.level);
        output::field("Format", &config.logging.format);
    }

    if config.backend.anon_key.is_empty() {
        output::warning("No anon key configured");
        output::hint("set SUPABASE_ANON_KEY or backend.anon_key to authenticate");
    }
    Ok(())
}

/// Execute `config path`.
pub fn execute_path(path: &Path) -> Result<()> {
    if output::is_json() {
        output::json_line("path", json!({ "path": path.display().to_string() }));
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
