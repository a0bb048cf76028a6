//! PostgREST backend configuration.

use serde::Deserialize;

use crate::domain::LISTINGS_TABLE;

/// Fallback project URL when neither the config file nor the environment
/// provides one (the local development stack).
pub const FALLBACK_URL: &str = "http://localhost:54321";

/// Environment variable overriding [`PostgrestConfig::url`].
pub const URL_ENV: &str = "SUPABASE_URL";

/// Environment variable overriding [`PostgrestConfig::anon_key`].
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, Deserialize)]
pub struct PostgrestConfig {
    /// Project base URL, without the `/rest/v1` suffix.
    #[serde(default = "default_url")]
    pub url: String,
    /// Public anon key sent as `apikey` and bearer token.
    #[serde(default)]
    pub anon_key: String,
    /// Collection holding listings.
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_url() -> String {
    FALLBACK_URL.to_string()
}

fn default_table() -> String {
    LISTINGS_TABLE.to_string()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    3_000
}

impl PostgrestConfig {
    /// Apply `SUPABASE_URL` / `SUPABASE_ANON_KEY` style overrides.
    ///
    /// `lookup` returns the value of an environment variable. Empty values
    /// are ignored so an exported-but-blank variable does not wipe the file
    /// setting.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV).filter(|v| !v.is_empty()) {
            self.url = url;
        }
        if let Some(key) = lookup(ANON_KEY_ENV).filter(|v| !v.is_empty()) {
            self.anon_key = key;
        }
    }

    /// Endpoint for the listings collection.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }

    /// Anon key with everything but the first few characters hidden.
    #[must_use]
    pub fn masked_key(&self) -> String {
        if self.anon_key.is_empty() {
            return "(none)".to_string();
        }
        let visible: String = self.anon_key.chars().take(6).collect();
        format!("{visible}…")
    }
}

impl Default for PostgrestConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            anon_key: String::new(),
            table: default_table(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
