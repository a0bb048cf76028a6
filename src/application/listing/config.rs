//! Search behavior settings.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::DEFAULT_LIMIT;

/// Configuration for listing search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Maximum listings returned per fetch.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Quiet period after a search text edit before fetching.
    ///
    /// `0` fetches on every edit.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

const fn default_debounce_ms() -> u64 {
    250
}

impl SearchConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            debounce_ms: default_debounce_ms(),
        }
    }
}
