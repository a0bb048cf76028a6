//! Path utilities for scrapeview.
//!
//! Configuration lives under `~/.scrapeview/`:
//! - `~/.scrapeview/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the scrapeview home directory (`~/.scrapeview/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".scrapeview")
}

/// Returns the default config file path (`~/.scrapeview/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_in_home_dir() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.ends_with("config.toml"));
    }

    #[test]
    fn home_dir_is_dot_scrapeview() {
        assert!(home_dir().ends_with(".scrapeview"));
    }
}
