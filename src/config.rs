#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend address: the Flask dev server the frontend proxies to.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL, stored without a trailing slash.
    pub base_url: String,
}

impl Config {
    /// Build a config for the given base URL, trimming any trailing slashes.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Load from `GAVEL_BASE_URL`, falling back to the local dev backend.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var("GAVEL_BASE_URL").ok().as_deref())
    }

    fn from_env_value(base_url: Option<&str>) -> Self {
        base_url.map_or_else(Self::default, Self::new)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
