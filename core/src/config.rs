//! Runtime configuration. The API base address is the only setting.

use std::env;

/// Environment variable overriding the API base address.
pub const BASE_URL_ENV: &str = "ARTICLE_API_BASE_URL";

/// Address of the deployed article service.
pub const DEFAULT_BASE_URL: &str = "https://article-api.lavoixdabouloussi.org/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Read `ARTICLE_API_BASE_URL`, falling back to the deployed service.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
