//! Catalogue client settings
//!
//! Read from the environment by the composition roots. Unset or invalid
//! values fall back to the defaults below.

use std::time::Duration;

use super::endpoints::{ApiEndpoints, DEFAULT_API_BASE_URL};

/// Default per-request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

/// Environment variable overriding the API base URL
pub const API_BASE_URL_VAR: &str = "POKEDEX_API_BASE_URL";

/// Environment variable overriding the per-request timeout
pub const REQUEST_TIMEOUT_VAR: &str = "POKEDEX_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub api_base_url: String,
    /// Upper bound for a single GET, including reading the body
    pub request_timeout_ms: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl CatalogSettings {
    /// Create settings from environment variables.
    ///
    /// Uses `POKEDEX_API_BASE_URL` and `POKEDEX_REQUEST_TIMEOUT_MS`,
    /// falling back to defaults if not set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup(API_BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_ms = match lookup(REQUEST_TIMEOUT_VAR) {
            None => defaults.request_timeout_ms,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default_ms = defaults.request_timeout_ms,
                        "Invalid {}, using default",
                        REQUEST_TIMEOUT_VAR
                    );
                    defaults.request_timeout_ms
                }
            },
        };

        Self {
            api_base_url,
            request_timeout_ms,
        }
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(&self.api_base_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
