//! Runtime configuration
//!
//! Loads the NASA API key and base URL from the environment, with a `.env`
//! file honored when present. Every setting has a usable default, so
//! configuration loading cannot fail; `DEMO_KEY` works unauthenticated at
//! NASA's reduced rate limits.

use std::env;

/// API key NASA accepts without registration, at tight rate limits
const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Default base URL for NASA's public API
const DEFAULT_API_BASE: &str = "https://api.nasa.gov";

/// Resolved runtime settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Key sent with every API request
    pub api_key: String,
    /// Base URL requests are built against
    pub api_base: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Reads `NASA_API_KEY` and `NASA_API_BASE`, falling back to the
    /// defaults when unset or empty.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(env::var("NASA_API_KEY").ok(), env::var("NASA_API_BASE").ok())
    }

    /// Merges optional values over the defaults
    ///
    /// Separated from the environment lookup so the merge rules are
    /// testable without mutating process state.
    fn from_lookup(api_key: Option<String>, api_base: Option<String>) -> Self {
        Self {
            api_key: api_key
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            api_base: api_base
                .filter(|base| !base.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    /// Applies a command-line key override, which beats the environment.
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.api_key = key;
        }
        self
    }
}
