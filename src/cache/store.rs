//! In-memory session cache with per-read expiry
//!
//! Provides a `SessionCache` that stores serializable data as JSON strings
//! keyed by request parameters (e.g. "mars-curiosity-1000"), so repeated
//! queries within the freshness window skip the network entirely.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a cache entry stays fresh unless the caller overrides it.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(10 * 60);

/// A single cached response, held as JSON with its insertion time.
///
/// Storing the JSON string rather than a typed value keeps the map
/// homogeneous across response types and makes an unparsable entry
/// indistinguishable from a missing one on read.
#[derive(Debug)]
struct CacheEntry {
    /// When the entry was written
    inserted_at: Instant,
    /// The serialized payload
    json: String,
}

/// Process-scoped cache of API responses.
///
/// The cache is constructed once at startup and owned by the application;
/// it never touches the filesystem and vanishes with the process. Reads
/// and writes cannot fail: a write that cannot serialize is dropped, and a
/// read that is missing, expired, or unparsable returns `None`. Expired
/// entries are not actively evicted since the next write for the same key
/// overwrites them.
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: HashMap<String, CacheEntry>,
}

impl SessionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores data under the given key, replacing any previous entry.
    ///
    /// Serialization failures are swallowed; the cache is an optimization
    /// and never surfaces errors to callers.
    pub fn put<T: Serialize>(&mut self, key: &str, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            self.entries.insert(
                key.to_string(),
                CacheEntry {
                    inserted_at: Instant::now(),
                    json,
                },
            );
        }
    }

    /// Reads a fresh entry using the default freshness window.
    ///
    /// # Arguments
    /// * `key` - The cache key to read
    ///
    /// # Returns
    /// * `Some(T)` if the entry exists, is younger than [`DEFAULT_MAX_AGE`],
    ///   and parses as `T`
    /// * `None` otherwise
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_with_max_age(key, DEFAULT_MAX_AGE)
    }

    /// Reads a fresh entry with a caller-chosen freshness window.
    ///
    /// An entry older than `max_age` reads as absent but is left in place;
    /// eviction happens lazily when the key is next written.
    pub fn get_with_max_age<T: DeserializeOwned>(&self, key: &str, max_age: Duration) -> Option<T> {
        let entry = self.entries.get(key)?;
        if entry.inserted_at.elapsed() > max_age {
            return None;
        }
        serde_json::from_str(&entry.json).ok()
    }
}
