//! Session cache for API responses
//!
//! This module provides an in-memory cache that holds API responses for the
//! lifetime of the process. Entries expire after a short window (ten minutes
//! by default) and expired entries simply read as absent, so callers treat
//! the cache as a best-effort shortcut rather than a source of truth.

mod store;

pub use store::{SessionCache, DEFAULT_MAX_AGE};
