//! In-memory caching layer for the upstream message collection.
//!
//! Uses `moka` for TTL-based concurrent caching. Wraps the message source
//! port as a decorator.

pub mod cached_message_source;

pub use cached_message_source::{CachedMessageSource, CACHE_KEY, DEFAULT_TTL_SECS};
