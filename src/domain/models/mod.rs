//! Domain models.

pub mod config;
pub mod message;
pub mod search;

pub use config::{
    CacheConfig, Config, LogFormat, LoggingConfig, RotationPolicy, SearchConfig, ServerConfig,
    UpstreamConfig, DEFAULT_UPSTREAM_URL,
};
pub use message::{CacheEntry, Message, MessageEnvelope};
pub use search::{Page, Pagination, SearchPage};
