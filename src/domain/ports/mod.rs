//! Port trait definitions (Hexagonal Architecture)
//!
//! - MessageSource: access to the full upstream message collection
//!
//! Infrastructure clients and adapters implement these so the search
//! service stays independent of transport and caching details.

pub mod message_source;

pub use message_source::MessageSource;
