//! Application layer: assembles services from configuration.

pub mod wiring;

pub use wiring::{build_search_service, CachedUpstream};
