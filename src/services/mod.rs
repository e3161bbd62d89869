//! Service layer: business logic coordinating domain ports.

pub mod search_service;

pub use search_service::{filter_messages, SearchService};
