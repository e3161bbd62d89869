//! Message Search - cached HTTP search over an upstream message collection
//!
//! Fetches the full message list from a single upstream API, keeps it in a
//! TTL cache, and answers case-insensitive substring searches with
//! paginated results.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors, and the `MessageSource` port
//! - **Service Layer** (`services`): Search and pagination logic
//! - **Adapters** (`adapters`): TTL cache decorator and the axum HTTP surface
//! - **Infrastructure Layer** (`infrastructure`): Upstream client, config, logging
//! - **Application Layer** (`application`): Wiring from configuration
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use message_search::application::build_search_service;
//! use message_search::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = build_search_service(&Config::default())?;
//!     let page = service.search(Some("hello"), Some(1), Some(10)).await?;
//!     println!("{} matches", page.total);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::CachedMessageSource;
pub use adapters::http::SearchHttpServer;
pub use domain::models::{Config, Message, Pagination, SearchPage};
pub use domain::ports::MessageSource;
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::upstream::HttpMessageSource;
pub use services::SearchService;
