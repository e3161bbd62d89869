//! Assembles the search service from configuration.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::adapters::cache::CachedMessageSource;
use crate::domain::models::Config;
use crate::infrastructure::upstream::HttpMessageSource;
use crate::services::SearchService;

/// Message source used in production: the upstream client behind the TTL cache.
pub type CachedUpstream = CachedMessageSource<HttpMessageSource>;

/// Build a search service backed by a cached upstream client.
pub fn build_search_service(config: &Config) -> Result<SearchService<CachedUpstream>> {
    let upstream = HttpMessageSource::new(&config.upstream)
        .context("Failed to create upstream client")?;

    info!(
        url = %upstream.url(),
        timeout_secs = config.upstream.timeout_secs,
        ttl_secs = config.cache.ttl_secs,
        "upstream message source configured"
    );

    let cached = CachedMessageSource::with_ttl(
        Arc::new(upstream),
        Duration::from_secs(config.cache.ttl_secs),
    );

    Ok(SearchService::new(Arc::new(cached), config.search.clone()))
}
